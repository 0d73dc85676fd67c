use taskdeck_core::board::STATUS_OPTIONS;
use taskdeck_core::dialog::{CreateFields, DialogOutcome};
use yew::{Callback, Html, Properties, TargetCast, function_component, html, use_state};

use crate::{api, session};

#[derive(Properties, PartialEq)]
pub struct CreateModalProps {
    pub heading: String,
    pub endpoint: String,
    pub board: Option<i64>,
    pub on_done: Callback<DialogOutcome>,
}

#[function_component(CreateModal)]
pub fn create_modal(props: &CreateModalProps) -> Html {
    let fields = use_state(|| match props.board {
        Some(board_id) => CreateFields::new_task(board_id),
        None => CreateFields::new_board(),
    });
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_title_input = {
        let fields = fields.clone();
        let error = error.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.title = input.value();
            fields.set(next);
            error.set(None);
        })
    };

    let on_description_input = {
        let fields = fields.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.description = area.value();
            fields.set(next);
        })
    };

    let on_status_change = {
        let fields = fields.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let mut next = (*fields).clone();
                next.status = Some(select.value());
                fields.set(next);
            } else {
                tracing::warn!("status change event had a non-select target");
            }
        })
    };

    let on_cancel = {
        let on_done = props.on_done.clone();
        let busy = busy.clone();
        Callback::from(move |_: yew::MouseEvent| {
            if !*busy {
                on_done.emit(DialogOutcome::Cancelled);
            }
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let error = error.clone();
        let busy = busy.clone();
        let endpoint = props.endpoint.clone();
        let on_done = props.on_done.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let planned = match fields.plan(session::current_token().as_deref()) {
                Ok(planned) => planned,
                Err(rejection) => {
                    error.set(Some(rejection.to_string()));
                    return;
                }
            };

            busy.set(true);
            error.set(None);
            let endpoint = endpoint.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_done = on_done.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::create(&endpoint, &planned).await {
                    Ok(payload) => {
                        busy.set(false);
                        on_done.emit(DialogOutcome::Created(payload));
                    }
                    Err(fetch_error) => {
                        tracing::warn!(error = %fetch_error, "create request failed");
                        error.set(Some(fetch_error.create_message()));
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_cancel.clone()}>
            <div class="modal modal-sm" onclick={Callback::from(|e: yew::MouseEvent| e.stop_propagation())}>
                <div class="header">{ &props.heading }</div>
                <form class="content" onsubmit={on_submit}>
                    <div class="field">
                        <label>{ "Title" }</label>
                        <input value={fields.title.clone()} oninput={on_title_input} placeholder="Title" />
                    </div>
                    <div class="field">
                        <label>{ "Description" }</label>
                        <textarea
                            value={fields.description.clone()}
                            oninput={on_description_input}
                            placeholder="Description (optional)"
                        />
                    </div>
                    {
                        match &fields.status {
                            Some(status) => html! {
                                <div class="field">
                                    <label>{ "Status" }</label>
                                    <select onchange={on_status_change}>
                                        {
                                            for STATUS_OPTIONS.iter().map(|option| html! {
                                                <option value={*option} selected={status == option}>
                                                    { *option }
                                                </option>
                                            })
                                        }
                                    </select>
                                </div>
                            },
                            None => html! {},
                        }
                    }
                    {
                        match &*error {
                            Some(message) => html! { <div class="error-line">{ message }</div> },
                            None => html! {},
                        }
                    }
                    <div class="footer">
                        <button type="button" class="btn" onclick={on_cancel} disabled={*busy}>
                            { "Cancel" }
                        </button>
                        <button type="submit" class="btn primary" disabled={*busy}>
                            { if *busy { "Creating..." } else { "Create" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
