use chrono::Utc;
use taskdeck_core::session::{Session, TOKEN_TTL_SECONDS};
use yew::{Callback, Html, TargetCast, function_component, html, use_state};
use yew_router::prelude::Redirect;

use crate::app::Route;
use crate::{api, session};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(|| "demo".to_string());
    let password = use_state(|| "demo".to_string());
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let signed_in = use_state(|| session::current_token().is_some());

    if *signed_in {
        return html! { <Redirect<Route> to={Route::Board} /> };
    }

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let signed_in = signed_in.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            busy.set(true);
            error.set(None);
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let busy = busy.clone();
            let signed_in = signed_in.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::login(&username, &password).await {
                    Ok(response) => {
                        session::save(&Session::begin(
                            response.token,
                            TOKEN_TTL_SECONDS,
                            Utc::now(),
                        ));
                        busy.set(false);
                        signed_in.set(true);
                    }
                    Err(fetch_error) => {
                        tracing::warn!(error = %fetch_error, "login failed");
                        error.set(Some(fetch_error.login_message()));
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="panel login-card">
                <div class="header">{ "Sign in to Taskdeck" }</div>
                <form class="content" onsubmit={on_submit}>
                    <div class="field">
                        <label>{ "Username" }</label>
                        <input value={(*username).clone()} oninput={on_username_input} />
                    </div>
                    <div class="field">
                        <label>{ "Password" }</label>
                        <input
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                        />
                    </div>
                    {
                        match &*error {
                            Some(message) => html! { <div class="error-line">{ message }</div> },
                            None => html! {},
                        }
                    }
                    <button type="submit" class="btn primary" disabled={*busy}>
                        { if *busy { "Signing In..." } else { "Sign In" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
