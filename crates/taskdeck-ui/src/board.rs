use std::rc::Rc;

use taskdeck_core::board::{Board, STATUS_DOING, STATUS_DONE, STATUS_OPTIONS, STATUS_TO_DO};
use taskdeck_core::dialog::DialogOutcome;
use taskdeck_core::view::{BoardEvent, BoardView, Command, Selection, ViewPhase};
use yew::{
    Callback, Html, Reducible, function_component, html, use_effect_with, use_reducer, use_state,
};

use crate::api;
use crate::components::{BoardSidebar, StatusColumn};
use crate::modal::CreateModal;

const COLUMN_HEADERS: [(&str, &str); 3] = [
    (STATUS_TO_DO, "TODO"),
    (STATUS_DOING, "DOING"),
    (STATUS_DONE, "DONE"),
];

#[derive(Default)]
struct BoardModel {
    view: BoardView,
    commands: Vec<Command>,
    commands_seq: u64,
}

impl Reducible for BoardModel {
    type Action = BoardEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = self.view.clone();
        let commands = view.apply(action);
        let commands_seq = if commands.is_empty() {
            self.commands_seq
        } else {
            self.commands_seq + 1
        };
        Rc::new(Self {
            view,
            commands,
            commands_seq,
        })
    }
}

#[function_component(BoardPage)]
pub fn board_page() -> Html {
    let model = use_reducer(BoardModel::default);
    let create_board_open = use_state(|| false);
    let create_task_open = use_state(|| false);

    {
        let model = model.clone();
        use_effect_with((), move |_| {
            model.dispatch(BoardEvent::BoardsRequested);
            || ()
        });
    }

    {
        let model = model.clone();
        use_effect_with(model.commands_seq, move |_| {
            for command in model.commands.clone() {
                let model = model.clone();
                match command {
                    Command::FetchBoards { epoch } => {
                        wasm_bindgen_futures::spawn_local(async move {
                            let result = api::fetch_boards().await;
                            model.dispatch(BoardEvent::BoardsLoaded { epoch, result });
                        });
                    }
                    Command::FetchTasks { board, epoch } => {
                        wasm_bindgen_futures::spawn_local(async move {
                            let result = api::fetch_tasks(board.id).await;
                            model.dispatch(BoardEvent::TasksLoaded {
                                epoch,
                                board_id: board.id,
                                result,
                            });
                        });
                    }
                }
            }
            || ()
        });
    }

    let on_pick = {
        let model = model.clone();
        Callback::from(move |board: Board| model.dispatch(BoardEvent::BoardPicked(board)))
    };

    let on_open_create_board = {
        let create_board_open = create_board_open.clone();
        Callback::from(move |_: yew::MouseEvent| create_board_open.set(true))
    };

    let on_open_create_task = {
        let create_task_open = create_task_open.clone();
        Callback::from(move |_: yew::MouseEvent| create_task_open.set(true))
    };

    let on_board_dialog_done = {
        let model = model.clone();
        let create_board_open = create_board_open.clone();
        Callback::from(move |outcome: DialogOutcome| {
            if let DialogOutcome::Created(_) = outcome {
                model.dispatch(BoardEvent::BoardsRequested);
            }
            create_board_open.set(false);
        })
    };

    let on_task_dialog_done = {
        let model = model.clone();
        let create_task_open = create_task_open.clone();
        Callback::from(move |outcome: DialogOutcome| {
            if let DialogOutcome::Created(_) = outcome {
                model.dispatch(BoardEvent::TasksRequested);
            }
            create_task_open.set(false);
        })
    };

    match model.view.phase() {
        ViewPhase::Loading => html! { <div class="status-line">{ "Loading..." }</div> },
        ViewPhase::Failed { message } => {
            html! { <div class="status-line error-line">{ message }</div> }
        }
        ViewPhase::Ready { boards, selection } => {
            let selected_id = selection.as_ref().map(|selection| selection.board.id);
            html! {
                <div class="board-screen">
                    <BoardSidebar
                        boards={boards.clone()}
                        selected={selected_id}
                        on_pick={on_pick}
                        on_create_board={on_open_create_board}
                    />
                    <div class="board-main">
                        { render_selection(selection.as_ref(), on_open_create_task) }
                    </div>
                    {
                        if *create_board_open {
                            html! {
                                <CreateModal
                                    heading="Create New Board"
                                    endpoint={api::backend().create_board_url()}
                                    board={None::<i64>}
                                    on_done={on_board_dialog_done}
                                />
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        match (*create_task_open, selection.as_ref()) {
                            (true, Some(selection)) => html! {
                                <CreateModal
                                    heading={format!(
                                        "Create New Task for Board '{}'",
                                        selection.board.title
                                    )}
                                    endpoint={api::backend().create_task_url()}
                                    board={Some(selection.board.id)}
                                    on_done={on_task_dialog_done}
                                />
                            },
                            _ => html! {},
                        }
                    }
                </div>
            }
        }
    }
}

fn render_selection(
    selection: Option<&Selection>,
    on_open_create_task: Callback<yew::MouseEvent>,
) -> Html {
    let Some(selection) = selection else {
        return html! {
            <div class="kanban-empty">{ "No boards yet. Create one to get started." }</div>
        };
    };

    let columns = selection.tasks.columns();
    html! {
        <>
            <div class="board-header">
                <div class="board-title">{ &selection.board.title }</div>
                <button class="btn primary" onclick={on_open_create_task}>
                    { "+ Add New Task" }
                </button>
            </div>
            <div class="kanban-board">
                {
                    for COLUMN_HEADERS.iter().map(|(status, heading)| html! {
                        <StatusColumn
                            heading={*heading}
                            tasks={columns.tasks_for(status).to_vec()}
                        />
                    })
                }
                {
                    for columns.extra_columns(&STATUS_OPTIONS).map(|column| html! {
                        <StatusColumn
                            heading={column.status.clone()}
                            tasks={column.tasks.clone()}
                        />
                    })
                }
            </div>
        </>
    }
}
