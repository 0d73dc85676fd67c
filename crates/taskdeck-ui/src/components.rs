use taskdeck_core::board::{Board, Task};
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct BoardSidebarProps {
    pub boards: Vec<Board>,
    pub selected: Option<i64>,
    pub on_pick: Callback<Board>,
    pub on_create_board: Callback<yew::MouseEvent>,
}

#[function_component(BoardSidebar)]
pub fn board_sidebar(props: &BoardSidebarProps) -> Html {
    html! {
        <div class="panel board-sidebar">
            <div class="header">{ "Boards" }</div>
            {
                for props.boards.iter().map(|board| {
                    let active = props.selected == Some(board.id);
                    let class = if active { "board-item active" } else { "board-item" };
                    let on_pick = props.on_pick.clone();
                    let picked = board.clone();
                    html! {
                        <div class={class} onclick={move |_| on_pick.emit(picked.clone())}>
                            { &board.title }
                        </div>
                    }
                })
            }
            <button class="btn" onclick={props.on_create_board.clone()}>
                { "+ Create New Board" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusColumnProps {
    pub heading: String,
    pub tasks: Vec<Task>,
}

#[function_component(StatusColumn)]
pub fn status_column(props: &StatusColumnProps) -> Html {
    html! {
        <div class="kanban-column">
            <div class="kanban-column-header">
                <span>{ &props.heading }</span>
                <span class="badge">{ props.tasks.len() }</span>
            </div>
            <div class="kanban-column-body">
                {
                    if props.tasks.is_empty() {
                        html! { <div class="kanban-empty">{ "No tasks" }</div> }
                    } else {
                        html! {
                            <>
                                {
                                    for props.tasks.iter().map(|task| html! {
                                        <TaskCard task={task.clone()} />
                                    })
                                }
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
    pub task: Task,
}

#[function_component(TaskCard)]
pub fn task_card(props: &TaskCardProps) -> Html {
    html! {
        <div class="kanban-card">
            <div class="kanban-card-title">{ &props.task.title }</div>
            {
                if props.task.description.is_empty() {
                    html! {}
                } else {
                    html! { <div class="kanban-card-desc">{ &props.task.description }</div> }
                }
            }
        </div>
    }
}
