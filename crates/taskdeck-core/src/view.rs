use tracing::{debug, info, warn};

use crate::api::FetchError;
use crate::board::{Board, Task};
use crate::columns::Columns;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    Loading,
    Failed {
        message: String,
    },
    Ready {
        boards: Vec<Board>,
        selection: Option<Selection>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub board: Board,
    pub tasks: TasksPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TasksPhase {
    Fetching { stale: Columns },
    Loaded(Columns),
}

impl TasksPhase {
    pub fn columns(&self) -> &Columns {
        match self {
            TasksPhase::Fetching { stale } => stale,
            TasksPhase::Loaded(columns) => columns,
        }
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self, TasksPhase::Fetching { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    BoardsRequested,
    TasksRequested,
    BoardPicked(Board),
    BoardsLoaded {
        epoch: u64,
        result: Result<Vec<Board>, FetchError>,
    },
    TasksLoaded {
        epoch: u64,
        board_id: i64,
        result: Result<Vec<Task>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchBoards { epoch: u64 },
    FetchTasks { board: Board, epoch: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    phase: ViewPhase,
    boards_epoch: u64,
    tasks_epoch: u64,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            phase: ViewPhase::Loading,
            boards_epoch: 0,
            tasks_epoch: 0,
        }
    }
}

impl BoardView {
    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn apply(&mut self, event: BoardEvent) -> Vec<Command> {
        if matches!(self.phase, ViewPhase::Failed { .. }) {
            debug!(event = ?event, "event ignored after board load failure");
            return Vec::new();
        }

        match event {
            BoardEvent::BoardsRequested => self.begin_board_fetch(),
            BoardEvent::TasksRequested => self.begin_task_refresh(),
            BoardEvent::BoardPicked(board) => self.pick_board(board),
            BoardEvent::BoardsLoaded { epoch, result } => self.finish_board_fetch(epoch, result),
            BoardEvent::TasksLoaded {
                epoch,
                board_id,
                result,
            } => self.finish_task_fetch(epoch, board_id, result),
        }
    }

    fn begin_board_fetch(&mut self) -> Vec<Command> {
        self.boards_epoch += 1;
        info!(epoch = self.boards_epoch, "requesting board list");
        vec![Command::FetchBoards {
            epoch: self.boards_epoch,
        }]
    }

    fn begin_task_refresh(&mut self) -> Vec<Command> {
        let ViewPhase::Ready {
            selection: Some(selection),
            ..
        } = &mut self.phase
        else {
            warn!("task refresh requested with no board selected");
            return Vec::new();
        };

        let board = selection.board.clone();
        let stale = selection.tasks.columns().clone();
        selection.tasks = TasksPhase::Fetching { stale };
        self.tasks_epoch += 1;
        info!(board_id = board.id, epoch = self.tasks_epoch, "refreshing tasks");
        vec![Command::FetchTasks {
            board,
            epoch: self.tasks_epoch,
        }]
    }

    fn pick_board(&mut self, board: Board) -> Vec<Command> {
        let ViewPhase::Ready { selection, .. } = &mut self.phase else {
            warn!(board_id = board.id, "board picked before the list loaded");
            return Vec::new();
        };

        info!(board_id = board.id, title = %board.title, "board selected");
        let stale = match selection {
            Some(current) if current.board.id == board.id => current.tasks.columns().clone(),
            _ => Columns::default(),
        };
        *selection = Some(Selection {
            board: board.clone(),
            tasks: TasksPhase::Fetching { stale },
        });
        self.tasks_epoch += 1;
        vec![Command::FetchTasks {
            board,
            epoch: self.tasks_epoch,
        }]
    }

    fn finish_board_fetch(
        &mut self,
        epoch: u64,
        result: Result<Vec<Board>, FetchError>,
    ) -> Vec<Command> {
        if epoch != self.boards_epoch {
            debug!(
                epoch,
                current = self.boards_epoch,
                "discarding stale board list response"
            );
            return Vec::new();
        }

        match result {
            Ok(boards) => {
                info!(count = boards.len(), "board list loaded");
                match boards.first().cloned() {
                    Some(first) => {
                        let stale = self.carried_columns(first.id);
                        self.tasks_epoch += 1;
                        let command = Command::FetchTasks {
                            board: first.clone(),
                            epoch: self.tasks_epoch,
                        };
                        self.phase = ViewPhase::Ready {
                            boards,
                            selection: Some(Selection {
                                board: first,
                                tasks: TasksPhase::Fetching { stale },
                            }),
                        };
                        vec![command]
                    }
                    None => {
                        self.phase = ViewPhase::Ready {
                            boards,
                            selection: None,
                        };
                        Vec::new()
                    }
                }
            }
            Err(error) => {
                warn!(%error, "board list fetch failed");
                self.phase = ViewPhase::Failed {
                    message: error.board_load_message().to_string(),
                };
                Vec::new()
            }
        }
    }

    fn carried_columns(&self, board_id: i64) -> Columns {
        match &self.phase {
            ViewPhase::Ready {
                selection: Some(selection),
                ..
            } if selection.board.id == board_id => selection.tasks.columns().clone(),
            _ => Columns::default(),
        }
    }

    fn finish_task_fetch(
        &mut self,
        epoch: u64,
        board_id: i64,
        result: Result<Vec<Task>, FetchError>,
    ) -> Vec<Command> {
        if epoch != self.tasks_epoch {
            debug!(
                epoch,
                current = self.tasks_epoch,
                board_id,
                "discarding stale task response"
            );
            return Vec::new();
        }

        let ViewPhase::Ready {
            selection: Some(selection),
            ..
        } = &mut self.phase
        else {
            debug!(board_id, "task response arrived with nothing selected");
            return Vec::new();
        };

        match result {
            Ok(tasks) => {
                let columns = Columns::group(tasks);
                info!(board_id, task_count = columns.task_count(), "tasks loaded");
                selection.tasks = TasksPhase::Loaded(columns);
            }
            Err(error) => {
                warn!(board_id, %error, "task fetch failed; keeping previous columns");
                let stale = selection.tasks.columns().clone();
                selection.tasks = TasksPhase::Loaded(stale);
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{STATUS_DOING, STATUS_TO_DO};

    fn boards_ok(epoch: u64, boards: Vec<Board>) -> BoardEvent {
        BoardEvent::BoardsLoaded {
            epoch,
            result: Ok(boards),
        }
    }

    fn tasks_ok(epoch: u64, board_id: i64, tasks: Vec<Task>) -> BoardEvent {
        BoardEvent::TasksLoaded {
            epoch,
            board_id,
            result: Ok(tasks),
        }
    }

    fn fetch_epoch(commands: &[Command]) -> u64 {
        match commands {
            [Command::FetchTasks { epoch, .. }] => *epoch,
            other => panic!("expected a single task fetch, got {other:?}"),
        }
    }

    fn ready_selection(view: &BoardView) -> &Selection {
        match view.phase() {
            ViewPhase::Ready {
                selection: Some(selection),
                ..
            } => selection,
            other => panic!("expected a selection, got {other:?}"),
        }
    }

    fn start_with_boards(boards: Vec<Board>) -> (BoardView, Vec<Command>) {
        let mut view = BoardView::default();
        let commands = view.apply(BoardEvent::BoardsRequested);
        assert_eq!(commands, vec![Command::FetchBoards { epoch: 1 }]);
        let commands = view.apply(boards_ok(1, boards));
        (view, commands)
    }

    #[test]
    fn first_board_is_selected_with_exactly_one_task_fetch() {
        let (view, commands) =
            start_with_boards(vec![Board::new(7, "Platform"), Board::new(8, "Design")]);

        assert_eq!(commands.len(), 1);
        assert!(
            matches!(&commands[0], Command::FetchTasks { board, .. } if board.id == 7),
            "the fetch must target the first returned board"
        );

        let selection = ready_selection(&view);
        assert_eq!(selection.board.id, 7);
        assert!(selection.tasks.is_fetching());
    }

    #[test]
    fn empty_board_list_is_ready_with_no_selection() {
        let (view, commands) = start_with_boards(Vec::new());

        assert!(commands.is_empty());
        match view.phase() {
            ViewPhase::Ready { boards, selection } => {
                assert!(boards.is_empty());
                assert!(selection.is_none());
            }
            other => panic!("expected ready state, got {other:?}"),
        }
    }

    #[test]
    fn board_list_failure_shows_a_fixed_message_and_absorbs_later_events() {
        let mut view = BoardView::default();
        view.apply(BoardEvent::BoardsRequested);

        let commands = view.apply(BoardEvent::BoardsLoaded {
            epoch: 1,
            result: Err(FetchError::Network("connection refused".to_string())),
        });
        assert!(commands.is_empty());
        assert_eq!(
            view.phase(),
            &ViewPhase::Failed {
                message: "Failed to fetch board data".to_string(),
            }
        );

        assert!(view.apply(BoardEvent::BoardsRequested).is_empty());
        assert!(view.apply(BoardEvent::TasksRequested).is_empty());
    }

    #[test]
    fn missing_token_failure_names_the_token() {
        let mut view = BoardView::default();
        view.apply(BoardEvent::BoardsRequested);
        view.apply(BoardEvent::BoardsLoaded {
            epoch: 1,
            result: Err(FetchError::NoSession),
        });

        assert_eq!(
            view.phase(),
            &ViewPhase::Failed {
                message: "No token found".to_string(),
            }
        );
    }

    #[test]
    fn picking_a_board_updates_the_selection_before_tasks_arrive() {
        let (mut view, _) =
            start_with_boards(vec![Board::new(7, "Platform"), Board::new(8, "Design")]);

        let commands = view.apply(BoardEvent::BoardPicked(Board::new(8, "Design")));
        assert_eq!(fetch_epoch(&commands), 2);

        let selection = ready_selection(&view);
        assert_eq!(selection.board.title, "Design");
        assert!(selection.tasks.is_fetching());
        assert!(
            selection.tasks.columns().is_empty(),
            "a cross-board switch must not show the previous board's columns"
        );
    }

    #[test]
    fn stale_task_response_is_discarded_after_a_board_switch() {
        let (mut view, first_commands) =
            start_with_boards(vec![Board::new(7, "Platform"), Board::new(8, "Design")]);
        let first_epoch = fetch_epoch(&first_commands);

        let second_commands = view.apply(BoardEvent::BoardPicked(Board::new(8, "Design")));
        let second_epoch = fetch_epoch(&second_commands);

        view.apply(tasks_ok(
            second_epoch,
            8,
            vec![Task::new(21, 8, "Mock flows", STATUS_TO_DO)],
        ));
        let commands = view.apply(tasks_ok(
            first_epoch,
            7,
            vec![Task::new(11, 7, "Old board task", STATUS_DOING)],
        ));

        assert!(commands.is_empty());
        let selection = ready_selection(&view);
        assert_eq!(selection.board.id, 8);
        let columns = selection.tasks.columns();
        assert_eq!(columns.task_count(), 1);
        assert_eq!(columns.tasks_for(STATUS_TO_DO)[0].title, "Mock flows");
        assert!(columns.tasks_for(STATUS_DOING).is_empty());
    }

    #[test]
    fn task_refresh_keeps_the_current_columns_while_fetching() {
        let (mut view, commands) = start_with_boards(vec![Board::new(7, "Platform")]);
        let epoch = fetch_epoch(&commands);
        view.apply(tasks_ok(
            epoch,
            7,
            vec![Task::new(11, 7, "Draft outline", STATUS_DOING)],
        ));

        let commands = view.apply(BoardEvent::TasksRequested);
        let next_epoch = fetch_epoch(&commands);
        assert_eq!(next_epoch, epoch + 1);

        let selection = ready_selection(&view);
        assert!(selection.tasks.is_fetching());
        assert_eq!(selection.tasks.columns().task_count(), 1);

        view.apply(tasks_ok(
            next_epoch,
            7,
            vec![
                Task::new(11, 7, "Draft outline", STATUS_DOING),
                Task::new(12, 7, "Write spec", STATUS_TO_DO),
            ],
        ));
        assert_eq!(ready_selection(&view).tasks.columns().task_count(), 2);
    }

    #[test]
    fn failed_task_refresh_retains_previous_columns_silently() {
        let (mut view, commands) = start_with_boards(vec![Board::new(7, "Platform")]);
        let epoch = fetch_epoch(&commands);
        view.apply(tasks_ok(
            epoch,
            7,
            vec![Task::new(11, 7, "Draft outline", STATUS_DOING)],
        ));

        let commands = view.apply(BoardEvent::TasksRequested);
        let next_epoch = fetch_epoch(&commands);
        view.apply(BoardEvent::TasksLoaded {
            epoch: next_epoch,
            board_id: 7,
            result: Err(FetchError::Http {
                status: 500,
                message: None,
            }),
        });

        let selection = ready_selection(&view);
        assert!(!selection.tasks.is_fetching());
        assert_eq!(selection.tasks.columns().task_count(), 1);
        assert!(matches!(view.phase(), ViewPhase::Ready { .. }));
    }

    #[test]
    fn relist_reselects_the_first_board() {
        let (mut view, commands) =
            start_with_boards(vec![Board::new(7, "Platform"), Board::new(8, "Design")]);
        let epoch = fetch_epoch(&commands);
        view.apply(tasks_ok(
            epoch,
            7,
            vec![Task::new(11, 7, "Draft outline", STATUS_DOING)],
        ));

        let commands = view.apply(BoardEvent::BoardPicked(Board::new(8, "Design")));
        let epoch = fetch_epoch(&commands);
        view.apply(tasks_ok(
            epoch,
            8,
            vec![Task::new(21, 8, "Mock flows", STATUS_TO_DO)],
        ));

        let commands = view.apply(BoardEvent::BoardsRequested);
        assert_eq!(commands, vec![Command::FetchBoards { epoch: 2 }]);

        let commands = view.apply(boards_ok(
            2,
            vec![
                Board::new(9, "Growth"),
                Board::new(7, "Platform"),
                Board::new(8, "Design"),
            ],
        ));
        let epoch = fetch_epoch(&commands);

        let selection = ready_selection(&view);
        assert_eq!(selection.board.id, 9);
        assert!(selection.tasks.columns().is_empty());

        view.apply(tasks_ok(epoch, 9, Vec::new()));
        assert!(ready_selection(&view).tasks.columns().is_empty());
    }

    #[test]
    fn relist_carries_columns_when_the_first_board_stays_selected() {
        let (mut view, commands) = start_with_boards(vec![Board::new(7, "Platform")]);
        let epoch = fetch_epoch(&commands);
        view.apply(tasks_ok(
            epoch,
            7,
            vec![Task::new(11, 7, "Draft outline", STATUS_DOING)],
        ));

        view.apply(BoardEvent::BoardsRequested);
        view.apply(boards_ok(
            2,
            vec![Board::new(7, "Platform"), Board::new(10, "Ops")],
        ));

        let selection = ready_selection(&view);
        assert_eq!(selection.board.id, 7);
        assert!(selection.tasks.is_fetching());
        assert_eq!(selection.tasks.columns().task_count(), 1);
    }

    #[test]
    fn relist_supersedes_a_pending_task_fetch() {
        let (mut view, commands) = start_with_boards(vec![Board::new(7, "Platform")]);
        let pending_epoch = fetch_epoch(&commands);

        view.apply(BoardEvent::BoardsRequested);
        let commands = view.apply(boards_ok(2, vec![Board::new(7, "Platform")]));
        let fresh_epoch = fetch_epoch(&commands);
        assert!(fresh_epoch > pending_epoch);

        let commands = view.apply(tasks_ok(
            pending_epoch,
            7,
            vec![Task::new(11, 7, "Leftover", STATUS_DOING)],
        ));
        assert!(commands.is_empty());
        assert!(ready_selection(&view).tasks.is_fetching());

        view.apply(tasks_ok(fresh_epoch, 7, Vec::new()));
        let selection = ready_selection(&view);
        assert!(!selection.tasks.is_fetching());
        assert!(selection.tasks.columns().is_empty());
    }

    #[test]
    fn requests_before_the_list_loads_are_ignored() {
        let mut view = BoardView::default();
        assert!(view.apply(BoardEvent::TasksRequested).is_empty());
        assert!(
            view.apply(BoardEvent::BoardPicked(Board::new(7, "Platform")))
                .is_empty()
        );
        assert_eq!(view.phase(), &ViewPhase::Loading);
    }

    #[test]
    fn task_refresh_with_no_selection_is_ignored() {
        let (mut view, _) = start_with_boards(Vec::new());
        assert!(view.apply(BoardEvent::TasksRequested).is_empty());
    }
}
