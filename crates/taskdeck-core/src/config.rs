use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_login_path")]
    pub login_path: String,

    #[serde(default = "default_boards_path")]
    pub boards_path: String,

    #[serde(default = "default_tasks_path")]
    pub tasks_path: String,

    #[serde(default = "default_create_board_path")]
    pub create_board_path: String,

    #[serde(default = "default_create_task_path")]
    pub create_task_path: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            login_path: default_login_path(),
            boards_path: default_boards_path(),
            tasks_path: default_tasks_path(),
            create_board_path: default_create_board_path(),
            create_task_path: default_create_task_path(),
        }
    }
}

impl BackendConfig {
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.endpoint, self.login_path)
    }

    pub fn boards_url(&self) -> String {
        format!("{}{}", self.endpoint, self.boards_path)
    }

    pub fn tasks_url(&self, board_id: i64) -> String {
        format!("{}{}?boardId={}", self.endpoint, self.tasks_path, board_id)
    }

    pub fn create_board_url(&self) -> String {
        format!("{}{}", self.endpoint, self.create_board_path)
    }

    pub fn create_task_url(&self) -> String {
        format!("{}{}", self.endpoint, self.create_task_path)
    }
}

fn default_endpoint() -> String {
    "http://localhost:3090/".to_string()
}

fn default_login_path() -> String {
    "api/v1/users/login".to_string()
}

fn default_boards_path() -> String {
    "api/v1/boards/getAllBoards".to_string()
}

fn default_tasks_path() -> String {
    "api/v1/tasks/getAllTasks".to_string()
}

fn default_create_board_path() -> String {
    "api/v1/boards/".to_string()
}

fn default_create_task_path() -> String {
    "api/v1/tasks/".to_string()
}
