use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const STATUS_TO_DO: &str = "To Do";
pub const STATUS_DOING: &str = "Doing";
pub const STATUS_DONE: &str = "Done";

pub const STATUS_OPTIONS: [&str; 3] = [STATUS_TO_DO, STATUS_DOING, STATUS_DONE];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Board {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: String,

    #[serde(default, rename = "boardId")]
    pub board_id: i64,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Task {
    pub fn new(id: i64, board_id: i64, title: &str, status: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            status: status.to_string(),
            board_id,
            extra: BTreeMap::new(),
        }
    }
}
