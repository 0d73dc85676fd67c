use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("no session token available")]
    NoSession,
    #[error("request failed with status {status}")]
    Http { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn board_load_message(&self) -> &'static str {
        match self {
            FetchError::NoSession => "No token found",
            _ => "Failed to fetch board data",
        }
    }

    pub fn login_message(&self) -> String {
        match self {
            FetchError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            FetchError::Http { .. } => "Login failed".to_string(),
            _ => "Something went wrong!".to_string(),
        }
    }

    pub fn create_message(&self) -> String {
        match self {
            FetchError::NoSession => "No token found".to_string(),
            FetchError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            FetchError::Http { .. } => "Failed to create board".to_string(),
            _ => "Something went wrong!".to_string(),
        }
    }
}

pub fn error_from_response(status: u16, body: &str) -> FetchError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message);
    FetchError::Http { status, message }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataEnvelope<T> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
