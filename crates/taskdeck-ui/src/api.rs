use std::sync::OnceLock;

use gloo::net::http::{Request, Response};
use taskdeck_core::api::{
    DataEnvelope, FetchError, LoginRequest, LoginResponse, error_from_response,
};
use taskdeck_core::board::{Board, Task};
use taskdeck_core::config::BackendConfig;
use taskdeck_core::dialog::PlannedCreate;

use crate::session;

const BACKEND_CONFIG_TOML: &str = include_str!("../assets/backend.toml");

pub fn backend() -> &'static BackendConfig {
    static CONFIG: OnceLock<BackendConfig> = OnceLock::new();
    CONFIG.get_or_init(load_backend_config)
}

fn load_backend_config() -> BackendConfig {
    match BackendConfig::from_toml(BACKEND_CONFIG_TOML) {
        Ok(config) => {
            tracing::info!(endpoint = %config.endpoint, "loaded backend config");
            config
        }
        Err(error) => {
            tracing::error!(%error, "failed to parse backend config; using defaults");
            BackendConfig::default()
        }
    }
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, FetchError> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&backend().login_url())
        .json(&body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let body = success_body(response).await?;
    serde_json::from_str(&body).map_err(decode)
}

pub async fn fetch_boards() -> Result<Vec<Board>, FetchError> {
    let token = session::current_token().ok_or(FetchError::NoSession)?;
    let body = authorized_get(&backend().boards_url(), &token).await?;
    let envelope: DataEnvelope<Board> = serde_json::from_str(&body).map_err(decode)?;
    Ok(envelope.data)
}

pub async fn fetch_tasks(board_id: i64) -> Result<Vec<Task>, FetchError> {
    let token = session::current_token().ok_or(FetchError::NoSession)?;
    let body = authorized_get(&backend().tasks_url(board_id), &token).await?;
    let envelope: DataEnvelope<Task> = serde_json::from_str(&body).map_err(decode)?;
    Ok(envelope.data)
}

pub async fn create(url: &str, planned: &PlannedCreate) -> Result<serde_json::Value, FetchError> {
    let response = Request::post(url)
        .header("Authorization", &planned.token)
        .json(&planned.request)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let body = success_body(response).await?;
    serde_json::from_str(&body).map_err(decode)
}

async fn authorized_get(url: &str, token: &str) -> Result<String, FetchError> {
    let response = Request::get(url)
        .header("Authorization", token)
        .send()
        .await
        .map_err(network)?;
    success_body(response).await
}

async fn success_body(response: Response) -> Result<String, FetchError> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    if !(200..=299).contains(&status) {
        return Err(error_from_response(status, &body));
    }
    Ok(body)
}

fn network(error: gloo::net::Error) -> FetchError {
    FetchError::Network(error.to_string())
}

fn decode(error: serde_json::Error) -> FetchError {
    FetchError::Decode(error.to_string())
}
