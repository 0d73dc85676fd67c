use chrono::Utc;
use taskdeck_core::session::Session;

const SESSION_STORAGE_KEY: &str = "taskdeck.session";

pub fn load() -> Option<Session> {
    let raw = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SESSION_STORAGE_KEY).ok().flatten())?;

    let session = match serde_json::from_str::<Session>(&raw) {
        Ok(session) => session,
        Err(error) => {
            tracing::error!(%error, "failed parsing session from local storage");
            clear();
            return None;
        }
    };

    if session.is_expired(Utc::now()) {
        tracing::info!("stored session has expired; clearing it");
        clear();
        return None;
    }

    Some(session)
}

pub fn save(session: &Session) {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    if let Some(storage) = storage
        && let Ok(json) = serde_json::to_string(session)
    {
        let _ = storage.set_item(SESSION_STORAGE_KEY, &json);
    }
}

pub fn clear() {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    if let Some(storage) = storage {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

pub fn current_token() -> Option<String> {
    let session = load()?;
    session.valid_token(Utc::now()).map(str::to_string)
}
