use contracts::system::auth::{AuthSession, SESSION_KEYS};
use web_sys::window;

const TOKEN_KEY: &str = SESSION_KEYS[0];
const EMAIL_KEY: &str = SESSION_KEYS[1];

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save the verified session to sessionStorage
pub fn save_session(session: &AuthSession) {
    if let Some(storage) = get_session_storage() {
        for (key, value) in session.storage_entries() {
            let _ = storage.set_item(key, &value);
        }
    }
}

/// Get token from sessionStorage
pub fn get_token() -> Option<String> {
    get_session_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// Email, сохраненный между шагами входа (логин -> OTP)
pub fn save_pending_email(email: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(EMAIL_KEY, email);
    }
}

pub fn get_pending_email() -> Option<String> {
    get_session_storage()?
        .get_item(EMAIL_KEY)
        .ok()?
        .filter(|e| !e.trim().is_empty())
}

/// Clear all session keys
pub fn clear_session() {
    if let Some(storage) = get_session_storage() {
        for key in SESSION_KEYS {
            let _ = storage.remove_item(key);
        }
    }
}
