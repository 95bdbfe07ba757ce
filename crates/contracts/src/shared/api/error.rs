use serde::Deserialize;
use thiserror::Error;

/// Сообщение backend-а, которым он сообщает о протухшем токене
pub const SESSION_EXPIRED_MESSAGE: &str = "jwt expired";

/// Ошибка проверки пользовательского ввода до отправки запроса
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Ошибки обращения к admin API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("jwt expired")]
    SessionExpired,

    /// Backend вернул `responseMessage`
    #[error("{0}")]
    Backend(String),

    #[error("server responded with status {0}")]
    Http(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("not authenticated")]
    NotAuthenticated,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    response_message: Option<String>,
}

impl ApiError {
    pub fn from_backend_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message == SESSION_EXPIRED_MESSAGE {
            ApiError::SessionExpired
        } else {
            ApiError::Backend(message)
        }
    }

    /// Разбирает тело неуспешного ответа. Без `responseMessage` остается только HTTP статус.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        match parsed.response_message {
            Some(message) if !message.trim().is_empty() => Self::from_backend_message(message),
            _ => ApiError::Http(status),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// Текст для уведомления: сообщение backend-а, если оно есть, иначе `default`
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ApiError::Backend(message) => message.clone(),
            ApiError::Validation(err) => err.message.clone(),
            ApiError::SessionExpired => "Session expired. Please sign in again".to_string(),
            ApiError::NotAuthenticated => "Please sign in to continue".to_string(),
            _ => default.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jwt_expired_maps_to_session_expired() {
        let err = ApiError::from_error_body(401, r#"{"responseMessage":"jwt expired"}"#);
        assert!(err.is_session_expired());
    }

    #[test]
    fn backend_message_is_preferred_over_default() {
        let err = ApiError::from_error_body(400, r#"{"responseMessage":"User not found"}"#);
        assert_eq!(err, ApiError::Backend("User not found".to_string()));
        assert_eq!(err.user_message("Failed to fetch data"), "User not found");
    }

    #[test]
    fn missing_message_falls_back_to_status() {
        let err = ApiError::from_error_body(502, "<html>bad gateway</html>");
        assert_eq!(err, ApiError::Http(502));
        assert_eq!(err.user_message("Failed to fetch data"), "Failed to fetch data");

        let blank = ApiError::from_error_body(500, r#"{"responseMessage":"  "}"#);
        assert_eq!(blank, ApiError::Http(500));
    }

    #[test]
    fn validation_error_message_is_shown() {
        let err: ApiError = ValidationError::new("remark", "Remark is required").into();
        assert_eq!(err.user_message("x"), "Remark is required");
    }
}
