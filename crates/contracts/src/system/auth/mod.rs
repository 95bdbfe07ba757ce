pub mod otp;

use crate::shared::api::ValidationError;
use serde::{Deserialize, Serialize};

/// Минимальная длина пароля и кода OTP
pub const MIN_SECRET_LEN: usize = 4;

/// Ключи sessionStorage, которые принадлежат сессии администратора
pub const SESSION_KEYS: [&str; 4] = ["token", "email", "type", "userType"];

/// Первый шаг входа: email + пароль, в ответ backend шлет OTP на почту
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        if self.password.chars().count() < MIN_SECRET_LEN {
            return Err(ValidationError::new(
                "password",
                "Password must be at least 4 characters",
            ));
        }
        Ok(())
    }
}

/// Второй шаг: код из письма
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerifyRequest {
    pub email: String,
    pub email_otp: String,
}

impl OtpVerifyRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::new(
                "email",
                "Login session not found. Please sign in again",
            ));
        }
        if self.email_otp.trim().chars().count() < MIN_SECRET_LEN {
            return Err(ValidationError::new(
                "emailOtp",
                "Your one-time OTP must be 4 characters",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpResendRequest {
    pub email: String,
}

/// `result` успешной проверки OTP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

impl AuthSession {
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Пары ключ/значение для записи в sessionStorage
    pub fn storage_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (SESSION_KEYS[0], self.token.clone()),
            (SESSION_KEYS[1], self.email.clone()),
            (SESSION_KEYS[2], self.kind.clone().unwrap_or_default()),
            (SESSION_KEYS[3], self.user_type.clone().unwrap_or_default()),
        ]
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::new("email", "Please enter a valid email address");
    let email = email.trim();
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let domain_ok = domain
        .split_once('.')
        .map(|(name, tld)| !name.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
        .unwrap_or(false);
    if local.is_empty() || domain.contains('@') || !domain_ok || email.contains(char::is_whitespace)
    {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(validate_email("admin@atmc.io").is_ok());
        assert!(validate_email("a.b@mail.example.com").is_ok());
        assert!(validate_email("admin").is_err());
        assert!(validate_email("@atmc.io").is_err());
        assert!(validate_email("admin@atmc").is_err());
        assert!(validate_email("ad min@atmc.io").is_err());
        assert!(validate_email("a@b@c.io").is_err());
    }

    #[test]
    fn login_requires_password_length() {
        let short = LoginRequest {
            email: "admin@atmc.io".into(),
            password: "abc".into(),
        };
        assert_eq!(short.validate().unwrap_err().field, "password");
        let ok = LoginRequest {
            password: "abcd".into(),
            ..short
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn otp_request_uses_wire_names() {
        let req = OtpVerifyRequest {
            email: "admin@atmc.io".into(),
            email_otp: "123".into(),
        };
        assert!(req.validate().is_err());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["emailOtp"], "123");
    }

    #[test]
    fn session_from_verify_result() {
        let session: AuthSession = serde_json::from_str(
            r#"{"token":"t0k","email":"admin@atmc.io","type":"ADMIN","userType":"SUPER"}"#,
        )
        .unwrap();
        assert!(session.has_token());
        let entries = session.storage_entries();
        assert_eq!(entries[0], ("token", "t0k".to_string()));
        assert_eq!(entries[2], ("type", "ADMIN".to_string()));
    }
}
