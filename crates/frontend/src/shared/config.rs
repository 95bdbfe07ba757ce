use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
    pub auth: AuthConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Полный адрес admin API с завершающим `/`. Пусто: тот же хост, что и страница.
    pub base_url: String,
    /// Путь API на том же хосте, используется при пустом `base_url`
    pub api_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TableConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub otp_resend_seconds: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationsConfig {
    pub dismiss_after_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
api_path = "/api/v1/"

[table]
default_page_size = 50
page_size_options = [10, 20, 30, 40, 50, 100]

[auth]
otp_resend_seconds = 60

[notifications]
dismiss_after_ms = 4000
"#;

/// Адрес API, заданный при сборке (`ATMC_API_URL=https://api.example.com/ trunk build`)
const BUILD_API_URL: Option<&str> = option_env!("ATMC_API_URL");

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

/// Load configuration
///
/// Order:
/// 1. Embedded default config
/// 2. `ATMC_API_URL` from the build environment overrides `api.base_url`
fn load_config() -> AppConfig {
    let mut config: AppConfig = match toml::from_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("embedded config is invalid: {}", e);
            fallback_config()
        }
    };
    if let Some(url) = BUILD_API_URL.filter(|u| !u.trim().is_empty()) {
        log::info!("API base overridden at build time: {}", url);
        config.api.base_url = url.to_string();
    }
    config
}

fn fallback_config() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: String::new(),
            api_path: "/api/v1/".to_string(),
        },
        table: TableConfig {
            default_page_size: contracts::shared::remote_table::DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 30, 40, 50, 100],
        },
        auth: AuthConfig {
            otp_resend_seconds: contracts::system::auth::otp::OTP_RESEND_SECONDS,
        },
        notifications: NotificationsConfig {
            dismiss_after_ms: 4000,
        },
    }
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Гарантирует завершающий `/`, чтобы к базе можно было дописывать `admin/...`
pub fn normalize_base(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.table.default_page_size, 50);
        assert!(config
            .table
            .page_size_options
            .contains(&config.table.default_page_size));
        assert_eq!(config.auth.otp_resend_seconds, 60);
        assert_eq!(config.notifications.dismiss_after_ms, 4000);
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("https://api.atmc.io"), "https://api.atmc.io/");
        assert_eq!(normalize_base("https://api.atmc.io/v1/"), "https://api.atmc.io/v1/");
    }
}
