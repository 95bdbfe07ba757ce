//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing admin API URLs.

use super::config::{config, normalize_base};

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the config when it is set. Otherwise the base is
/// derived from the current window location plus `api.api_path`.
///
/// # Returns
/// - Base URL ending with `/`, like "https://admin.atmc.io/api/v1/"
/// - `api_path` alone if window is not available
pub fn api_base() -> String {
    let cfg = config();
    if !cfg.api.base_url.trim().is_empty() {
        return normalize_base(&cfg.api.base_url);
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return normalize_base(&cfg.api.api_path),
    };
    let location = window.location();
    let origin = location.origin().unwrap_or_default();
    let path = cfg.api.api_path.trim_start_matches('/');
    normalize_base(&format!("{}/{}", origin.trim_end_matches('/'), path))
}

/// Build a full API URL from an endpoint path like `admin/listUser`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path.trim_start_matches('/'))
}
