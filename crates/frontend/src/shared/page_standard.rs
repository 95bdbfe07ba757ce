//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_withdrawal--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a004_withdrawal/` directory.

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / stat cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System page (login, OTP).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a004_withdrawal--list"));
        assert!(!is_valid_page_id("a004_withdrawal"));
        assert!(!is_valid_page_id("--list"));
    }
}
