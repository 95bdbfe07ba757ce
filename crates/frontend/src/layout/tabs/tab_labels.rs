//! Tab labels - единственный источник правды для заголовков табов и их путей.
//!
//! Каждая страница панели открывается как таб с ключом `a0xx_*`/`d4xx_*`,
//! а URL (`/users`, `/withdraw`, ...) однозначно отображается на этот ключ.

use contracts::system::route_guard::HOME_ROUTE;

/// Страница панели: ключ таба, путь, заголовок, иконка сайдбара
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub key: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

pub const DASHBOARD_KEY: &str = "d400_overview";

pub const PAGES: [PageEntry; 10] = [
    PageEntry { key: DASHBOARD_KEY, path: HOME_ROUTE, title: "Dashboard", icon: "dashboard" },
    PageEntry { key: "a001_user", path: "/users", title: "Users", icon: "users" },
    PageEntry { key: "a002_pool_user", path: "/pool-users", title: "Pool Users", icon: "pool" },
    PageEntry { key: "a003_transaction", path: "/transactions", title: "Transactions", icon: "transactions" },
    PageEntry { key: "a004_withdrawal", path: "/withdraw", title: "Withdraw", icon: "withdraw" },
    PageEntry { key: "a005_investment", path: "/investments", title: "Investments", icon: "investments" },
    PageEntry { key: "a006_airdrop", path: "/airdrop", title: "Airdrop", icon: "airdrop" },
    PageEntry { key: "a007_burning", path: "/burning", title: "Burning", icon: "flame" },
    PageEntry { key: "a008_team", path: "/teams", title: "Teams", icon: "team" },
    PageEntry { key: "a009_blog", path: "/blogs", title: "Blogs", icon: "blog" },
];

pub fn page_for_key(key: &str) -> Option<&'static PageEntry> {
    PAGES.iter().find(|p| p.key == key)
}

/// Ключ таба по пути URL. Хвостовой `/` и query игнорируются.
pub fn page_for_path(path: &str) -> Option<&'static PageEntry> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = path.trim_end_matches('/');
    PAGES.iter().find(|p| p.path == path)
}

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    page_for_key(key)
        .map(|p| p.title.to_string())
        .unwrap_or_else(|| key.to_string())
}

pub fn path_for_key(key: &str) -> &'static str {
    page_for_key(key).map(|p| p.path).unwrap_or(HOME_ROUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_paths_are_unique() {
        for (i, a) in PAGES.iter().enumerate() {
            for b in PAGES.iter().skip(i + 1) {
                assert_ne!(a.key, b.key);
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn path_lookup_ignores_query_and_trailing_slash() {
        assert_eq!(page_for_path("/withdraw/").map(|p| p.key), Some("a004_withdrawal"));
        assert_eq!(page_for_path("/users?x=1").map(|p| p.key), Some("a001_user"));
        assert_eq!(page_for_path("/dashboard").map(|p| p.key), Some(DASHBOARD_KEY));
        assert!(page_for_path("/unknown").is_none());
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(tab_label_for_key("zzz"), "zzz");
        assert_eq!(path_for_key("zzz"), HOME_ROUTE);
        assert_eq!(tab_label_for_key("a007_burning"), "Burning");
    }
}
