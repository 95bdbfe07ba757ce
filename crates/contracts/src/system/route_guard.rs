//! Какие пути доступны без сессии и куда перенаправлять

pub const LOGIN_ROUTE: &str = "/login";
pub const OTP_ROUTE: &str = "/otp";
pub const HOME_ROUTE: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

pub fn is_public(path: &str) -> bool {
    let path = normalize(path);
    path == LOGIN_ROUTE || path == OTP_ROUTE
}

/// Публичные страницы с токеном уводят на dashboard, закрытые без токена на login
pub fn decide(path: &str, has_token: bool) -> RouteDecision {
    match (is_public(path), has_token) {
        (true, true) => RouteDecision::Redirect(HOME_ROUTE),
        (false, false) => RouteDecision::Redirect(LOGIN_ROUTE),
        _ if normalize(path) == "/" => RouteDecision::Redirect(HOME_ROUTE),
        _ => RouteDecision::Allow,
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_table() {
        assert_eq!(decide("/login", true), RouteDecision::Redirect(HOME_ROUTE));
        assert_eq!(decide("/otp", true), RouteDecision::Redirect(HOME_ROUTE));
        assert_eq!(decide("/login", false), RouteDecision::Allow);
        assert_eq!(decide("/otp/", false), RouteDecision::Allow);
        assert_eq!(decide("/users", false), RouteDecision::Redirect(LOGIN_ROUTE));
        assert_eq!(decide("/users?active=x", true), RouteDecision::Allow);
        assert_eq!(decide("/", true), RouteDecision::Redirect(HOME_ROUTE));
        assert_eq!(decide("/", false), RouteDecision::Redirect(LOGIN_ROUTE));
    }
}
