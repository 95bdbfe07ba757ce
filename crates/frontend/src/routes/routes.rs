use contracts::system::route_guard::{decide, RouteDecision};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{path, NavigateOptions};

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use crate::system::pages::otp::OtpPage;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    // Табы не переживают выход из сессии
    on_cleanup(move || tabs_store.reset());

    view! { <Shell /> }
}

/// Перенаправляет между публичными и закрытыми страницами при каждом
/// изменении пути или токена
#[component]
fn RouteGuard() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let path = location.pathname.get();
        let has_token = session.has_token();
        if let RouteDecision::Redirect(to) = decide(&path, has_token) {
            log::debug!("route guard: {} -> {}", path, to);
            navigate(
                to,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <RouteGuard />
            <Routes fallback=|| view! { <div class="placeholder">"Page not found"</div> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/otp") view=OtpPage />
                <Route path=path!("/*any") view=MainLayout />
            </Routes>
        </Router>
    }
}
