use crate::layout::global_context::AppGlobalContext;
use crate::layout::notification_service::{NotificationHost, NotificationService};
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::SessionStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    let notifications = NotificationService::new();
    provide_context(notifications);
    provide_context(SessionStore::restore(notifications));

    view! {
        <ThemeProvider>
            <AppRoutes />
            <NotificationHost />
        </ThemeProvider>
    }
}
