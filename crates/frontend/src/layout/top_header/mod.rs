//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the theme selector,
//! the signed-in admin and the logout button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelect;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    // RouteGuard уведет на /login, как только токен исчезнет
    let logout = move |_| session.sign_out();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"ATMC Admin"</span>
            </div>

            <div class="top-header__actions">
                <ThemeSelect />

                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || session.pending_email().unwrap_or_else(|| "Admin".to_string())}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
