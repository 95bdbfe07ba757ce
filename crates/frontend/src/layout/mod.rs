pub mod global_context;
pub mod notification_service;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;
use tabs::Tabs;
use top_header::TopHeader;

/// Оболочка закрытой части панели.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |   Tabs + pages   |
/// +------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </div>

                <div class="app-main">
                    <div data-zone="center" class="app-tabs">
                        <Tabs />
                    </div>
                </div>
            </div>
        </div>
    }
}
