//! Полоса табов над рабочей областью и контент открытых табов

use super::tab_labels::DASHBOARD_KEY;
use super::TabPage;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::ev;
use leptos::prelude::*;

/// Заголовок таба. Dashboard закрыть нельзя: он же открывается,
/// когда закрыт последний таб.
#[component]
fn TabButton(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        key.with_value(|k| tabs_store.active.with(|a| a.as_deref() == Some(k.as_str())))
    });
    let closable = tab.key != DASHBOARD_KEY;

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| tabs_store.activate_tab(&key.get_value())
        >
            <span>{tab.title}</span>
            <Show when=move || closable>
                <button class="tab-close" title="Close" on:click=on_close>"×"</button>
            </Show>
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabButton tab=tab tabs_store=tabs_store /> }
                />
            </div>
            // контент таба живет, пока таб открыт
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}
