//! TabPage component - wrapper для отображения контента таба

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Компонент-обёртка для отдельного таба.
///
/// Контент создается один раз при открытии таба и скрывается CSS-классом,
/// когда таб неактивен, так что состояние таблицы сохраняется между переключениями.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        tabs_store
            .active
            .with(|active| active.as_deref() == Some(tab_key_for_active_check.as_str()))
    };

    log::debug!("tab page created: {}", tab_key);
    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log::debug!("tab page destroyed: {}", tab_key_for_cleanup);
    });

    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
