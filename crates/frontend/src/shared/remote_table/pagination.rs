use leptos::prelude::*;

use super::{RemoteRow, RemoteTable};
use crate::shared::config::config;
use crate::shared::icons::icon;

/// Переход по страницам и выбор размера страницы.
/// Границы страниц проверяет контроллер, здесь только кнопки.
#[component]
pub fn TablePagination<R>(table: RemoteTable<R>) -> impl IntoView
where
    R: RemoteRow,
{
    let can_back = move || table.with(|c| c.can_go_previous());
    let can_forward = move || table.with(|c| c.can_go_next());
    let page_size = move || table.with(|c| c.query().page_size);
    let sizes = config().table.page_size_options.clone();

    let info = move || {
        table.with(|c| {
            format!(
                "{} / {} ({})",
                c.query().page_index + 1,
                c.total_pages().max(1),
                c.total_rows()
            )
        })
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="First page"
                disabled=move || !can_back()
                on:click=move |_| table.update(|c| c.first_page())
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=move || !can_back()
                on:click=move |_| table.update(|c| c.previous_page())
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{info}</span>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=move || !can_forward()
                on:click=move |_| table.update(|c| c.next_page())
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=move || !can_forward()
                on:click=move |_| table.update(|c| c.last_page())
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || page_size().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        table.update(|c| c.set_page_size(size));
                    }
                }
            >
                {sizes
                    .into_iter()
                    .map(|size| view! {
                        <option value=size.to_string() selected=move || page_size() == size>
                            {size.to_string()}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
