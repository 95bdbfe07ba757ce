//! Компонент сортируемой ячейки заголовка таблицы

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::remote_table::SortSpec;
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка с индикатором сортировки (▲▼).
/// Клик проходит цикл ASC → DSC → без сортировки.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ сортировки, который уходит на backend как `sortKey`
    sort_key: &'static str,

    /// Текущая сортировка таблицы
    #[prop(into)]
    sort: Signal<Option<SortSpec>>,

    /// Callback при клике на заголовок
    on_sort: Callback<&'static str>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_key)
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s.as_ref(), sort_key))>
                    {move || sort.with(|s| get_sort_indicator(s.as_ref(), sort_key))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
