//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки

use leptos::prelude::*;
use thaw::*;

/// Чекбокс строки. Клик не всплывает до строки таблицы.
#[component]
pub fn TableCellCheckbox(
    /// Выбрана ли строка
    #[prop(into)]
    checked: Signal<bool>,

    /// Строку нельзя выбрать (например, заявка уже обработана)
    #[prop(optional, into)]
    disabled: Signal<bool>,

    /// Callback при изменении
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableCell>
    }
}
