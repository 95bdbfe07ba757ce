//! Компонент чекбокса в заголовке таблицы для выбора всех строк страницы

use contracts::shared::remote_table::PageCheckState;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Чекбокс заголовка с тремя состояниями: unchecked, checked, indeterminate.
/// Клик выбирает или снимает все строки текущей страницы.
#[component]
pub fn TableHeaderCheckbox(
    /// Состояние выбора на текущей странице
    #[prop(into)]
    state: Signal<PageCheckState>,

    /// Callback при изменении (true = выбрать все, false = снять все)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate выставляется только через DOM
    Effect::new(move |_| {
        let partial = matches!(state.get(), PageCheckState::Partial);
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(partial);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), PageCheckState::All)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
