//! Ячейка со значением и кнопкой копирования (ник, адрес кошелька)

use contracts::shared::format::shorten_address;
use leptos::prelude::*;
use thaw::*;

use crate::layout::notification_service::use_notifications;
use crate::shared::clipboard::copy_with_notice;
use crate::shared::icons::icon;

#[component]
pub fn TableCellCopy(
    #[prop(into)] value: String,
    /// Показывать адрес сокращенно (`first6...last4`), копируется полный
    #[prop(optional)]
    shorten: bool,
) -> impl IntoView {
    let notifications = use_notifications();
    if value.trim().is_empty() {
        return view! { <TableCell>"-"</TableCell> }.into_any();
    }

    let display = if shorten {
        shorten_address(&value)
    } else {
        value.clone()
    };
    let title = value.clone();

    view! {
        <TableCell>
            <TableCellLayout truncate=true>
                <span class="table__copy">
                    <span title=title>{display}</span>
                    <button
                        class="table__copy-btn"
                        title="Copy"
                        on:click=move |e| {
                            e.stop_propagation();
                            copy_with_notice(&value, notifications);
                        }
                    >
                        {icon("copy")}
                    </button>
                </span>
            </TableCellLayout>
        </TableCell>
    }
    .into_any()
}
