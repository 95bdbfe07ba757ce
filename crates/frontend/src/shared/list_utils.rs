/// Утилиты для списков: поиск с задержкой и индикаторы сортировки
use contracts::shared::remote_table::{SortDirection, SortSpec};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Задержка перед отправкой поискового запроса
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (сбрасывается вместе с таблицей)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    // Номер последнего ввода: отложенный вызов срабатывает, только если новее не было
    let generation = StoredValue::new(0u64);

    // Фильтр сброшен снаружи (Refresh, действие над строкой)
    Effect::new(move |_| {
        let external = value.get();
        if external.is_empty() && !input_value.get_untracked().is_empty() {
            generation.update_value(|g| *g += 1);
            input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if value.with(|v| !v.trim().is_empty()) {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.with(String::is_empty)>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.key == field => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn get_sort_class(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.key == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_indicator_follows_direction() {
        let spec = SortSpec {
            key: "amount".into(),
            direction: SortDirection::Desc,
        };
        assert_eq!(get_sort_indicator(Some(&spec), "amount"), " ▼");
        assert_eq!(get_sort_indicator(Some(&spec), "createdAt"), " ⇅");
        assert_eq!(get_sort_indicator(None, "amount"), " ⇅");
        assert!(get_sort_class(Some(&spec), "amount").ends_with("--active"));
    }
}
