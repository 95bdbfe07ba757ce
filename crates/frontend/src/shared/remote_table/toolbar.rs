use contracts::domain::common::StatusBadge;
use leptos::prelude::*;
use thaw::*;

use super::pagination::TablePagination;
use super::{RemoteRow, RemoteTable};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;

/// Категориальный фильтр таблицы: значения и подписи берутся из таблицы бейджей
#[derive(Clone, Copy)]
pub struct CategoryFilter {
    /// Подпись пустого значения ("All types")
    pub all_label: &'static str,
    pub options: &'static [(&'static str, StatusBadge)],
}

/// Панель над таблицей: поиск, фильтр, пагинация, Refresh и Export.
/// `children` добавляются справа перед кнопками (массовые действия).
#[component]
pub fn TableToolbar<R>(
    table: RemoteTable<R>,
    #[prop(optional, into)] search_placeholder: String,
    #[prop(optional)] category: Option<CategoryFilter>,
    on_export: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView
where
    R: RemoteRow,
{
    let search_value =
        Signal::derive(move || table.with(|c| c.query().text_filter.clone().unwrap_or_default()));
    let loading = table.is_loading();
    let exporting = table.is_exporting();

    let category_view = category.map(|filter| {
        let current = move || {
            table.with(|c| c.query().category_filter.clone().unwrap_or_default())
        };
        view! {
            <select
                class="filter-select"
                prop:value=current
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    table.update(|c| c.set_category_filter(Some(value.as_str())));
                }
            >
                <option value="">{filter.all_label}</option>
                {filter
                    .options
                    .iter()
                    .map(|(value, badge)| {
                        let value = *value;
                        view! {
                            <option value=value selected=move || current() == value>
                                {badge.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
    });

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    <SearchInput
                        value=search_value
                        on_change=Callback::new(move |value: String| {
                            table.update(|c| c.set_text_filter(&value))
                        })
                        placeholder=search_placeholder
                    />
                    {category_view}
                </div>

                <div class="filter-panel-header__center">
                    <TablePagination table=table />
                </div>

                <div class="filter-panel-header__right">
                    {children.map(|children| children())}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_export.run(())
                        disabled=Signal::derive(move || exporting.get() || loading.get())
                    >
                        {icon("download")}
                        {move || if exporting.get() { "Exporting..." } else { "Export" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| table.refresh()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
