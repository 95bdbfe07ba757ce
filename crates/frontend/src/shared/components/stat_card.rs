use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка показателя. Значение уже отформатировано, `-` пока данных нет.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<String>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Option<String>,
    /// Visual accent: "", "success", "warning", "error"
    #[prop(optional)]
    accent: &'static str,
    /// Клик по карточке (переход на страницу)
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = match accent {
        "" => "stat-card".to_string(),
        accent => format!("stat-card stat-card--{}", accent),
    };
    let class = if on_click.is_some() {
        format!("{} stat-card--clickable", class)
    } else {
        class
    };

    view! {
        <div
            class=class
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
