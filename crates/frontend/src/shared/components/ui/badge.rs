use contracts::domain::common::StatusBadge;
use leptos::prelude::*;

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || variant_class(variant.get().as_deref().unwrap_or("neutral"));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Бейдж статуса строки (статус заявки, тип транзакции, план)
#[component]
pub fn StatusBadgeView(badge: StatusBadge) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {}", variant_class(badge.variant))>
            {badge.label}
        </span>
    }
}
