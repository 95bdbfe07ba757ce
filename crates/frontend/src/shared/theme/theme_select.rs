use leptos::prelude::*;

use super::{use_theme, Theme};

/// ThemeSelect component for switching themes
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();
    let is_open = RwSignal::new(false);

    let toggle_dropdown = move |_| {
        is_open.update(|v| *v = !*v);
    };

    view! {
        <div class="theme-select-wrapper">
            <button
                class="button button--ghost button--small"
                on:click=toggle_dropdown
            >
                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
                </svg>
                "Theme"
            </button>

            <Show when=move || is_open.get()>
                <div class="theme-dropdown">
                    {Theme::all()
                        .into_iter()
                        .map(|theme| {
                            view! {
                                <button
                                    class="theme-dropdown__item"
                                    class:theme-dropdown__item--active=move || ctx.theme.get() == theme
                                    on:click=move |_| {
                                        ctx.set_theme(theme);
                                        is_open.set(false);
                                    }
                                >
                                    {theme.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
