use contracts::dashboards::d400_overview::dto::OverviewStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::tab_label_for_key;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_session;

fn card_icon(target: &str) -> &'static str {
    match target {
        "a001_user" => "users",
        "a002_pool_user" => "pool",
        _ => "flame",
    }
}

/// Главная страница: число пользователей, ID в пуле и статистика сжигания.
/// Каждый показатель грузится отдельно, ошибка одного не мешает остальным.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let session = use_session();
    let stats = RwSignal::new(OverviewStats::default());

    let load = move || {
        let Some(token) = session.token_untracked() else {
            return;
        };
        log::debug!("loading overview stats");

        let t = token.clone();
        spawn_local(async move {
            match api::get_total_users(Some(&t)).await {
                Ok(total) => {
                    let _ = stats.try_update(|s| s.total_users = Some(total));
                }
                Err(err) => session.report(&err, "Failed to load users"),
            }
        });

        let t = token.clone();
        spawn_local(async move {
            match api::get_total_pool_ids(Some(&t)).await {
                Ok(total) => {
                    let _ = stats.try_update(|s| s.total_pool_ids = Some(total));
                }
                Err(err) => session.report(&err, "Failed to load pool users"),
            }
        });

        spawn_local(async move {
            match api::get_burn_stats(Some(&token)).await {
                Ok(burn) => {
                    let _ = stats.try_update(|s| s.burn = Some(burn));
                }
                Err(err) => session.report(&err, "Failed to Fetch Data"),
            }
        });
    };

    Effect::new(move |_| {
        if session.has_token() {
            load();
        }
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            stats.set(OverviewStats::default());
                            load();
                        }
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards stat-cards--grid">
                    {OverviewStats::default()
                        .cards()
                        .into_iter()
                        .enumerate()
                        .map(|(i, card)| {
                            let target = card.target;
                            view! {
                                <StatCard
                                    label=card.title
                                    icon_name=card_icon(target)
                                    value=Signal::derive(move || stats.with(|s| s.cards()[i].value.clone()))
                                    subtitle=card.hint
                                    on_click=Callback::new(move |_| {
                                        tabs_store.open_tab(target, &tab_label_for_key(target))
                                    })
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
