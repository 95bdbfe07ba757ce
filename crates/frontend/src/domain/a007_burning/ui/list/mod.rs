use contracts::domain::a007_burning::aggregate::{BurnCoinsRequest, BurnRow, BurnStats, BurnTab};
use contracts::shared::api::ListShape;
use contracts::shared::format::{format_amount, format_atmc, format_date};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{SortableHeaderCell, TableCellCopy};
use crate::shared::http::{decode_result, get_json, post_json, ListEndpoint};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_table::{use_remote_table, PageRow, RemoteTable, TableToolbar};

const LIST_PATH: &str = "admin/available-to-burn";
const STATS_PATH: &str = "admin/burning-stats";
const BURN_PATH: &str = "admin/burn-coins";

fn endpoint(tab: BurnTab) -> ListEndpoint {
    ListEndpoint::new(LIST_PATH, ListShape::Flat).with_fixed(tab.fixed_params())
}

/// Сжигание монет: статистика и две вкладки (доступно к сжиганию и сожжено),
/// у каждой вкладки своя таблица и свой запрос.
#[component]
pub fn BurningPage() -> impl IntoView {
    let available: RemoteTable<BurnRow> = use_remote_table(endpoint(BurnTab::Available));
    let burned: RemoteTable<BurnRow> = use_remote_table(endpoint(BurnTab::Burned));
    let tab = RwSignal::new(BurnTab::Available);
    let stats = RwSignal::new(None::<BurnStats>);
    let pending = RwSignal::new(None::<BurnRow>);
    let busy = RwSignal::new(false);
    let session = available.session();

    let load_stats = move || {
        let Some(token) = session.token_untracked() else {
            return;
        };
        spawn_local(async move {
            let result = get_json(STATS_PATH, Some(&token))
                .await
                .and_then(decode_result::<Value>);
            match result {
                Ok(result) => {
                    let _ = stats.try_set(Some(BurnStats::from_result(&result)));
                }
                Err(err) => session.report(&err, "Failed to Fetch Data"),
            }
        });
    };

    // статистика перечитывается при появлении токена
    Effect::new(move |_| {
        if session.has_token() {
            load_stats();
        }
    });

    let burn = move |row: BurnRow| {
        let token = session.token_untracked();
        let body = BurnCoinsRequest { plan_id: row.plan_id.clone() };
        log::info!("burn requested for plan {}", row.plan_id);
        available.execute_row_action(
            busy,
            async move { post_json(BURN_PATH, token.as_deref(), &body).await },
            |_| "Burn successful!".to_string(),
            "Failed to burn coins",
            move |success| {
                let _ = pending.try_set(None);
                if success {
                    burned.refresh();
                    load_stats();
                }
            },
        );
    };

    let stat_value = move |read: fn(&BurnStats) -> f64| {
        Signal::derive(move || match stats.get() {
            Some(s) => format_atmc(read(&s)),
            None => "-".to_string(),
        })
    };

    let tab_button = move |value: BurnTab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == value { "tabs__item tabs__item--active" } else { "tabs__item" }
                on:click=move |_| tab.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <PageFrame page_id="a007_burning--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Burning Coins"</h1>
                    <span class="page__subtitle">
                        "Manage coin burning operations and track burned tokens"
                    </span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard
                        label="Total Burned (Lifetime)"
                        icon_name="flame"
                        value=stat_value(|s| s.total_burned)
                        accent="error"
                    />
                    <StatCard
                        label="Today Burned"
                        icon_name="flame"
                        value=stat_value(|s| s.today_burned)
                        accent="warning"
                    />
                </div>

                <div class="tabs">
                    {tab_button(BurnTab::Available, "Available to Burn")}
                    {tab_button(BurnTab::Burned, "Burned Amount")}
                </div>

                <Show
                    when=move || tab.get() == BurnTab::Available
                    fallback=move || view! { <BurnTable table=burned tab=BurnTab::Burned /> }
                >
                    <BurnTable
                        table=available
                        tab=BurnTab::Available
                        on_burn=Callback::new(move |row: BurnRow| pending.set(Some(row)))
                    />
                </Show>
            </div>

            {move || pending.get().map(|row| {
                let text = format!(
                    "Burn {} of {} (plan {})?",
                    format_atmc(row.available_to_burn),
                    row.username,
                    row.plan_id,
                );
                view! {
                    <ConfirmDialog
                        title="Burn Coins"
                        confirm_label="Burn"
                        on_confirm=Callback::new(move |_| burn(row.clone()))
                        on_cancel=Callback::new(move |_| pending.set(None))
                        busy=busy
                        danger=true
                    >
                        <p>{text}</p>
                    </ConfirmDialog>
                }
            })}
        </PageFrame>
    }
}

#[component]
fn BurnTable(
    table: RemoteTable<BurnRow>,
    tab: BurnTab,
    /// Кнопка "Burn" есть только на вкладке доступных монет
    #[prop(optional)]
    on_burn: Option<Callback<BurnRow>>,
) -> impl IntoView {
    let stem = match tab {
        BurnTab::Available => "available-to-burn",
        BurnTab::Burned => "burned-coins",
    };
    let export = move |_: ()| table.export(stem, move |n, row: &BurnRow| row.export_record(n, tab));

    view! {
        <TableToolbar
            table=table
            search_placeholder="Username, wallet..."
            on_export=Callback::new(export)
        />

        {move || table.error().get().map(|err| view! {
            <div class="alert alert--error">{err}</div>
        })}

        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 1000px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=50.0>"No"</TableHeaderCell>
                        <SortableHeaderCell label="Username" sort_key="username" sort=table.sort() on_sort=table.on_sort() min_width=140.0 />
                        <TableHeaderCell resizable=false min_width=120.0>"Plan ID"</TableHeaderCell>
                        <SortableHeaderCell label="Wallet Address" sort_key="address" sort=table.sort() on_sort=table.on_sort() min_width=160.0 />
                        <TableHeaderCell resizable=false min_width=120.0>{tab.amount_header()}</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=110.0>"Plan Amount"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Expiry Date"</TableHeaderCell>
                        {on_burn.map(|_| view! {
                            <TableHeaderCell resizable=false min_width=90.0>"Action"</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>

                <TableBody>
                    <For
                        each=move || table.page_rows()
                        key=|r| r.key.clone()
                        children=move |PageRow { number, row, .. }| {
                            let action = on_burn.map(|cb| {
                                let target = row.clone();
                                let empty = row.available_to_burn <= 0.0;
                                view! {
                                    <TableCell>
                                        <button
                                            class="button button--small button--danger"
                                            disabled=empty
                                            on:click=move |_| cb.run(target.clone())
                                        >
                                            {icon("flame")}
                                            " Burn"
                                        </button>
                                    </TableCell>
                                }
                            });
                            view! {
                                <TableRow>
                                    <TableCell>{number}</TableCell>
                                    <TableCellCopy value=row.username.clone() />
                                    <TableCellCopy value=row.plan_id.clone() />
                                    <TableCellCopy value=row.address.clone() shorten=true />
                                    <TableCell class="table__cell--right">{format_amount(row.available_to_burn)}</TableCell>
                                    <TableCell class="table__cell--right">{format_amount(row.plan_amount)}</TableCell>
                                    <TableCell>{format_date(&row.expired_on)}</TableCell>
                                    {action}
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
