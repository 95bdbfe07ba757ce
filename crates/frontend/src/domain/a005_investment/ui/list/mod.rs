use contracts::domain::a005_investment::aggregate::{total_amount, InvestmentRow};
use contracts::shared::api::ListShape;
use contracts::shared::format::{format_amount, format_datetime};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{SortableHeaderCell, TableCellCopy};
use crate::shared::components::ui::badge::{Badge as UiBadge, StatusBadgeView};
use crate::shared::http::ListEndpoint;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_table::{use_remote_table, PageRow, RemoteTable, TableToolbar};

const LIST: ListEndpoint =
    ListEndpoint::new("admin/viewUserSubscriptionDetails", ListShape::Nested);

#[component]
pub fn InvestmentList() -> impl IntoView {
    let table: RemoteTable<InvestmentRow> = use_remote_table(LIST);
    let block = table.block();
    let total = Signal::derive(move || format!("$ {}", format_amount(block.with(total_amount))));

    let export =
        move |_: ()| table.export("investments", |n, row: &InvestmentRow| row.export_record(n));

    view! {
        <PageFrame page_id="a005_investment--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Investments"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || table.total_rows().get().to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard
                        label="Total Investment"
                        icon_name="investments"
                        value=total
                        subtitle="All subscriptions for the current filter"
                        accent="success"
                    />
                </div>

                <TableToolbar
                    table=table
                    search_placeholder="Username..."
                    on_export=Callback::new(export)
                />

                {move || table.error().get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=50.0>"No"</TableHeaderCell>
                                <SortableHeaderCell label="Username" sort_key="userName" sort=table.sort() on_sort=table.on_sort() min_width=150.0 />
                                <TableHeaderCell resizable=false min_width=130.0>"Plan"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Plan Amount"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Income Amount"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Main Balance"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Date"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || table.page_rows()
                                key=|r| r.key.clone()
                                children=move |PageRow { number, row, .. }| {
                                    let plan_badge = row.plan_badge();
                                    view! {
                                        <TableRow>
                                            <TableCell>{number}</TableCell>
                                            <TableCellCopy value=row.user_name.clone() />
                                            <TableCell><StatusBadgeView badge=plan_badge /></TableCell>
                                            <TableCell class="table__cell--right">{format_amount(row.plan_price)}</TableCell>
                                            <TableCell class="table__cell--right">{format_amount(row.income)}</TableCell>
                                            <TableCell class="table__cell--right">{format_amount(row.main_balance)}</TableCell>
                                            <TableCell>{format_datetime(&row.created_at)}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
