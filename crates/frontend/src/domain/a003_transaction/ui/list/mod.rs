use contracts::domain::a003_transaction::aggregate::{
    TransactionRow, TRANSACTION_TYPES, TYPE_FILTER_PARAM,
};
use contracts::shared::api::ListShape;
use contracts::shared::format::{format_amount, format_datetime, or_dash};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::{SortableHeaderCell, TableCellCopy};
use crate::shared::components::ui::badge::{Badge as UiBadge, StatusBadgeView};
use crate::shared::http::ListEndpoint;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_table::{
    use_remote_table, CategoryFilter, PageRow, RemoteTable, TableToolbar,
};

const LIST: ListEndpoint =
    ListEndpoint::new("admin/assetsTransactionList", ListShape::Nested).with_category(TYPE_FILTER_PARAM);

const TYPE_FILTER: CategoryFilter = CategoryFilter {
    all_label: "All types",
    options: &TRANSACTION_TYPES,
};

#[component]
pub fn TransactionList() -> impl IntoView {
    let table: RemoteTable<TransactionRow> = use_remote_table(LIST);

    let export =
        move |_: ()| table.export("transactions", |n, row: &TransactionRow| row.export_record(n));

    view! {
        <PageFrame page_id="a003_transaction--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Transaction History"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || table.total_rows().get().to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <TableToolbar
                    table=table
                    search_placeholder="Sender, receiver, wallet..."
                    category=TYPE_FILTER
                    on_export=Callback::new(export)
                />

                {move || table.error().get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1300px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=50.0>"No"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Type"</TableHeaderCell>
                                <SortableHeaderCell label="Sender" sort_key="senderNickName" sort=table.sort() on_sort=table.on_sort() min_width=130.0 />
                                <SortableHeaderCell label="Receiver" sort_key="receiverNickName" sort=table.sort() on_sort=table.on_sort() min_width=130.0 />
                                <SortableHeaderCell label="From Wallet" sort_key="formWalletAddress" sort=table.sort() on_sort=table.on_sort() min_width=150.0 />
                                <SortableHeaderCell label="To Wallet" sort_key="toWalletAddress" sort=table.sort() on_sort=table.on_sort() min_width=150.0 />
                                <TableHeaderCell resizable=false min_width=100.0>"Amount"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Remark"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Date & Time"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || table.page_rows()
                                key=|r| r.key.clone()
                                children=move |PageRow { number, row, .. }| {
                                    let type_badge = row.type_badge();
                                    view! {
                                        <TableRow>
                                            <TableCell>{number}</TableCell>
                                            <TableCell><StatusBadgeView badge=type_badge /></TableCell>
                                            <TableCellCopy value=row.sender_nick_name.clone() />
                                            <TableCellCopy value=row.receiver_nick_name.clone() />
                                            <TableCellCopy value=row.from_wallet_address.clone() shorten=true />
                                            <TableCellCopy value=row.to_wallet_address.clone() shorten=true />
                                            <TableCell class="table__cell--right">{format_amount(row.amount)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{or_dash(&row.remark)}</TableCellLayout>
                                            </TableCell>
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
