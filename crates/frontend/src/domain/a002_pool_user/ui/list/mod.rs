use contracts::domain::a002_pool_user::aggregate::PoolUserRow;
use contracts::shared::api::ListShape;
use contracts::shared::format::format_datetime;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::{SortableHeaderCell, TableCellCopy};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::http::ListEndpoint;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_table::{use_remote_table, PageRow, RemoteTable, TableToolbar};

const LIST: ListEndpoint = ListEndpoint::new("admin/listPoolUser", ListShape::Flat);

#[component]
pub fn PoolUserList() -> impl IntoView {
    let table: RemoteTable<PoolUserRow> = use_remote_table(LIST);

    let export = move |_: ()| table.export("pool-users", |n, row: &PoolUserRow| row.export_record(n));

    view! {
        <PageFrame page_id="a002_pool_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pool Users"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || table.total_rows().get().to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <TableToolbar
                    table=table
                    search_placeholder="Username, sponsor, referral code..."
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
                                <SortableHeaderCell label="Username" sort_key="userName" sort=table.sort() on_sort=table.on_sort() min_width=140.0 />
                                <SortableHeaderCell label="Sponsor ID" sort_key="sponsorName" sort=table.sort() on_sort=table.on_sort() min_width=140.0 />
                                <SortableHeaderCell label="Referral ID" sort_key="refCode" sort=table.sort() on_sort=table.on_sort() min_width=120.0 />
                                <SortableHeaderCell label="Invitation ID" sort_key="invCode" sort=table.sort() on_sort=table.on_sort() min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=80.0>"Children"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Registration Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || table.page_rows()
                                key=|r| r.key.clone()
                                children=move |PageRow { number, row, .. }| {
                                    let status_variant = if row.status { "success" } else { "neutral" };
                                    let status_label = row.status_label();
                                    view! {
                                        <TableRow>
                                            <TableCell>{number}</TableCell>
                                            <TableCellCopy value=row.user_name.clone() />
                                            <TableCellCopy value=row.sponsor_name.clone() />
                                            <TableCellCopy value=row.ref_code.clone() />
                                            <TableCellCopy value=row.inv_code.clone() />
                                            <TableCell class="table__cell--right">{row.child}</TableCell>
                                            <TableCell>{format_datetime(&row.created_at)}</TableCell>
                                            <TableCell>
                                                <UiBadge variant=status_variant.to_string()>{status_label}</UiBadge>
                                            </TableCell>
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
