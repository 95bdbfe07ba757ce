use contracts::domain::a004_withdrawal::aggregate::{
    WithdrawActionRequest, WithdrawalRow, STATUS_FILTER_PARAM, WITHDRAW_STATUSES,
};
use contracts::shared::api::ListShape;
use contracts::shared::format::{format_amount, format_datetime, or_dash};
use contracts::shared::remote_table::ActionVerb;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableCellCopy, TableHeaderCheckbox,
};
use crate::shared::components::ui::badge::{Badge as UiBadge, StatusBadgeView};
use crate::shared::http::{post_json, ListEndpoint};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_table::{
    use_remote_table, CategoryFilter, PageRow, RemoteTable, TableToolbar,
};

const LIST: ListEndpoint = ListEndpoint::new("admin/asste-transaction-withdraw-list", ListShape::Nested)
    .with_category(STATUS_FILTER_PARAM);
const ACTION_PATH: &str = "admin/approveWithdrawReq";

const STATUS_FILTER: CategoryFilter = CategoryFilter {
    all_label: "All statuses",
    options: &WITHDRAW_STATUSES,
};

#[derive(Clone)]
enum WithdrawDialog {
    Row(WithdrawalRow, ActionVerb),
    Bulk(ActionVerb),
}

#[component]
pub fn WithdrawalList() -> impl IntoView {
    let table: RemoteTable<WithdrawalRow> = use_remote_table(LIST);
    let dialog = RwSignal::new(None::<WithdrawDialog>);
    let busy = RwSignal::new(false);
    let bulk_busy = table.bulk_busy();
    let selected_count = table.selected_count();

    let close = Callback::new(move |_: ()| dialog.set(None));

    let run_row_action = move |row: WithdrawalRow, verb: ActionVerb| {
        let token = table.session().token_untracked();
        let body = WithdrawActionRequest::single(&row.id, verb);
        let message = body.success_message();
        table.execute_row_action(
            busy,
            async move { post_json(ACTION_PATH, token.as_deref(), &body).await },
            move |_| message.to_string(),
            "Failed to update withdraw request",
            move |_| {
                let _ = dialog.try_set(None);
            },
        );
    };

    let run_bulk_action = move |verb: ActionVerb| {
        let Some(request) = table.begin_bulk_action(verb) else {
            dialog.set(None);
            return;
        };
        log::info!("bulk {} for {} withdrawals", verb.as_str(), request.ids.len());
        let token = table.session().token_untracked();
        let body = WithdrawActionRequest::bulk(&request);
        let message = body.success_message();
        table.execute_bulk_action(
            async move { post_json(ACTION_PATH, token.as_deref(), &body).await },
            move |_| message.to_string(),
            "Failed to update withdraw requests",
            move |_| {
                let _ = dialog.try_set(None);
            },
        );
    };

    let export =
        move |_: ()| table.export("withdrawals", |n, row: &WithdrawalRow| row.export_record(n));

    let open_bulk = move |verb: ActionVerb| {
        if selected_count.get_untracked() == 0 {
            table.notifications().error("Select at least one row");
            return;
        }
        dialog.set(Some(WithdrawDialog::Bulk(verb)));
    };

    view! {
        <PageFrame page_id="a004_withdrawal--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Withdraw Requests"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || table.total_rows().get().to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <TableToolbar
                    table=table
                    search_placeholder="Username, wallet..."
                    category=STATUS_FILTER
                    on_export=Callback::new(export)
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_bulk(ActionVerb::Approve)
                        disabled=Signal::derive(move || bulk_busy.get() || selected_count.get() == 0)
                    >
                        {icon("check")}
                        {move || format!("Approve ({})", selected_count.get())}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| open_bulk(ActionVerb::Reject)
                        disabled=Signal::derive(move || bulk_busy.get() || selected_count.get() == 0)
                    >
                        {icon("x")}
                        "Reject"
                    </Button>
                </TableToolbar>

                {move || table.error().get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1500px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>
                                    <TableHeaderCheckbox
                                        state=table.page_check_state()
                                        on_change=table.on_toggle_page()
                                    />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=50.0>"No"</TableHeaderCell>
                                <SortableHeaderCell label="User Name" sort_key="userName" sort=table.sort() on_sort=table.on_sort() min_width=130.0 />
                                <TableHeaderCell resizable=false min_width=110.0>"User Id"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Transaction Id"</TableHeaderCell>
                                <SortableHeaderCell label="From" sort_key="formWalletAddress" sort=table.sort() on_sort=table.on_sort() min_width=150.0 />
                                <SortableHeaderCell label="To" sort_key="toWalletAddress" sort=table.sort() on_sort=table.on_sort() min_width=150.0 />
                                <TableHeaderCell resizable=false min_width=100.0>"Amount"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Fee"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Wallet Balance"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Remark"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Date & Time"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Action"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || table.page_rows()
                                key=|r| r.key.clone()
                                children=move |PageRow { number, row, .. }| {
                                    let for_approve = row.clone();
                                    let for_reject = row.clone();
                                    let actionable = row.is_actionable();
                                    let status_badge = row.status_badge();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                checked=table.is_selected(row.id.clone())
                                                disabled=bulk_busy
                                                on_change=table.on_toggle_row(row.id.clone())
                                            />
                                            <TableCell>{number}</TableCell>
                                            <TableCellCopy value=row.user_name.clone() />
                                            <TableCellCopy value=row.user_id.clone() />
                                            <TableCellCopy value=row.transaction_id.clone() shorten=true />
                                            <TableCellCopy value=row.from_wallet_address.clone() shorten=true />
                                            <TableCellCopy value=row.to_wallet_address.clone() shorten=true />
                                            <TableCell class="table__cell--right">{format_amount(row.amount)}</TableCell>
                                            <TableCell class="table__cell--right">{format_amount(row.transaction_fee)}</TableCell>
                                            <TableCell class="table__cell--right">{format_amount(row.wallet_balance)}</TableCell>
                                            <TableCell><StatusBadgeView badge=status_badge /></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{or_dash(&row.remark)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_datetime(&row.created_at)}</TableCell>
                                            <TableCell>
                                                <Show when=move || actionable>
                                                    <div class="table__actions">
                                                        <button
                                                            class="button button--icon"
                                                            title="Approve"
                                                            on:click={
                                                                let row = for_approve.clone();
                                                                move |_| dialog.set(Some(WithdrawDialog::Row(row.clone(), ActionVerb::Approve)))
                                                            }
                                                        >
                                                            {icon("check")}
                                                        </button>
                                                        <button
                                                            class="button button--icon"
                                                            title="Reject"
                                                            on:click={
                                                                let row = for_reject.clone();
                                                                move |_| dialog.set(Some(WithdrawDialog::Row(row.clone(), ActionVerb::Reject)))
                                                            }
                                                        >
                                                            {icon("x")}
                                                        </button>
                                                    </div>
                                                </Show>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || dialog.get().map(|current| match current {
                WithdrawDialog::Row(row, verb) => {
                    let text = format!(
                        "Are you sure you want to {} the withdraw of $ {} for {}?",
                        verb.label().to_lowercase(),
                        format_amount(row.amount),
                        row.user_name,
                    );
                    view! {
                        <ConfirmDialog
                            title=format!("{} Withdraw", verb.label())
                            confirm_label=verb.label()
                            on_confirm=Callback::new(move |_| run_row_action(row.clone(), verb))
                            on_cancel=close
                            busy=busy
                            danger={verb == ActionVerb::Reject}
                        >
                            <p>{text}</p>
                        </ConfirmDialog>
                    }
                    .into_any()
                }
                WithdrawDialog::Bulk(verb) => {
                    // сумма только для подтверждения, на backend уходят id
                    let total = table.with_untracked(|c| c.selected_total(|row| row.amount));
                    let question = match verb {
                        ActionVerb::Approve => "Are you sure you want to approve all transaction for this users?",
                        _ => "Are you sure you want to reject all transaction for this users?",
                    };
                    view! {
                        <ConfirmDialog
                            title=format!("{} Selected", verb.label())
                            confirm_label=verb.label()
                            on_confirm=Callback::new(move |_| run_bulk_action(verb))
                            on_cancel=close
                            busy=bulk_busy
                            danger={verb == ActionVerb::Reject}
                        >
                            <p>{question}</p>
                            <p class="modal__summary">
                                {format!("Selected: {}", selected_count.get_untracked())}
                                <br />
                                {format!("Total Transaction: $ {}", format_amount(total))}
                            </p>
                        </ConfirmDialog>
                    }
                    .into_any()
                }
            })}
        </PageFrame>
    }
}
