mod plan_dialog;

use self::plan_dialog::PlanPurchaseDialog;
use contracts::domain::a001_user::aggregate::{
    BlockUserRequest, BlockWalletRequest, Plan, UserRow,
};
use contracts::shared::api::ListShape;
use contracts::shared::format::{format_amount, format_datetime};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::table::{SortableHeaderCell, TableCellCopy};
use crate::shared::components::ui::badge::{Badge as UiBadge, StatusBadgeView};
use crate::shared::http::{decode_result, post_json, put_json, success_message, ListEndpoint};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_table::{use_remote_table, PageRow, RemoteTable, TableToolbar};

const LIST: ListEndpoint = ListEndpoint::new("admin/listUser", ListShape::Flat);
const BLOCK_USER_PATH: &str = "admin/blockUnblockUser";
const BLOCK_WALLET_PATH: &str = "admin/block-unblock-withdraw";
const PLANS_PATH: &str = "buy/getTradingBotDetails";

#[derive(Clone)]
enum UserDialog {
    BlockUser(UserRow),
    BlockWallet(UserRow),
    BuyPlan(UserRow),
}

#[component]
pub fn UserList() -> impl IntoView {
    let table: RemoteTable<UserRow> = use_remote_table(LIST);
    let dialog = RwSignal::new(None::<UserDialog>);
    let busy = RwSignal::new(false);
    let plans = RwSignal::new(Vec::<Plan>::new());
    let plans_requested = StoredValue::new(false);

    let close = Callback::new(move |_: ()| dialog.set(None));

    // Планы загружаются один раз, при первом открытии диалога покупки
    let load_plans = move || {
        if plans_requested.get_value() {
            return;
        }
        plans_requested.set_value(true);
        let token = table.session().token_untracked();
        spawn_local(async move {
            let result = post_json(PLANS_PATH, token.as_deref(), &serde_json::json!({}))
                .await
                .and_then(decode_result::<Vec<Plan>>);
            match result {
                Ok(list) => {
                    log::debug!("loaded {} plans", list.len());
                    let _ = plans.try_set(list);
                }
                Err(err) => {
                    plans_requested.try_update_value(|r| *r = false);
                    table.report(&err, "Failed to load plans");
                }
            }
        });
    };

    let toggle_user = move |user: UserRow| {
        let token = table.session().token_untracked();
        let body = BlockUserRequest::new(&user.id);
        table.execute_row_action(
            busy,
            async move { put_json(BLOCK_USER_PATH, token.as_deref(), &body).await },
            |body| success_message(body, "User is Block/Unblock Successfully!"),
            "Failed to update user status",
            move |_| {
                let _ = dialog.try_set(None);
            },
        );
    };

    let toggle_wallet = move |user: UserRow| {
        let token = table.session().token_untracked();
        let body = BlockWalletRequest::toggle_for(&user);
        let message = body.success_message();
        table.execute_row_action(
            busy,
            async move { post_json(BLOCK_WALLET_PATH, token.as_deref(), &body).await },
            move |_| message.to_string(),
            "Failed to update wallet",
            move |_| {
                let _ = dialog.try_set(None);
            },
        );
    };

    let export = move |_: ()| table.export("users", |n, row: &UserRow| row.export_record(n));

    view! {
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || table.total_rows().get().to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <TableToolbar
                    table=table
                    search_placeholder="Username, sponsor ID, wallet..."
                    on_export=Callback::new(export)
                />

                {move || table.error().get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1400px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=50.0>"No"</TableHeaderCell>
                                <SortableHeaderCell label="Username" sort_key="nickName" sort=table.sort() on_sort=table.on_sort() min_width=140.0 />
                                <SortableHeaderCell label="Sponsor ID" sort_key="invitationCode" sort=table.sort() on_sort=table.on_sort() min_width=120.0 />
                                <SortableHeaderCell label="Wallet Address" sort_key="walletAddress" sort=table.sort() on_sort=table.on_sort() min_width=160.0 />
                                <TableHeaderCell resizable=false min_width=100.0>"Plan Amount"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Fund Wallet"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Income Wallet"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Pool Wallet"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Airdrop Wallet"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Registration Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Activation Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Action"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || table.page_rows()
                                key=|r| r.key.clone()
                                children=move |PageRow { number, row, .. }| {
                                    let for_block = row.clone();
                                    let for_wallet = row.clone();
                                    let for_plan = row.clone();
                                    let status_badge = row.status_badge();
                                    let is_active = row.is_active();
                                    let wallet_blocked = row.wallet_blocked();
                                    view! {
                                        <TableRow>
                                            <TableCell>{number}</TableCell>
                                            <TableCellCopy value=row.nick_name.clone() />
                                            <TableCellCopy value=row.invitation_code.clone() />
                                            <TableCellCopy value=row.wallet_address.clone() shorten=true />
                                            <TableCell class="table__cell--right">{format_amount(row.plan_price)}</TableCell>
                                            <TableCell class="table__cell--right">{format_amount(row.fund_wallet)}</TableCell>
                                            <TableCell class="table__cell--right">{format_amount(row.income_balance)}</TableCell>
                                            <TableCell class="table__cell--right">{format_amount(row.pool_wallet)}</TableCell>
                                            <TableCell class="table__cell--right">{format_amount(row.air_drop_coin)}</TableCell>
                                            <TableCell>{format_datetime(&row.created_at)}</TableCell>
                                            <TableCell>{format_datetime(&row.activation_date)}</TableCell>
                                            <TableCell><StatusBadgeView badge=status_badge /></TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="button button--icon"
                                                        title={if is_active { "Block user" } else { "Unblock user" }}
                                                        on:click=move |_| dialog.set(Some(UserDialog::BlockUser(for_block.clone())))
                                                    >
                                                        {icon(if is_active { "lock" } else { "unlock" })}
                                                    </button>
                                                    <button
                                                        class="button button--icon"
                                                        title={if wallet_blocked { "Unblock wallet" } else { "Block wallet" }}
                                                        on:click=move |_| dialog.set(Some(UserDialog::BlockWallet(for_wallet.clone())))
                                                    >
                                                        {icon("withdraw")}
                                                    </button>
                                                    <button
                                                        class="button button--icon"
                                                        title="Buy plan"
                                                        on:click=move |_| {
                                                            load_plans();
                                                            dialog.set(Some(UserDialog::BuyPlan(for_plan.clone())));
                                                        }
                                                    >
                                                        {icon("cart")}
                                                    </button>
                                                </div>
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
                UserDialog::BlockUser(user) => {
                    let verb = if user.is_active() { "Block" } else { "Unblock" };
                    let name = user.nick_name.clone();
                    view! {
                        <ConfirmDialog
                            title=format!("{} User", verb)
                            confirm_label=verb
                            on_confirm=Callback::new(move |_| toggle_user(user.clone()))
                            on_cancel=close
                            busy=busy
                            danger=true
                        >
                            <p>{format!("Are you sure you want to {} {}?", verb.to_lowercase(), name)}</p>
                        </ConfirmDialog>
                    }
                    .into_any()
                }
                UserDialog::BlockWallet(user) => {
                    let verb = if user.wallet_blocked() { "Unblock" } else { "Block" };
                    let name = user.nick_name.clone();
                    view! {
                        <ConfirmDialog
                            title=format!("{} Wallet", verb)
                            confirm_label=verb
                            on_confirm=Callback::new(move |_| toggle_wallet(user.clone()))
                            on_cancel=close
                            busy=busy
                            danger=true
                        >
                            <p>{format!("Are you sure you want to {} withdrawals for {}?", verb.to_lowercase(), name)}</p>
                        </ConfirmDialog>
                    }
                    .into_any()
                }
                UserDialog::BuyPlan(user) => view! {
                    <PlanPurchaseDialog user=user table=table plans=plans on_close=close />
                }
                .into_any(),
            })}
        </PageFrame>
    }
}
