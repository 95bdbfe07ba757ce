use contracts::domain::a006_airdrop::aggregate::{
    AirdropRewardRequest, AirdropRow, REWARD_FILTER_PARAM, REWARD_STATUSES,
};
use contracts::shared::api::ListShape;
use contracts::shared::format::{format_datetime, or_dash};
use contracts::shared::remote_table::{can_confirm, ActionVerb, RowActionRequest};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::{SortableHeaderCell, TableCellCopy};
use crate::shared::components::ui::badge::{Badge as UiBadge, StatusBadgeView};
use crate::shared::http::{post_json, success_message, ListEndpoint};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_table::{
    use_remote_table, CategoryFilter, PageRow, RemoteTable, TableToolbar,
};

const LIST: ListEndpoint = ListEndpoint::new("airdrop/admin-get-airdrop-users", ListShape::Nested)
    .with_category(REWARD_FILTER_PARAM);
const REWARD_PATH: &str = "airdrop/admin-update-reward";

const REWARD_FILTER: CategoryFilter = CategoryFilter {
    all_label: "All rewards",
    options: &REWARD_STATUSES,
};

#[component]
pub fn AirdropList() -> impl IntoView {
    let table: RemoteTable<AirdropRow> = use_remote_table(LIST);
    let dialog = RwSignal::new(None::<(AirdropRow, ActionVerb)>);
    let remark = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let open = move |row: AirdropRow, verb: ActionVerb| {
        remark.set(String::new());
        dialog.set(Some((row, verb)));
    };
    let close = Callback::new(move |_: ()| dialog.set(None));

    let submit = move |row: AirdropRow, verb: ActionVerb| {
        let action = match RowActionRequest::new(&row.id, verb)
            .with_remark(&remark.get_untracked())
            .validate()
        {
            Ok(action) => action,
            Err(err) => {
                table.notifications().error(err.message);
                return;
            }
        };
        let body = AirdropRewardRequest::from(&action);
        let token = table.session().token_untracked();
        table.execute_row_action(
            busy,
            async move { post_json(REWARD_PATH, token.as_deref(), &body).await },
            |body| success_message(body, "Reward updated successfully"),
            "Failed to update reward",
            move |_| {
                let _ = dialog.try_set(None);
            },
        );
    };

    let export = move |_: ()| table.export("airdrop", |n, row: &AirdropRow| row.export_record(n));

    view! {
        <PageFrame page_id="a006_airdrop--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Airdrop"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || table.total_rows().get().to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <TableToolbar
                    table=table
                    search_placeholder="Username, wallet..."
                    category=REWARD_FILTER
                    on_export=Callback::new(export)
                />

                {move || table.error().get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1200px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=50.0>"No"</TableHeaderCell>
                                <SortableHeaderCell label="Username" sort_key="userId" sort=table.sort() on_sort=table.on_sort() min_width=130.0 />
                                <SortableHeaderCell label="Wallet Address" sort_key="walletAddress" sort=table.sort() on_sort=table.on_sort() min_width=150.0 />
                                <TableHeaderCell resizable=false min_width=220.0>"Proof"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Reward"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Task Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Remark"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Date & Time"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Action"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || table.page_rows()
                                key=|r| r.key.clone()
                                children=move |PageRow { number, row, .. }| {
                                    let proofs = row
                                        .proof_images()
                                        .into_iter()
                                        .map(|(label, url)| view! {
                                            <a class="proof-link" href=url target="_blank" rel="noopener noreferrer">
                                                {label}
                                            </a>
                                        })
                                        .collect_view();
                                    let pending = row.is_pending();
                                    let for_approve = row.clone();
                                    let for_reject = row.clone();
                                    let reward_badge = row.reward_badge();
                                    view! {
                                        <TableRow>
                                            <TableCell>{number}</TableCell>
                                            <TableCellCopy value=row.user_id.clone() />
                                            <TableCellCopy value=row.wallet_address.clone() shorten=true />
                                            <TableCell><div class="proof-links">{proofs}</div></TableCell>
                                            <TableCell><StatusBadgeView badge=reward_badge /></TableCell>
                                            <TableCell>{or_dash(&row.task_status)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{or_dash(&row.admin_remark)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_datetime(&row.created_at)}</TableCell>
                                            <TableCell>
                                                <Show when=move || pending>
                                                    <div class="table__actions">
                                                        <button
                                                            class="button button--icon"
                                                            title="Approve"
                                                            on:click={
                                                                let row = for_approve.clone();
                                                                move |_| open(row.clone(), ActionVerb::Approve)
                                                            }
                                                        >
                                                            {icon("check")}
                                                        </button>
                                                        <button
                                                            class="button button--icon"
                                                            title="Reject"
                                                            on:click={
                                                                let row = for_reject.clone();
                                                                move |_| open(row.clone(), ActionVerb::Reject)
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

            {move || dialog.get().map(|(row, verb)| {
                let name = or_dash(&row.user_id);
                view! {
                    <ConfirmDialog
                        title=format!("{} Reward", verb.label())
                        confirm_label=verb.label()
                        on_confirm=Callback::new(move |_| submit(row.clone(), verb))
                        on_cancel=close
                        busy=busy
                        confirm_disabled=Signal::derive(move || !remark.with(|r| can_confirm(verb, r)))
                        danger={verb == ActionVerb::Reject}
                    >
                        <p>{format!("{} airdrop reward for {}?", verb.label(), name)}</p>
                        <div class="form-group">
                            <label for="remark">
                                {if verb.requires_remark() { "Remark (required)" } else { "Remark" }}
                            </label>
                            <textarea
                                id="remark"
                                rows="3"
                                prop:value=move || remark.get()
                                on:input=move |ev| remark.set(event_target_value(&ev))
                            />
                        </div>
                    </ConfirmDialog>
                }
            })}
        </PageFrame>
    }
}
