use contracts::domain::a001_user::aggregate::{Plan, PlanPurchaseForm, UserRow};
use leptos::prelude::*;
use thaw::*;

use crate::shared::http::{post_json, success_message};
use crate::shared::modal::Modal;
use crate::shared::remote_table::RemoteTable;

const PURCHASE_PATH: &str = "buy/get-plan-for-users";

/// Покупка плана администратором за пользователя.
/// Сумма редактируется только у плана Exclusive, у остальных берется цена плана.
#[component]
pub fn PlanPurchaseDialog(
    user: UserRow,
    table: RemoteTable<UserRow>,
    plans: RwSignal<Vec<Plan>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(PlanPurchaseForm::default());
    let amount_editable = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let user_id = StoredValue::new(user.id.clone());

    let select_plan = move |plan_id: String| {
        let preset = plans.with_untracked(|list| {
            list.iter()
                .find(|p| p.id == plan_id)
                .map(Plan::amount_preset)
        });
        let (amount, editable) = preset.unwrap_or_default();
        amount_editable.set(editable);
        form.update(|f| {
            f.plan_id = plan_id;
            f.amount = amount;
        });
    };

    let submit = move |_| {
        let request = plans.with_untracked(|list| {
            form.with_untracked(|f| f.validate(list, &user_id.get_value()))
        });
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                table.notifications().error(err.message);
                return;
            }
        };
        let token = table.session().token_untracked();
        table.execute_row_action(
            busy,
            async move { post_json(PURCHASE_PATH, token.as_deref(), &request).await },
            |body| success_message(body, "Plan purchased successfully"),
            "Failed to purchase plan",
            move |success| {
                if success {
                    on_close.run(());
                }
            },
        );
    };

    view! {
        <Modal title=format!("Buy Plan for {}", user.nick_name) on_close=on_close locked=busy>
            <div class="form">
                <div class="form-group">
                    <label for="plan">"Plan"</label>
                    <select
                        id="plan"
                        prop:value=move || form.with(|f| f.plan_id.clone())
                        on:change=move |ev| select_plan(event_target_value(&ev))
                    >
                        <option value="">
                            {move || if plans.with(Vec::is_empty) { "Loading plans..." } else { "Select plan" }}
                        </option>
                        <For
                            each=move || plans.get()
                            key=|plan| plan.id.clone()
                            children=move |plan| {
                                let id = plan.id.clone();
                                view! { <option value=id>{plan.option_label()}</option> }
                            }
                        />
                    </select>
                </div>

                <div class="form-group">
                    <label for="amount">"Amount"</label>
                    <input
                        id="amount"
                        type="number"
                        min="0"
                        prop:value=move || form.with(|f| f.amount.clone())
                        disabled=move || !amount_editable.get()
                        on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="remark">"Remark"</label>
                    <input
                        id="remark"
                        type="text"
                        prop:value=move || form.with(|f| f.remark.clone())
                        on:input=move |ev| form.update(|f| f.remark = event_target_value(&ev))
                    />
                </div>

                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_roi)
                        on:change=move |ev| form.update(|f| f.is_roi = event_target_checked(&ev))
                    />
                    " Include ROI"
                </label>
            </div>

            <div class="modal-footer">
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || busy.get() || form.with(|f| f.plan_id.is_empty()))
                    >
                        {move || if busy.get() { "Please wait..." } else { "Buy Plan" }}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
