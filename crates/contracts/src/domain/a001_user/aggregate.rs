use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::StatusBadge;
use crate::shared::api::de::{id_string, id_to_json, lenient_f64, lenient_string};
use crate::shared::api::ValidationError;
use crate::shared::format::{format_amount, format_datetime};
use crate::shared::remote_table::{ExportRecord, TableRow};

pub const USER_STATUS_ACTIVE: &str = "ACTIVE";
/// План с ручной суммой
pub const EXCLUSIVE_PLAN: &str = "Exclusive";
pub const DEFAULT_PURCHASE_REMARK: &str = "purchased by admin";

pub const STATUS_BADGES: [(&str, StatusBadge); 2] = [
    ("ACTIVE", StatusBadge::new("Active", "success")),
    ("BLOCK", StatusBadge::new("Blocked", "error")),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalWalletData {
    #[serde(default)]
    pub is_blocked: bool,
}

/// Строка таблицы пользователей (`admin/listUser`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub nick_name: String,
    /// ID спонсора
    #[serde(default, deserialize_with = "lenient_string")]
    pub invitation_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub wallet_address: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub plan_price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fund_wallet: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub income_balance: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pool_wallet: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub air_drop_coin: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub activation_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, rename = "internalwalletData")]
    pub internal_wallet_data: Option<InternalWalletData>,
}

impl TableRow for UserRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl UserRow {
    pub fn is_active(&self) -> bool {
        self.status == USER_STATUS_ACTIVE
    }

    pub fn wallet_blocked(&self) -> bool {
        self.internal_wallet_data
            .as_ref()
            .map(|w| w.is_blocked)
            .unwrap_or(false)
    }

    pub fn status_badge(&self) -> StatusBadge {
        StatusBadge::lookup(&STATUS_BADGES, &self.status)
    }

    pub fn export_record(&self, number: usize) -> ExportRecord {
        ExportRecord::new()
            .field("No", number)
            .field("Username", &self.nick_name)
            .field("Sponsor ID", &self.invitation_code)
            .field("Wallet Address", &self.wallet_address)
            .field("Plan Amount", format_amount(self.plan_price))
            .field("Fund Wallet", format_amount(self.fund_wallet))
            .field("Income Wallet", format_amount(self.income_balance))
            .field("Pool Wallet", format_amount(self.pool_wallet))
            .field("Airdrop Wallet", format_amount(self.air_drop_coin))
            .field("Registration Date", format_datetime(&self.created_at))
            .field("Activation Date", format_datetime(&self.activation_date))
            .field("Status", &self.status)
    }
}

/// PUT `admin/blockUnblockUser`: переключает статус пользователя
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockUserRequest {
    #[serde(rename = "_id")]
    pub id: Value,
}

impl BlockUserRequest {
    pub fn new(user_id: &str) -> Self {
        Self {
            id: id_to_json(user_id),
        }
    }
}

/// POST `admin/block-unblock-withdraw`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockWalletRequest {
    pub user_id: Value,
    pub block: bool,
}

impl BlockWalletRequest {
    /// `block` противоположен текущему состоянию кошелька
    pub fn toggle_for(user: &UserRow) -> Self {
        Self {
            user_id: id_to_json(&user.id),
            block: !user.wallet_blocked(),
        }
    }

    pub fn success_message(&self) -> &'static str {
        if self.block {
            "User wallet blocked successfully!"
        } else {
            "User wallet unblocked successfully!"
        }
    }
}

/// План из `buy/getTradingBotDetails`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Plan {
    pub fn is_exclusive(&self) -> bool {
        self.name == EXCLUSIVE_PLAN
    }

    pub fn option_label(&self) -> String {
        match self.price {
            Some(price) => format!("{} (${})", self.name, price),
            None => self.name.clone(),
        }
    }

    /// Сумма, которую форма подставляет при выборе плана, и можно ли ее менять
    pub fn amount_preset(&self) -> (String, bool) {
        if self.is_exclusive() {
            (String::new(), true)
        } else {
            (self.price.map(|p| p.to_string()).unwrap_or_default(), false)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanUserRef {
    #[serde(rename = "_id")]
    pub id: String,
}

/// POST `buy/get-plan-for-users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPurchaseRequest {
    pub plan_id: String,
    pub remark: String,
    pub is_roi: bool,
    pub amount: f64,
    pub users: Vec<PlanUserRef>,
}

/// Поля диалога покупки плана
#[derive(Debug, Clone, PartialEq)]
pub struct PlanPurchaseForm {
    pub plan_id: String,
    pub amount: String,
    pub remark: String,
    pub is_roi: bool,
}

impl Default for PlanPurchaseForm {
    fn default() -> Self {
        Self {
            plan_id: String::new(),
            amount: String::new(),
            remark: DEFAULT_PURCHASE_REMARK.to_string(),
            is_roi: false,
        }
    }
}

impl PlanPurchaseForm {
    pub fn validate(
        &self,
        plans: &[Plan],
        user_id: &str,
    ) -> Result<PlanPurchaseRequest, ValidationError> {
        let plan = plans
            .iter()
            .find(|p| p.id == self.plan_id)
            .ok_or_else(|| ValidationError::new("planId", "Please select a plan"))?;

        let amount = if plan.is_exclusive() {
            self.amount.trim().parse::<f64>().ok()
        } else {
            plan.price
        };
        let amount = amount
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or_else(|| ValidationError::new("amount", "Amount is required"))?;

        Ok(PlanPurchaseRequest {
            plan_id: plan.id.clone(),
            remark: self.remark.clone(),
            is_roi: self.is_roi,
            amount,
            users: vec![PlanUserRef {
                id: user_id.to_string(),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plans() -> Vec<Plan> {
        vec![
            Plan {
                id: "p1".into(),
                name: "Starter".into(),
                price: Some(100.0),
            },
            Plan {
                id: "p5".into(),
                name: "Exclusive".into(),
                price: None,
            },
        ]
    }

    #[test]
    fn decodes_user_row() {
        let row: UserRow = serde_json::from_str(
            r#"{"_id":7,"nickName":"bob","planPrice":"100","status":"ACTIVE",
                "internalwalletData":{"isBlocked":true}}"#,
        )
        .unwrap();
        assert_eq!(row.id, "7");
        assert_eq!(row.plan_price, 100.0);
        assert!(row.is_active());
        assert!(row.wallet_blocked());
        assert!(!BlockWalletRequest::toggle_for(&row).block);
    }

    #[test]
    fn block_request_keeps_numeric_id() {
        let json = serde_json::to_value(BlockUserRequest::new("7")).unwrap();
        assert_eq!(json["_id"], 7);
    }

    #[test]
    fn fixed_price_plan_ignores_typed_amount() {
        let form = PlanPurchaseForm {
            plan_id: "p1".into(),
            amount: "5".into(),
            ..Default::default()
        };
        let req = form.validate(&plans(), "7").unwrap();
        assert_eq!(req.amount, 100.0);
        assert_eq!(req.remark, DEFAULT_PURCHASE_REMARK);
        assert_eq!(req.users[0].id, "7");
        assert_eq!(plans()[0].amount_preset(), ("100".to_string(), false));
    }

    #[test]
    fn exclusive_plan_needs_positive_amount() {
        let mut form = PlanPurchaseForm {
            plan_id: "p5".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(&plans(), "7").unwrap_err().field, "amount");
        form.amount = "-3".into();
        assert!(form.validate(&plans(), "7").is_err());
        form.amount = "250.5".into();
        let req = form.validate(&plans(), "7").unwrap();
        assert_eq!(req.amount, 250.5);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["planId"], "p5");
        assert_eq!(json["isRoi"], false);
    }

    #[test]
    fn missing_plan_is_rejected() {
        let form = PlanPurchaseForm::default();
        assert_eq!(form.validate(&plans(), "7").unwrap_err().field, "planId");
    }
}
