use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::StatusBadge;
use crate::shared::api::de::{id_string, lenient_f64, lenient_string, value_to_f64};
use crate::shared::format::{format_amount, format_datetime};
use crate::shared::remote_table::{ExportRecord, TableRow};

pub const PLAN_BADGES: [(&str, StatusBadge); 5] = [
    ("Starter", StatusBadge::new("Starter Plan", "neutral")),
    ("Standard", StatusBadge::new("Standard Plan", "warning")),
    ("Premium", StatusBadge::new("Premium Plan", "primary")),
    ("Elite", StatusBadge::new("Elite Plan", "primary")),
    ("Exclusive", StatusBadge::new("Exclusive Plan", "success")),
];

/// Подписка пользователя на план (`admin/viewUserSubscriptionDetails`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRow {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub plan_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub plan_price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub income: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub main_balance: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl TableRow for InvestmentRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl InvestmentRow {
    pub fn plan_badge(&self) -> StatusBadge {
        StatusBadge::lookup(&PLAN_BADGES, &self.plan_name)
    }

    pub fn export_record(&self, number: usize) -> ExportRecord {
        ExportRecord::new()
            .field("No", number)
            .field("Username", &self.user_name)
            .field("Plan", &self.plan_name)
            .field("Plan Amount", format_amount(self.plan_price))
            .field("Income Amount", format_amount(self.income))
            .field("Date", format_datetime(&self.created_at))
    }
}

/// Общая сумма инвестиций из блока ответа: `totalAmount[0].totalAmount`
pub fn total_amount(block: &Value) -> f64 {
    block
        .get("totalAmount")
        .and_then(|t| t.get(0))
        .and_then(|t| t.get("totalAmount"))
        .and_then(value_to_f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn total_amount_from_block() {
        assert_eq!(total_amount(&json!({"totalAmount": [{"totalAmount": 1500}]})), 1500.0);
        assert_eq!(total_amount(&json!({"totalAmount": []})), 0.0);
        assert_eq!(total_amount(&Value::Null), 0.0);
    }

    #[test]
    fn plan_badges() {
        let row = InvestmentRow {
            plan_name: "Elite".into(),
            ..Default::default()
        };
        assert_eq!(row.plan_badge().label, "Elite Plan");
    }
}
