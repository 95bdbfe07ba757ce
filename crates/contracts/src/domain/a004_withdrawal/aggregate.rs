use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::common::StatusBadge;
use crate::shared::api::de::{id_string, lenient_f64, lenient_string};
use crate::shared::format::{format_amount, format_datetime};
use crate::shared::remote_table::{ActionVerb, BulkActionRequest, ExportRecord, TableRow};

pub const STATUS_FILTER_PARAM: &str = "transacionStatus";
pub const STATUS_WAITING_APPROVAL: &str = "WAITING_APPROVAL";

pub const WITHDRAW_STATUSES: [(&str, StatusBadge); 3] = [
    ("WAITING_APPROVAL", StatusBadge::new("Waiting", "warning")),
    ("COMPLETED", StatusBadge::new("Completed", "success")),
    ("CANCELLED", StatusBadge::new("Cancelled", "error")),
];

/// Заявка на вывод (`admin/asste-transaction-withdraw-list`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRow {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub transaction_id: String,
    #[serde(rename = "transacionType", default, deserialize_with = "lenient_string")]
    pub transaction_type: String,
    #[serde(rename = "formWalletAddress", default, deserialize_with = "lenient_string")]
    pub from_wallet_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to_wallet_address: String,
    #[serde(rename = "transacionStatus", default, deserialize_with = "lenient_string")]
    pub transaction_status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub remark: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub wallet_balance: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub transaction_fee: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl TableRow for WithdrawalRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl WithdrawalRow {
    /// Решение принимается только по ожидающим заявкам
    pub fn is_actionable(&self) -> bool {
        self.transaction_status == STATUS_WAITING_APPROVAL
    }

    pub fn status_badge(&self) -> StatusBadge {
        StatusBadge::lookup(&WITHDRAW_STATUSES, &self.transaction_status)
    }

    pub fn export_record(&self, number: usize) -> ExportRecord {
        ExportRecord::new()
            .field("No", number)
            .field("User Name", &self.user_name)
            .field("User Id", &self.user_id)
            .field("Transaction Id", &self.transaction_id)
            .field("Transaction Type", &self.transaction_type)
            .field("From", &self.from_wallet_address)
            .field("To", &self.to_wallet_address)
            .field("Amount", format_amount(self.amount))
            .field("Transaction Fee", format_amount(self.transaction_fee))
            .field("Wallet Balance", format_amount(self.wallet_balance))
            .field("Status", &self.transaction_status)
            .field("Remark", &self.remark)
            .field("Date & Time", format_datetime(&self.created_at))
    }
}

/// POST `admin/approveWithdrawReq`.
/// Одиночное действие шлет `[{ "_id": id }]`, массовое шлет массив id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawActionRequest {
    pub object_id: Vec<Value>,
    pub action: ActionVerb,
}

impl WithdrawActionRequest {
    pub fn single(row_id: &str, action: ActionVerb) -> Self {
        Self {
            object_id: vec![json!({ "_id": row_id })],
            action,
        }
    }

    pub fn bulk(request: &BulkActionRequest) -> Self {
        Self {
            object_id: request.ids.iter().map(|id| Value::from(id.as_str())).collect(),
            action: request.verb,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self.action {
            ActionVerb::Reject => "Withdraw is rejected.",
            ActionVerb::Approve => "Withdraw approved successfully.",
            _ => "Action completed successfully.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote_table::SelectionSet;

    #[test]
    fn single_and_bulk_payloads() {
        let single = serde_json::to_value(WithdrawActionRequest::single("w1", ActionVerb::Approve))
            .unwrap();
        assert_eq!(single, json!({"objectId": [{"_id": "w1"}], "action": "APPROVE"}));

        let mut sel = SelectionSet::default();
        sel.toggle("w2", true);
        sel.toggle("w3", true);
        let bulk = BulkActionRequest::from_selection(&sel, ActionVerb::Reject).unwrap();
        let req = WithdrawActionRequest::bulk(&bulk);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"objectId": ["w2", "w3"], "action": "REJECT"})
        );
        assert_eq!(req.success_message(), "Withdraw is rejected.");
    }

    #[test]
    fn only_waiting_rows_are_actionable() {
        let row: WithdrawalRow = serde_json::from_str(
            r#"{"_id":"w1","transacionStatus":"COMPLETED","amount":"10.5"}"#,
        )
        .unwrap();
        assert!(!row.is_actionable());
        assert_eq!(row.amount, 10.5);
        assert_eq!(row.status_badge().label, "Completed");
    }
}
