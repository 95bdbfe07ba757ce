use serde::{Deserialize, Serialize};

use crate::domain::common::StatusBadge;
use crate::shared::api::de::{id_string, lenient_f64, lenient_string};
use crate::shared::format::{format_amount, format_datetime};
use crate::shared::remote_table::{ExportRecord, TableRow};

/// Имя query-параметра фильтра по типу (опечатка на стороне backend-а)
pub const TYPE_FILTER_PARAM: &str = "transacionType";

/// Типы транзакций для фильтра и бейджей
pub const TRANSACTION_TYPES: [(&str, StatusBadge); 6] = [
    ("WITHDRAW", StatusBadge::new("Withdraw", "warning")),
    ("PLAN PURCHASE", StatusBadge::new("Plan Purchase", "success")),
    ("DEPOSIT", StatusBadge::new("Deposit", "primary")),
    ("CREDIT", StatusBadge::new("Credit", "success")),
    ("TRANSFER", StatusBadge::new("Transfer", "neutral")),
    ("DEBIT", StatusBadge::new("Debit", "error")),
];

/// Строка истории транзакций (`admin/assetsTransactionList`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "transacionType", default, deserialize_with = "lenient_string")]
    pub transaction_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender_nick_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub receiver_nick_name: String,
    #[serde(rename = "formWalletAddress", default, deserialize_with = "lenient_string")]
    pub from_wallet_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to_wallet_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub remark: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl TableRow for TransactionRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl TransactionRow {
    pub fn type_badge(&self) -> StatusBadge {
        StatusBadge::lookup(&TRANSACTION_TYPES, &self.transaction_type)
    }

    pub fn export_record(&self, number: usize) -> ExportRecord {
        ExportRecord::new()
            .field("No", number)
            .field("Transaction Type", &self.transaction_type)
            .field("Username", &self.sender_nick_name)
            .field("Receiver Name", &self.receiver_nick_name)
            .field("From", &self.from_wallet_address)
            .field("To", &self.to_wallet_address)
            .field("Remark", &self.remark)
            .field("Amount", format_amount(self.amount))
            .field("Date & Time", format_datetime(&self.created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_names() {
        let row: TransactionRow = serde_json::from_str(
            r#"{"_id":1,"transacionType":"DEBIT","formWalletAddress":"0xabc","amount":12}"#,
        )
        .unwrap();
        assert_eq!(row.transaction_type, "DEBIT");
        assert_eq!(row.from_wallet_address, "0xabc");
        assert_eq!(row.type_badge().variant, "error");
        assert_eq!(row.export_record(4).headers()[4], "From");
    }
}
