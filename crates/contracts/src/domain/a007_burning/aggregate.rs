use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::api::de::{id_string, lenient_f64, lenient_string, value_to_f64};
use crate::shared::format::{format_amount, format_date};
use crate::shared::remote_table::{ExportRecord, TableRow};

/// Вкладки страницы сжигания
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BurnTab {
    #[default]
    Available,
    Burned,
}

impl BurnTab {
    /// Фиксированные параметры списка для вкладки
    pub fn fixed_params(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            BurnTab::Available => &[],
            BurnTab::Burned => &[("status", "burned")],
        }
    }

    pub fn amount_header(&self) -> &'static str {
        match self {
            BurnTab::Available => "Available To Burn",
            BurnTab::Burned => "Burned Amount",
        }
    }
}

/// Подписка с монетами к сжиганию (`admin/available-to-burn`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnRow {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub plan_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub available_to_burn: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub plan_amount: f64,
    #[serde(rename = "expierdOn", default, deserialize_with = "lenient_string")]
    pub expired_on: String,
}

impl TableRow for BurnRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl BurnRow {
    pub fn export_record(&self, number: usize, tab: BurnTab) -> ExportRecord {
        ExportRecord::new()
            .field("No", number)
            .field("Username", &self.username)
            .field("Plan ID", &self.plan_id)
            .field("Wallet Address", &self.address)
            .field(tab.amount_header(), format_amount(self.available_to_burn))
            .field("Plan Amount", format_amount(self.plan_amount))
            .field("Expiry Date", format_date(&self.expired_on))
    }
}

/// POST `admin/burn-coins`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnCoinsRequest {
    pub plan_id: String,
}

/// `admin/burning-stats`: `result[0]`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BurnStats {
    pub today_burned: f64,
    pub total_burned: f64,
}

impl BurnStats {
    pub fn from_result(result: &Value) -> Self {
        let first = result.get(0);
        let read = |key: &str| {
            first
                .and_then(|r| r.get(key))
                .and_then(value_to_f64)
                .unwrap_or(0.0)
        };
        Self {
            today_burned: read("todayBurned"),
            total_burned: read("totalBurned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stats_default_to_zero() {
        let stats = BurnStats::from_result(&json!([{"todayBurned": 12.5}]));
        assert_eq!(stats.today_burned, 12.5);
        assert_eq!(stats.total_burned, 0.0);
        assert_eq!(BurnStats::from_result(&json!([])), BurnStats::default());
    }

    #[test]
    fn burned_tab_uses_status_param() {
        assert_eq!(BurnTab::Burned.fixed_params(), &[("status", "burned")]);
        assert!(BurnTab::Available.fixed_params().is_empty());
        let row: BurnRow =
            serde_json::from_str(r#"{"_id":1,"planId":"pl-9","expierdOn":"2025-01-31T00:00:00Z"}"#)
                .unwrap();
        let record = row.export_record(1, BurnTab::Burned);
        assert_eq!(record.headers()[4], "Burned Amount");
        assert_eq!(record.values()[6], "31.01.2025");
    }
}
