use serde::{Deserialize, Serialize};

use crate::shared::api::de::{id_string, lenient_bool, lenient_string, lenient_u64};
use crate::shared::format::format_datetime;
use crate::shared::remote_table::{ExportRecord, TableRow};

/// Строка таблицы пула (`admin/listPoolUser`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolUserRow {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sponsor_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ref_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub inv_code: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub child: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: bool,
}

impl TableRow for PoolUserRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl PoolUserRow {
    pub fn status_label(&self) -> &'static str {
        if self.status {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn export_record(&self, number: usize) -> ExportRecord {
        ExportRecord::new()
            .field("No", number)
            .field("Username", &self.user_name)
            .field("Sponsor ID", &self.sponsor_name)
            .field("Referral ID", &self.ref_code)
            .field("Invitation ID", &self.inv_code)
            .field("Children", self.child)
            .field("Registration Date", format_datetime(&self.created_at))
            .field("Status", self.status_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pool_row() {
        let row: PoolUserRow = serde_json::from_str(
            r#"{"_id":3,"userName":"eve","child":"4","status":true,"createdAt":"2024-01-02T03:04:05Z"}"#,
        )
        .unwrap();
        assert_eq!(row.child, 4);
        assert_eq!(row.status_label(), "Active");
        let record = row.export_record(1);
        assert_eq!(record.values()[6], "02.01.2024 03:04:05");
    }
}
