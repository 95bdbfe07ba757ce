use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::StatusBadge;
use crate::shared::api::de::{id_string, id_to_json, lenient_string};
use crate::shared::format::{format_datetime, or_dash};
use crate::shared::remote_table::{ActionVerb, ExportRecord, RowActionRequest, TableRow};

pub const REWARD_FILTER_PARAM: &str = "rewardStatus";
pub const REWARD_PENDING: &str = "PENDING";

pub const REWARD_STATUSES: [(&str, StatusBadge); 3] = [
    ("APPROVE", StatusBadge::new("Approved", "success")),
    ("REJECT", StatusBadge::new("Rejected", "error")),
    ("PENDING", StatusBadge::new("Pending", "warning")),
];

/// Заявка на airdrop: скриншоты подписок и статус награды
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropRow {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub wallet_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub follow_facebook: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub follow_insta: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub follow_telegram: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub follow_tg_community: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reward_status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub task_status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub admin_remark: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl TableRow for AirdropRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl AirdropRow {
    pub fn is_pending(&self) -> bool {
        self.reward_status == REWARD_PENDING
    }

    pub fn reward_badge(&self) -> StatusBadge {
        StatusBadge::lookup(&REWARD_STATUSES, &self.reward_status)
    }

    /// Скриншоты заданий: (подпись, url), пустые пропускаются
    pub fn proof_images(&self) -> Vec<(&'static str, String)> {
        [
            ("Facebook", &self.follow_facebook),
            ("Instagram", &self.follow_insta),
            ("Telegram", &self.follow_telegram),
            ("Community", &self.follow_tg_community),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(label, url)| (label, url.clone()))
        .collect()
    }

    pub fn export_record(&self, number: usize) -> ExportRecord {
        ExportRecord::new()
            .field("No", number)
            .field("Username", or_dash(&self.user_id))
            .field("Wallet Address", or_dash(&self.wallet_address))
            .field("Facebook", or_dash(&self.follow_facebook))
            .field("Instagram", or_dash(&self.follow_insta))
            .field("Telegram", or_dash(&self.follow_telegram))
            .field("Community", or_dash(&self.follow_tg_community))
            .field("Reward", or_dash(&self.reward_status))
            .field("Status", or_dash(&self.task_status))
            .field("Remark", or_dash(&self.admin_remark))
            .field("Date & Time", format_datetime(&self.created_at))
    }
}

/// POST `airdrop/admin-update-reward`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropRewardRequest {
    pub task_id: Value,
    pub operation: ActionVerb,
    pub remark: String,
}

impl From<&RowActionRequest> for AirdropRewardRequest {
    fn from(action: &RowActionRequest) -> Self {
        Self {
            task_id: id_to_json(&action.row_id),
            operation: action.verb,
            remark: action.remark_or_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reject_payload_carries_remark() {
        let action = RowActionRequest::new("12", ActionVerb::Reject)
            .with_remark("fake screenshot")
            .validate()
            .unwrap();
        let body = serde_json::to_value(AirdropRewardRequest::from(&action)).unwrap();
        assert_eq!(
            body,
            json!({"taskId": 12, "operation": "REJECT", "remark": "fake screenshot"})
        );
    }

    #[test]
    fn proof_images_skip_empty() {
        let row = AirdropRow {
            follow_facebook: "https://img/fb.png".into(),
            follow_telegram: "https://img/tg.png".into(),
            reward_status: "PENDING".into(),
            ..Default::default()
        };
        assert!(row.is_pending());
        let images = row.proof_images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[1].0, "Telegram");
        assert_eq!(row.export_record(1).values()[4], "-");
    }
}
