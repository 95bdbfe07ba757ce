use serde::{Deserialize, Serialize};

use crate::domain::common::{ContentForm, ContentStatus, StatusBadge};
use crate::shared::api::de::{id_string, lenient_string};
use crate::shared::format::format_datetime;
use crate::shared::remote_table::{ExportRecord, TableRow};

pub const CONTENT_STATUS_BADGES: [(&str, StatusBadge); 2] = [
    ("ACTIVE", StatusBadge::new("Active", "success")),
    ("BLOCK", StatusBadge::new("Block", "error")),
];

/// Участник команды: `title` это имя, `short_description` это должность
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberRow {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub short_description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub redirection_link: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl TableRow for TeamMemberRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl TeamMemberRow {
    pub fn status_badge(&self) -> StatusBadge {
        StatusBadge::lookup(&CONTENT_STATUS_BADGES, &self.status)
    }

    /// Форма редактирования, заполненная текущими значениями
    pub fn edit_form(&self) -> ContentForm {
        ContentForm {
            id: Some(self.id.clone()),
            title: self.title.clone(),
            short_description: self.short_description.clone(),
            redirection_link: self.redirection_link.clone(),
            status: ContentStatus::parse(&self.status),
            existing_thumbnail: Some(self.thumbnail.clone()).filter(|t| !t.is_empty()),
            image: None,
        }
    }

    pub fn export_record(&self, number: usize) -> ExportRecord {
        ExportRecord::new()
            .field("No", number)
            .field("Name", &self.title)
            .field("Designation", &self.short_description)
            .field("Image", &self.thumbnail)
            .field("Status", &self.status)
            .field("Date & Time", format_datetime(&self.created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_round_trips_row() {
        let row = TeamMemberRow {
            id: "t1".into(),
            title: "Alice".into(),
            short_description: "CEO".into(),
            thumbnail: "https://cdn/a.png".into(),
            status: "BLOCK".into(),
            ..Default::default()
        };
        let req = row.edit_form().validate().unwrap();
        assert_eq!(req.id.as_deref(), Some("t1"));
        assert_eq!(req.thumbnail, "https://cdn/a.png");
        assert_eq!(req.status, ContentStatus::Block);
        assert_eq!(row.status_badge().label, "Block");
    }
}
