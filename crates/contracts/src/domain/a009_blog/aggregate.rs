use serde::{Deserialize, Serialize};

use crate::domain::a008_team::aggregate::CONTENT_STATUS_BADGES;
use crate::domain::common::{ContentForm, ContentStatus, StatusBadge};
use crate::shared::api::de::{id_string, lenient_string};
use crate::shared::format::format_datetime;
use crate::shared::remote_table::{ExportRecord, TableRow};

/// Запись блога со ссылкой на полный текст
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRow {
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

impl TableRow for BlogRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl BlogRow {
    pub fn status_badge(&self) -> StatusBadge {
        StatusBadge::lookup(&CONTENT_STATUS_BADGES, &self.status)
    }

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
            .field("Title", &self.title)
            .field("Description", &self.short_description)
            .field("Image", &self.thumbnail)
            .field("Link", &self.redirection_link)
            .field("Status", &self.status)
            .field("Date & Time", format_datetime(&self.created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_without_thumbnail_requires_new_image() {
        let row = BlogRow {
            id: "b1".into(),
            title: "Launch".into(),
            short_description: "We are live".into(),
            redirection_link: "https://atmc.io/blog/launch".into(),
            status: "ACTIVE".into(),
            ..Default::default()
        };
        let form = row.edit_form();
        assert_eq!(form.validate().unwrap_err().field, "thumbnail");
    }
}
