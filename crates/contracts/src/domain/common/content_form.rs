//! Форма добавления/редактирования карточек команды и блога

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::shared::api::ValidationError;

pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];
const MIN_TEXT_LEN: usize = 3;
const DEFAULT_LINK: &str = "#";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentStatus {
    #[default]
    Active,
    Block,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Active => "ACTIVE",
            ContentStatus::Block => "BLOCK",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("BLOCK") {
            ContentStatus::Block
        } else {
            ContentStatus::Active
        }
    }
}

/// Картинка, уже закодированная в data URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub mime: String,
    pub size: usize,
    pub data_url: String,
}

impl ImageUpload {
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Result<Self, ValidationError> {
        if !ACCEPTED_IMAGE_TYPES.contains(&mime) {
            return Err(ValidationError::new(
                "thumbnail",
                "Allowed formats are jpg, png, webp",
            ));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ValidationError::new(
                "thumbnail",
                "Image size must be less than 1MB",
            ));
        }
        Ok(Self {
            mime: mime.to_string(),
            size: bytes.len(),
            data_url: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        })
    }
}

/// Поля формы. `id` заполнен при редактировании.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentForm {
    pub id: Option<String>,
    pub title: String,
    pub short_description: String,
    pub redirection_link: String,
    pub status: ContentStatus,
    pub existing_thumbnail: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Тело `add-*` / `edit-*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUpsertRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub short_description: String,
    pub thumbnail: String,
    pub redirection_link: String,
    pub status: ContentStatus,
}

/// Тело `delete-*`: передается как `?_id=`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteContentRequest {
    #[serde(rename = "_id")]
    pub id: String,
}

impl DeleteContentRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// `admin/delete-blog?_id=...`
    pub fn append_to(&self, path: &str) -> String {
        match serde_qs::to_string(self) {
            Ok(query) => format!("{}?{}", path, query),
            Err(e) => {
                log::warn!("failed to encode delete query: {}", e);
                path.to_string()
            }
        }
    }
}

impl ContentForm {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<ContentUpsertRequest, ValidationError> {
        if self.title.trim().chars().count() < MIN_TEXT_LEN {
            return Err(ValidationError::new(
                "title",
                "Name is required and must be at least 3 characters",
            ));
        }
        if self.short_description.trim().chars().count() < MIN_TEXT_LEN {
            return Err(ValidationError::new(
                "shortDescription",
                "Description must be at least 3 characters",
            ));
        }

        let thumbnail = match (&self.image, &self.existing_thumbnail) {
            (Some(image), _) => image.data_url.clone(),
            (None, Some(existing)) if self.is_edit() => existing.clone(),
            _ => return Err(ValidationError::new("thumbnail", "Image is required")),
        };

        let link = self.redirection_link.trim();
        Ok(ContentUpsertRequest {
            id: self.id.clone(),
            title: self.title.trim().to_string(),
            short_description: self.short_description.trim().to_string(),
            thumbnail,
            redirection_link: if link.is_empty() {
                DEFAULT_LINK.to_string()
            } else {
                link.to_string()
            },
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_request_goes_to_query() {
        let req = DeleteContentRequest::new("64f0c2");
        assert_eq!(req.append_to("admin/delete-team"), "admin/delete-team?_id=64f0c2");
    }

    fn form() -> ContentForm {
        ContentForm {
            title: "Alice".into(),
            short_description: "CTO".into(),
            ..Default::default()
        }
    }

    #[test]
    fn image_rules() {
        assert!(ImageUpload::from_bytes("image/gif", b"GIF89a").is_err());
        let too_big = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert!(ImageUpload::from_bytes("image/png", &too_big).is_err());
        let ok = ImageUpload::from_bytes("image/png", b"abc").unwrap();
        assert_eq!(ok.data_url, "data:image/png;base64,YWJj");
        assert_eq!(ok.size, 3);
    }

    #[test]
    fn add_requires_image_and_text() {
        assert_eq!(form().validate().unwrap_err().field, "thumbnail");

        let mut short = form();
        short.title = "Al".into();
        assert_eq!(short.validate().unwrap_err().field, "title");

        let mut f = form();
        f.image = Some(ImageUpload::from_bytes("image/webp", b"x").unwrap());
        let req = f.validate().unwrap();
        assert_eq!(req.redirection_link, "#");
        assert_eq!(req.status, ContentStatus::Active);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["shortDescription"], "CTO");
        assert_eq!(json["status"], "ACTIVE");
    }

    #[test]
    fn edit_keeps_existing_thumbnail() {
        let mut f = form();
        f.id = Some("65ab".into());
        f.existing_thumbnail = Some("https://cdn/x.png".into());
        f.status = ContentStatus::Block;
        f.redirection_link = "https://blog/post".into();
        let req = f.validate().unwrap();
        assert_eq!(req.thumbnail, "https://cdn/x.png");
        assert_eq!(req.redirection_link, "https://blog/post");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["_id"], "65ab");
        assert_eq!(json["status"], "BLOCK");
    }
}
