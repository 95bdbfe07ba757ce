//! Общие типы для строк admin-таблиц

pub mod badge;
pub mod content_form;

pub use badge::StatusBadge;
pub use content_form::{
    ContentForm, ContentStatus, DeleteContentRequest, ImageUpload, ACCEPTED_IMAGE_TYPES,
    MAX_IMAGE_BYTES,
};
