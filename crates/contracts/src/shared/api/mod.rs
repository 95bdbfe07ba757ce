//! Конверт ответов backend-а, ошибки API и лояльные десериализаторы полей

pub mod de;
pub mod envelope;
pub mod error;

pub use envelope::{ApiEnvelope, ListPage, ListShape, PageMeta};
pub use error::{ApiError, ValidationError, SESSION_EXPIRED_MESSAGE};
