//! Tab management module
//!
//! Содержит:
//! - `page` - компонент TabPage для обёртки контента таба
//! - `strip` - полоса заголовков табов
//! - `registry` - маппинг tab.key → View
//! - `tab_labels` - заголовки табов и соответствие ключ ↔ путь

pub mod page;
pub mod registry;
pub mod strip;
pub mod tab_labels;

pub use page::TabPage;
pub use strip::Tabs;
pub use tab_labels::{page_for_key, page_for_path, path_for_key, tab_label_for_key, PageEntry, PAGES};
