//! Таблица с серверной пагинацией: запрос, сброс страницы при смене фильтра,
//! отсечение устаревших ответов, выбор строк, действия и выгрузка.

pub mod actions;
pub mod controller;
pub mod coordinator;
pub mod export;
pub mod filter_reset;
pub mod query;
pub mod selection;

pub use actions::{can_confirm, ActionVerb, BulkActionRequest, RowActionRequest, RowActionResult};
pub use controller::{ApplyOutcome, RemoteTableController};
pub use coordinator::{FetchTicket, PageResult};
pub use export::{ExportFile, ExportRecord, NOTHING_TO_EXPORT};
pub use query::{ListParams, SortDirection, SortSpec, TableQuery, DEFAULT_PAGE_SIZE};
pub use selection::{PageCheckState, SelectionSet, TableRow};
