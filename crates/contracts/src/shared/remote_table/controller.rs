use super::actions::{ActionVerb, BulkActionGuard, BulkActionRequest};
use super::coordinator::{FetchCoordinator, FetchTicket, PageResult};
use super::export::export_limit;
use super::filter_reset::FilterResetRule;
use super::query::{ListParams, TableQuery};
use super::selection::{SelectionSet, TableRow};
use crate::shared::api::{ApiError, ValidationError};

/// Состояние таблицы с серверной пагинацией, сортировкой и фильтрацией.
///
/// Любое изменение запроса делается через методы-мутаторы, после чего UI вызывает
/// [`RemoteTableController::reconcile`]. Один проход либо сбрасывает страницу
/// (при смене фильтра), либо выдает билет на запрос, либо ничего не делает.
#[derive(Debug, Clone)]
pub struct RemoteTableController<R> {
    query: TableQuery,
    default_page_size: usize,
    reset_rule: FilterResetRule,
    coordinator: FetchCoordinator,
    page: PageResult<R>,
    /// Запрос последнего выданного билета
    in_flight: Option<TableQuery>,
    /// Запрос, к которому относятся `page.total_rows`
    page_query: Option<TableQuery>,
    selection: SelectionSet,
    bulk: BulkActionGuard,
    error: Option<String>,
}

/// Итог применения ответа
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Stale,
    Failed(ApiError),
}

impl<R: TableRow> RemoteTableController<R> {
    pub fn new(default_page_size: usize) -> Self {
        let query = TableQuery::with_page_size(default_page_size);
        Self {
            reset_rule: FilterResetRule::new(&query),
            default_page_size: query.page_size,
            query,
            coordinator: FetchCoordinator::default(),
            page: PageResult::default(),
            in_flight: None,
            page_query: None,
            selection: SelectionSet::default(),
            bulk: BulkActionGuard::default(),
            error: None,
        }
    }

    // ============================================================================
    // Чтение
    // ============================================================================

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    pub fn rows(&self) -> &[R] {
        &self.page.rows
    }

    pub fn total_rows(&self) -> u64 {
        self.page.total_rows
    }

    pub fn total_pages(&self) -> u64 {
        self.page.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.coordinator.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn bulk_in_flight(&self) -> Option<ActionVerb> {
        self.bulk.in_flight()
    }

    /// Номер строки в колонке "No" с учетом страницы
    pub fn row_number(&self, index_on_page: usize) -> usize {
        self.query.page_index * self.query.page_size + index_on_page + 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.query.page_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        (self.query.page_index as u64 + 1) < self.page.total_pages
    }

    // ============================================================================
    // Мутаторы запроса
    // ============================================================================

    pub fn set_page_index(&mut self, page_index: usize) {
        self.query.page_index = page_index;
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.query.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.query.page_index -= 1;
        }
    }

    pub fn first_page(&mut self) {
        self.query.page_index = 0;
    }

    pub fn last_page(&mut self) {
        self.query.page_index = self.page.total_pages.saturating_sub(1) as usize;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.page_size = page_size.max(1);
        self.query.page_index = 0;
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.query.toggle_sort(key);
    }

    pub fn set_text_filter(&mut self, value: &str) {
        self.query.set_text_filter(value);
    }

    pub fn set_category_filter(&mut self, value: Option<&str>) {
        self.query.set_category_filter(value);
    }

    /// "Refresh": сброс запроса к значениям по умолчанию и принудительный запрос
    pub fn reset(&mut self) {
        self.query = TableQuery::with_page_size(self.default_page_size);
        self.page = PageResult::default();
        self.page_query = None;
        self.selection.clear();
        self.error = None;
        self.coordinator.invalidate();
    }

    /// После успешного действия: сортировка, фильтры, страница и выбор по умолчанию,
    /// размер страницы сохраняется, запрос уходит даже для того же кортежа
    pub fn reset_after_action(&mut self) {
        let page_size = self.query.page_size;
        self.query = TableQuery::with_page_size(page_size);
        self.selection.clear();
        self.coordinator.invalidate();
    }

    // ============================================================================
    // Выборка
    // ============================================================================

    /// Один проход согласования. Сначала правило сброса страницы:
    /// если оно сработало, проход завершается без запроса.
    pub fn reconcile(&mut self, has_token: bool) -> Option<FetchTicket> {
        if self.reset_rule.observe(&mut self.query) {
            log::debug!("filter changed, page reset to 0");
            return None;
        }
        let ticket = self.coordinator.plan(&self.query, has_token)?;
        self.in_flight = Some(ticket.query.clone());
        Some(ticket)
    }

    /// Применяет ответ. Устаревший ответ не трогает состояние.
    pub fn apply(&mut self, seq: u64, result: Result<PageResult<R>, ApiError>) -> ApplyOutcome {
        if !self.coordinator.complete(seq) {
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(page) => {
                self.page = page;
                self.page_query = self.in_flight.take();
                self.selection.retain_rows(&self.page.rows);
                self.error = None;
                ApplyOutcome::Applied
            }
            Err(err) => {
                self.error = Some(err.user_message("Failed to fetch data"));
                ApplyOutcome::Failed(err)
            }
        }
    }

    /// Параметры запроса для выгрузки: все строки текущего фильтра одним запросом.
    /// Итог страницы берется только если он получен с теми же фильтрами.
    pub fn export_params(&self, category_param: Option<&str>) -> ListParams {
        let total_matches = self.page_query.as_ref().is_some_and(|q| {
            q.text_filter == self.query.text_filter && q.category_filter == self.query.category_filter
        });
        let total = if total_matches { self.page.total_rows } else { 0 };
        let mut query = self.query.clone();
        query.page_index = 0;
        query.page_size = export_limit(total, self.query.page_size) as usize;
        query.to_list_params(category_param)
    }

    // ============================================================================
    // Выбор строк и массовые действия
    // ============================================================================

    pub fn toggle_row(&mut self, id: &str, checked: bool) {
        self.selection.toggle(id, checked);
    }

    pub fn toggle_page(&mut self, checked: bool) {
        self.selection.toggle_all(&self.page.rows, checked);
    }

    pub fn selected_total(&self, value: impl Fn(&R) -> f64) -> f64 {
        self.selection.aggregate(&self.page.rows, value)
    }

    pub fn begin_bulk_action(
        &mut self,
        verb: ActionVerb,
    ) -> Result<BulkActionRequest, ValidationError> {
        let request = BulkActionRequest::from_selection(&self.selection, verb)?;
        if !self.bulk.begin(verb) {
            return Err(ValidationError::new(
                "selection",
                "Another bulk action is in progress",
            ));
        }
        Ok(request)
    }

    /// Завершение массового действия: выбор очищается и таблица
    /// перезагружается с первой страницы при любом исходе.
    pub fn finish_bulk_action(&mut self, success: bool) {
        self.bulk.finish();
        if !success {
            log::debug!("bulk action failed, reloading table");
        }
        self.reset_after_action();
    }

    pub fn finish_row_action(&mut self, success: bool) {
        if success {
            self.reset_after_action();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        amount: f64,
    }

    impl TableRow for Row {
        fn row_id(&self) -> String {
            self.id.clone()
        }
    }

    fn page(ids: &[&str], total: u64, pages: u64) -> PageResult<Row> {
        PageResult {
            rows: ids
                .iter()
                .map(|id| Row {
                    id: id.to_string(),
                    amount: 1.5,
                })
                .collect(),
            total_rows: total,
            total_pages: pages,
        }
    }

    #[test]
    fn initial_pass_fetches_first_page() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(50);
        let ticket = t.reconcile(true).unwrap();
        assert_eq!(ticket.query.page_index, 0);
        assert_eq!(ticket.query.page_size, 50);
        assert!(t.reconcile(true).is_none());
    }

    #[test]
    fn filter_change_on_page_three_takes_two_passes() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        let first = t.reconcile(true).unwrap();
        t.apply(first.seq, Ok(page(&["a"], 100, 10)));
        t.set_page_index(2);
        let third = t.reconcile(true).unwrap();
        t.apply(third.seq, Ok(page(&["c"], 100, 10)));

        t.set_text_filter("alice");
        // первый проход только сбрасывает страницу
        assert!(t.reconcile(true).is_none());
        assert_eq!(t.query().page_index, 0);
        // второй проход уходит с новым фильтром на первую страницу
        let ticket = t.reconcile(true).unwrap();
        assert_eq!(ticket.query.page_index, 0);
        assert_eq!(ticket.query.text_filter.as_deref(), Some("alice"));
        assert!(t.reconcile(true).is_none());
    }

    #[test]
    fn out_of_order_responses_keep_latest() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        let first = t.reconcile(true).unwrap();
        t.set_page_index(1);
        let second = t.reconcile(true).unwrap();

        assert_eq!(t.apply(second.seq, Ok(page(&["p2"], 20, 2))), ApplyOutcome::Applied);
        assert_eq!(t.apply(first.seq, Ok(page(&["p1"], 20, 2))), ApplyOutcome::Stale);
        assert_eq!(t.rows()[0].id, "p2");
        assert!(!t.is_loading());
    }

    #[test]
    fn failure_keeps_previous_rows_and_records_message() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        let first = t.reconcile(true).unwrap();
        t.apply(first.seq, Ok(page(&["a", "b"], 2, 1)));
        t.set_page_size(20);
        let second = t.reconcile(true).unwrap();
        let outcome = t.apply(second.seq, Err(ApiError::Backend("boom".into())));
        assert_eq!(outcome, ApplyOutcome::Failed(ApiError::Backend("boom".into())));
        assert_eq!(t.rows().len(), 2);
        assert_eq!(t.error(), Some("boom"));
    }

    #[test]
    fn no_token_skips_until_signed_in() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        assert!(t.reconcile(false).is_none());
        assert!(t.reconcile(true).is_some());
    }

    #[test]
    fn reset_restores_defaults_and_refetches() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        let first = t.reconcile(true).unwrap();
        t.apply(first.seq, Ok(page(&["a"], 1, 1)));
        t.toggle_sort("amount");
        t.set_category_filter(Some("DEPOSIT"));
        let _ = t.reconcile(true);

        t.reset();
        assert_eq!(t.query(), &TableQuery::with_page_size(10));
        assert!(t.rows().is_empty());
        assert!(t.reconcile(true).is_some());
    }

    #[test]
    fn row_numbers_follow_page() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(50);
        t.set_page_index(2);
        assert_eq!(t.row_number(0), 101);
        assert_eq!(t.row_number(4), 105);
    }

    #[test]
    fn export_requests_all_filtered_rows() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(50);
        assert_eq!(t.export_params(None).get("limit"), Some("50"));
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a"], 340, 7)));
        assert_eq!(t.export_params(None).get("limit"), Some("340"));

        t.set_text_filter("x");
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["x1"], 12, 1)));
        let params = t.export_params(None);
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("limit"), Some("12"));
        assert_eq!(params.get("search"), Some("x"));
    }

    #[test]
    fn export_ignores_total_from_other_filter() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(50);
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a"], 340, 7)));

        t.set_category_filter(Some("DEPOSIT"));
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Err(ApiError::Backend("boom".into())));

        let params = t.export_params(Some("transacionType"));
        assert_eq!(params.get("limit"), Some("50"));
        assert_eq!(params.get("transacionType"), Some("DEPOSIT"));

        // сортировка на итог не влияет
        t.set_category_filter(None);
        t.toggle_sort("amount");
        assert_eq!(t.export_params(None).get("limit"), Some("340"));
    }

    #[test]
    fn row_action_success_resets_and_refetches() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a", "b"], 30, 3)));

        t.toggle_sort("amount");
        t.set_text_filter("x");
        t.set_category_filter(Some("DEPOSIT"));
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a", "b"], 30, 3)));
        t.set_page_index(2);
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a", "b"], 30, 3)));
        t.toggle_row("b", true);

        t.finish_row_action(true);
        assert_eq!(t.query(), &TableQuery::with_page_size(10));
        assert!(t.selection().is_empty());

        let ticket = t.reconcile(true).unwrap();
        assert_eq!(ticket.query, TableQuery::with_page_size(10));
        t.apply(ticket.seq, Ok(page(&["a", "b"], 30, 3)));
        assert!(t.selection().is_empty());
    }

    #[test]
    fn failed_row_action_keeps_state_without_refetch() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a", "b"], 2, 1)));
        t.set_text_filter("x");
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a", "b"], 2, 1)));
        t.toggle_row("a", true);

        t.finish_row_action(false);
        assert_eq!(t.query().text_filter.as_deref(), Some("x"));
        assert!(!t.selection().is_empty());
        assert!(t.reconcile(true).is_none());
    }

    #[test]
    fn bulk_action_lifecycle() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a", "b", "c"], 3, 1)));

        assert!(t.begin_bulk_action(ActionVerb::Approve).is_err());
        t.toggle_row("a", true);
        t.toggle_row("c", true);
        assert_eq!(t.selected_total(|r| r.amount), 3.0);

        let req = t.begin_bulk_action(ActionVerb::Approve).unwrap();
        assert_eq!(req.ids.len(), 2);
        assert!(t.begin_bulk_action(ActionVerb::Reject).is_err());

        t.finish_bulk_action(true);
        assert!(t.selection().is_empty());
        assert_eq!(t.bulk_in_flight(), None);
        assert!(t.reconcile(true).is_some());
    }

    #[test]
    fn failed_bulk_action_still_clears_and_reloads() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a"], 1, 1)));
        t.toggle_sort("amount");
        t.set_text_filter("a");
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a"], 1, 1)));
        t.toggle_page(true);
        t.begin_bulk_action(ActionVerb::Reject).unwrap();
        t.finish_bulk_action(false);
        assert!(t.selection().is_empty());
        assert_eq!(t.bulk_in_flight(), None);
        assert_eq!(t.query(), &TableQuery::with_page_size(10));
        assert!(t.reconcile(true).is_some());
    }

    #[test]
    fn paging_bounds() {
        let mut t: RemoteTableController<Row> = RemoteTableController::new(10);
        let ticket = t.reconcile(true).unwrap();
        t.apply(ticket.seq, Ok(page(&["a"], 25, 3)));
        assert!(!t.can_go_previous());
        t.last_page();
        assert_eq!(t.query().page_index, 2);
        t.next_page();
        assert_eq!(t.query().page_index, 2);
        t.first_page();
        t.previous_page();
        assert_eq!(t.query().page_index, 0);
    }
}
