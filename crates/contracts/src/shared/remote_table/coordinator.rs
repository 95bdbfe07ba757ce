use super::query::TableQuery;
use crate::shared::api::{ListPage, PageMeta};

/// Разрешение на запрос страницы. `seq` нужен, чтобы отличить
/// ответ на последний запрос от опоздавших ответов на старые.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: TableQuery,
}

/// Одна страница данных вместе с итогами
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<R> {
    pub rows: Vec<R>,
    pub total_rows: u64,
    pub total_pages: u64,
}

impl<R> Default for PageResult<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_rows: 0,
            total_pages: 0,
        }
    }
}

impl<R> PageResult<R> {
    /// Без `metadata` итог считается по самим строкам
    pub fn from_list_page(page: ListPage<R>) -> Self {
        let ListPage { rows, meta, .. } = page;
        match meta {
            Some(PageMeta { total, total_page }) => Self {
                rows,
                total_rows: total,
                total_pages: total_page,
            },
            None => {
                let count = rows.len() as u64;
                Self {
                    rows,
                    total_rows: count,
                    total_pages: if count > 0 { 1 } else { 0 },
                }
            }
        }
    }
}

/// Решает, нужен ли запрос, и отсекает устаревшие ответы
#[derive(Debug, Clone, Default)]
pub struct FetchCoordinator {
    last_issued: Option<TableQuery>,
    latest_seq: u64,
    loading: bool,
}

impl FetchCoordinator {
    /// Выдает билет только если есть токен и кортеж отличается от последнего выданного.
    pub fn plan(&mut self, query: &TableQuery, has_token: bool) -> Option<FetchTicket> {
        if !has_token {
            log::debug!("fetch skipped: no session token");
            return None;
        }
        if self.last_issued.as_ref() == Some(query) {
            return None;
        }
        self.latest_seq += 1;
        self.last_issued = Some(query.clone());
        self.loading = true;
        Some(FetchTicket {
            seq: self.latest_seq,
            query: query.clone(),
        })
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Отмечает завершение запроса. `false` означает, что ответ устарел и его надо выбросить.
    pub fn complete(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            log::debug!("discarding stale response #{} (latest #{})", seq, self.latest_seq);
            return false;
        }
        self.loading = false;
        true
    }

    /// Следующий `plan` выдаст билет даже для того же кортежа
    pub fn invalidate(&mut self) {
        self.last_issued = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_tuple_is_fetched_once() {
        let mut c = FetchCoordinator::default();
        let q = TableQuery::default();
        assert!(c.plan(&q, true).is_some());
        assert!(c.plan(&q, true).is_none());

        let mut next = q.clone();
        next.page_index = 1;
        assert!(c.plan(&next, true).is_some());
    }

    #[test]
    fn no_token_means_no_fetch_and_no_record() {
        let mut c = FetchCoordinator::default();
        let q = TableQuery::default();
        assert!(c.plan(&q, false).is_none());
        assert!(!c.is_loading());
        assert!(c.plan(&q, true).is_some());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut c = FetchCoordinator::default();
        let mut q = TableQuery::default();
        let first = c.plan(&q, true).unwrap();
        q.page_index = 1;
        let second = c.plan(&q, true).unwrap();

        assert!(!c.complete(first.seq));
        assert!(c.is_loading());
        assert!(c.complete(second.seq));
        assert!(!c.is_loading());
    }

    #[test]
    fn invalidate_forces_refetch() {
        let mut c = FetchCoordinator::default();
        let q = TableQuery::default();
        c.plan(&q, true);
        c.invalidate();
        assert!(c.plan(&q, true).is_some());
    }

    #[test]
    fn page_result_without_metadata() {
        let page = ListPage {
            rows: vec![1, 2, 3],
            meta: None,
            block: serde_json::Value::Null,
        };
        let result = PageResult::from_list_page(page);
        assert_eq!(result.total_rows, 3);
        assert_eq!(result.total_pages, 1);

        let empty: PageResult<i32> = PageResult::from_list_page(ListPage {
            rows: vec![],
            meta: None,
            block: serde_json::Value::Null,
        });
        assert_eq!(empty.total_pages, 0);
    }
}
