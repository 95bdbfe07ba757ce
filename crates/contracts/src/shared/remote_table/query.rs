use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DSC")]
    Desc,
}

impl SortDirection {
    /// Значение параметра `sortType`
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DSC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Текущий кортеж запроса таблицы.
/// `page_index` начинается с 0, на backend уходит `page_index + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableQuery {
    pub page_index: usize,
    pub page_size: usize,
    pub sort: Option<SortSpec>,
    pub text_filter: Option<String>,
    pub category_filter: Option<String>,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl TableQuery {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            sort: None,
            text_filter: None,
            category_filter: None,
        }
    }

    /// Цикл сортировки по колонке: нет → ASC → DSC → нет.
    /// Клик по другой колонке начинает с ASC.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some(spec) if spec.key == key => match spec.direction {
                SortDirection::Asc => Some(SortSpec {
                    key: spec.key,
                    direction: SortDirection::Desc,
                }),
                SortDirection::Desc => None,
            },
            _ => Some(SortSpec {
                key: key.to_string(),
                direction: SortDirection::Asc,
            }),
        };
    }

    pub fn set_text_filter(&mut self, value: &str) {
        self.text_filter = normalize_filter(value);
    }

    pub fn set_category_filter(&mut self, value: Option<&str>) {
        self.category_filter = value.and_then(normalize_filter);
    }

    /// Параметры запроса списка. `category_param` задается страницей
    /// (`transacionType`, `rewardStatus`, `transacionStatus`).
    pub fn to_list_params(&self, category_param: Option<&str>) -> ListParams {
        let mut params = ListParams::new(self.page_index + 1, self.page_size);
        if let Some(sort) = &self.sort {
            params.insert("sortKey", &sort.key);
            params.insert("sortType", sort.direction.as_param());
        }
        if let Some(search) = &self.text_filter {
            params.insert("search", search);
        }
        if let (Some(name), Some(value)) = (category_param, &self.category_filter) {
            params.insert(name, value);
        }
        params
    }
}

pub(crate) fn normalize_filter(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Query-параметры списочного запроса
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListParams(BTreeMap<String, String>);

impl ListParams {
    pub fn new(page: usize, limit: usize) -> Self {
        let mut params = Self::default();
        params.insert("page", page.to_string());
        params.insert("limit", limit.to_string());
        params
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(&self.0).unwrap_or_else(|e| {
            log::error!("failed to encode list params: {}", e);
            String::new()
        })
    }

    /// `path?query`, с учетом того, что в path уже может быть `?`
    pub fn append_to(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_string()
        } else if path.contains('?') {
            format!("{}&{}", path, query)
        } else {
            format!("{}?{}", path, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_cycles_through_directions() {
        let mut q = TableQuery::default();
        q.toggle_sort("amount");
        assert_eq!(q.sort.as_ref().map(|s| s.direction), Some(SortDirection::Asc));
        q.toggle_sort("amount");
        assert_eq!(q.sort.as_ref().map(|s| s.direction), Some(SortDirection::Desc));
        q.toggle_sort("amount");
        assert!(q.sort.is_none());

        q.toggle_sort("amount");
        q.toggle_sort("createdAt");
        let sort = q.sort.unwrap();
        assert_eq!(sort.key, "createdAt");
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn blank_filters_are_absent() {
        let mut q = TableQuery::default();
        q.set_text_filter("   ");
        q.set_category_filter(Some(""));
        assert_eq!(q.text_filter, None);
        assert_eq!(q.category_filter, None);
        q.set_text_filter(" alice ");
        assert_eq!(q.text_filter.as_deref(), Some("alice"));
    }

    #[test]
    fn params_are_one_based_and_skip_empty_values() {
        let mut q = TableQuery::with_page_size(20);
        q.page_index = 2;
        let params = q.to_list_params(Some("transacionType"));
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(params.get("limit"), Some("20"));
        assert_eq!(params.get("sortKey"), None);
        assert_eq!(params.get("search"), None);
        assert_eq!(params.get("transacionType"), None);

        q.toggle_sort("amount");
        q.toggle_sort("amount");
        q.set_text_filter("bob");
        q.set_category_filter(Some("DEPOSIT"));
        let params = q.to_list_params(Some("transacionType"));
        assert_eq!(params.get("sortKey"), Some("amount"));
        assert_eq!(params.get("sortType"), Some("DSC"));
        assert_eq!(params.get("search"), Some("bob"));
        assert_eq!(params.get("transacionType"), Some("DEPOSIT"));
    }

    #[test]
    fn category_without_param_name_is_not_sent() {
        let mut q = TableQuery::default();
        q.set_category_filter(Some("APPROVE"));
        assert_eq!(q.to_list_params(None).get("APPROVE"), None);
    }

    #[test]
    fn query_string_appends_to_path() {
        let params = ListParams::new(1, 10);
        assert_eq!(params.append_to("admin/listUser"), "admin/listUser?limit=10&page=1");
        assert_eq!(
            params.append_to("admin/available-to-burn?status=burned"),
            "admin/available-to-burn?status=burned&limit=10&page=1"
        );
    }
}
