use super::query::TableQuery;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FilterSnapshot {
    text: Option<String>,
    category: Option<String>,
}

impl FilterSnapshot {
    fn of(query: &TableQuery) -> Self {
        Self {
            text: query.text_filter.clone(),
            category: query.category_filter.clone(),
        }
    }
}

/// Возврат на первую страницу при смене фильтра.
///
/// Хранит фильтры, увиденные на прошлом проходе. Если фильтр изменился,
/// а страница не первая, страница сбрасывается в 0 и проход должен
/// завершиться без запроса: запрос уйдет на следующем проходе уже с page 0.
#[derive(Debug, Clone, Default)]
pub struct FilterResetRule {
    previous: FilterSnapshot,
}

impl FilterResetRule {
    pub fn new(query: &TableQuery) -> Self {
        Self {
            previous: FilterSnapshot::of(query),
        }
    }

    /// Возвращает `true`, если страница была сброшена.
    pub fn observe(&mut self, query: &mut TableQuery) -> bool {
        let current = FilterSnapshot::of(query);
        let changed = current != self.previous;
        self.previous = current;
        if changed && query.page_index != 0 {
            query.page_index = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_on_later_page_resets_to_first() {
        let mut q = TableQuery::default();
        let mut rule = FilterResetRule::new(&q);
        q.page_index = 3;
        assert!(!rule.observe(&mut q));

        q.set_text_filter("abc");
        assert!(rule.observe(&mut q));
        assert_eq!(q.page_index, 0);

        // второй проход с тем же фильтром ничего не трогает
        assert!(!rule.observe(&mut q));
    }

    #[test]
    fn filter_change_on_first_page_is_not_a_reset() {
        let mut q = TableQuery::default();
        let mut rule = FilterResetRule::new(&q);
        q.set_text_filter("abc");
        assert!(!rule.observe(&mut q));
        assert_eq!(q.page_index, 0);
    }

    #[test]
    fn category_change_also_resets() {
        let mut q = TableQuery::default();
        let mut rule = FilterResetRule::new(&q);
        q.page_index = 1;
        q.set_category_filter(Some("REJECT"));
        assert!(rule.observe(&mut q));
        assert_eq!(q.page_index, 0);
    }
}
