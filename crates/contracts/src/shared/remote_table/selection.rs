use std::collections::BTreeSet;

/// Строка таблицы, у которой есть идентификатор
pub trait TableRow {
    fn row_id(&self) -> String;
}

/// Состояние чекбокса в заголовке для текущей страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCheckState {
    None,
    Partial,
    All,
}

/// Выбранные строки (по id)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Выбрать/снять все строки текущей страницы
    pub fn toggle_all<R: TableRow>(&mut self, rows: &[R], checked: bool) {
        for row in rows {
            self.toggle(&row.row_id(), checked);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Оставляет только id, которые есть среди `rows`
    pub fn retain_rows<R: TableRow>(&mut self, rows: &[R]) {
        let present: BTreeSet<String> = rows.iter().map(TableRow::row_id).collect();
        self.ids.retain(|id| present.contains(id));
    }

    pub fn selected<'a, R: TableRow>(&self, rows: &'a [R]) -> Vec<&'a R> {
        rows.iter().filter(|r| self.contains(&r.row_id())).collect()
    }

    /// Сумма по выбранным строкам (например, сумма выводов)
    pub fn aggregate<R: TableRow>(&self, rows: &[R], value: impl Fn(&R) -> f64) -> f64 {
        self.selected(rows).into_iter().map(value).sum()
    }

    pub fn page_state<R: TableRow>(&self, rows: &[R]) -> PageCheckState {
        let selected = rows.iter().filter(|r| self.contains(&r.row_id())).count();
        if selected == 0 {
            PageCheckState::None
        } else if selected == rows.len() {
            PageCheckState::All
        } else {
            PageCheckState::Partial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl TableRow for Row {
        fn row_id(&self) -> String {
            self.0.to_string()
        }
    }

    fn rows() -> Vec<Row> {
        vec![Row("a", 10.0), Row("b", 2.5), Row("c", 1.0)]
    }

    #[test]
    fn toggle_and_aggregate() {
        let rows = rows();
        let mut sel = SelectionSet::default();
        sel.toggle("a", true);
        sel.toggle("c", true);
        assert_eq!(sel.aggregate(&rows, |r| r.1), 11.0);
        assert_eq!(sel.page_state(&rows), PageCheckState::Partial);
        sel.toggle("a", false);
        assert_eq!(sel.ids(), vec!["c".to_string()]);
    }

    #[test]
    fn toggle_all_and_clear() {
        let rows = rows();
        let mut sel = SelectionSet::default();
        sel.toggle_all(&rows, true);
        assert_eq!(sel.page_state(&rows), PageCheckState::All);
        sel.toggle_all(&rows, false);
        assert!(sel.is_empty());
        sel.toggle("b", true);
        sel.clear();
        assert_eq!(sel.page_state(&rows), PageCheckState::None);
    }

    #[test]
    fn retain_drops_rows_not_on_page() {
        let mut sel = SelectionSet::default();
        sel.toggle("a", true);
        sel.toggle("zzz", true);
        sel.retain_rows(&rows());
        assert_eq!(sel.len(), 1);
        assert!(sel.contains("a"));
    }
}
