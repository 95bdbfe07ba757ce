/// Подпись и вариант бейджа (`primary`, `success`, `warning`, `error`, `neutral`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub variant: &'static str,
}

impl StatusBadge {
    pub const fn new(label: &'static str, variant: &'static str) -> Self {
        Self { label, variant }
    }

    /// Ищет значение в таблице `(значение, бейдж)`; неизвестные значения нейтральные
    pub fn lookup(table: &[(&str, StatusBadge)], value: &str) -> StatusBadge {
        table
            .iter()
            .find(|(key, _)| *key == value)
            .map(|(_, badge)| *badge)
            .unwrap_or(StatusBadge::new("Unknown", "neutral"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_is_neutral() {
        let table = [("ACTIVE", StatusBadge::new("Active", "success"))];
        assert_eq!(StatusBadge::lookup(&table, "ACTIVE").label, "Active");
        assert_eq!(StatusBadge::lookup(&table, "???").variant, "neutral");
    }
}
