use crate::domain::a007_burning::aggregate::BurnStats;
use crate::shared::format::{format_atmc, format_number_with_decimals};

/// Показатели главной страницы. `None` пока данные не пришли или запрос упал.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverviewStats {
    pub total_users: Option<u64>,
    pub total_pool_ids: Option<u64>,
    pub burn: Option<BurnStats>,
}

/// Карточка показателя. `target` это ключ вкладки, куда ведет клик.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub hint: &'static str,
    pub target: &'static str,
}

const PLACEHOLDER: &str = "-";

impl OverviewStats {
    pub fn cards(&self) -> Vec<StatCard> {
        let count = |v: Option<u64>| {
            v.map(|n| format_number_with_decimals(n as f64, 0))
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        };
        let coins = |v: Option<f64>| v.map(format_atmc).unwrap_or_else(|| PLACEHOLDER.to_string());

        vec![
            StatCard {
                title: "Total Users",
                value: count(self.total_users),
                hint: "Registered accounts",
                target: "a001_user",
            },
            StatCard {
                title: "Total IDs in Pool",
                value: count(self.total_pool_ids),
                hint: "Pool participants",
                target: "a002_pool_user",
            },
            StatCard {
                title: "Total Coins Burned",
                value: coins(self.burn.map(|b| b.total_burned)),
                hint: "All time",
                target: "a007_burning",
            },
            StatCard {
                title: "Coins Burned Today",
                value: coins(self.burn.map(|b| b.today_burned)),
                hint: "Since midnight",
                target: "a007_burning",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_show_placeholder_until_loaded() {
        let cards = OverviewStats::default().cards();
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.value == "-"));
    }

    #[test]
    fn cards_format_values() {
        let stats = OverviewStats {
            total_users: Some(1247),
            total_pool_ids: Some(456),
            burn: Some(BurnStats {
                today_burned: 10.0,
                total_burned: 75000.5,
            }),
        };
        let cards = stats.cards();
        assert_eq!(cards[0].value, "1,247");
        assert_eq!(cards[2].value, "75,000.50 ATMC");
        assert_eq!(cards[3].target, "a007_burning");
    }
}
