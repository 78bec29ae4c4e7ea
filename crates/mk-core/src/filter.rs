//! Category filtering for the outlet overview

use indexmap::IndexMap;

use crate::model::{MediaStats, StatsSnapshot};

/// Sentinel chip that selects every outlet.
pub const ALL_CATEGORIES: &str = "Alle";

/// The active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryChoice {
    #[default]
    All,
    Only(String),
}

impl CategoryChoice {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryChoice::All
        } else {
            CategoryChoice::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryChoice::All => ALL_CATEGORIES,
            CategoryChoice::Only(category) => category,
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryChoice::All => true,
            CategoryChoice::Only(wanted) => wanted == category,
        }
    }
}

/// Chip labels for the filter row: the "Alle" sentinel followed by the
/// payload's category keys in payload order.
pub fn category_options(snapshot: &StatsSnapshot) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(snapshot.categories.keys().cloned())
        .collect()
}

/// Outlets passing the filter, in original key order. "Alle" is the identity
/// filter; a category matching nothing yields an empty list, never an error.
pub fn filter_outlets<'a>(
    media_stats: &'a IndexMap<String, MediaStats>,
    choice: &CategoryChoice,
) -> Vec<(&'a str, &'a MediaStats)> {
    media_stats
        .iter()
        .filter(|(_, stats)| choice.matches(&stats.category))
        .map(|(outlet, stats)| (outlet.as_str(), stats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn stats(category: &str) -> MediaStats {
        MediaStats {
            description: String::new(),
            category: category.to_string(),
            political_bias: 0.0,
            reliability_score: 0.5,
            source_diversity: 0.5,
            fact_checking: None,
            transparency: None,
            topic_coverage: IndexMap::new(),
        }
    }

    fn outlets() -> IndexMap<String, MediaStats> {
        indexmap! {
            "Politiken".to_string() => stats("Landsdækkende"),
            "DR".to_string() => stats("Public Service"),
            "Berlingske".to_string() => stats("Landsdækkende"),
        }
    }

    #[test]
    fn all_is_the_identity_filter() {
        let media_stats = outlets();
        let filtered = filter_outlets(&media_stats, &CategoryChoice::All);

        let names: Vec<&str> = filtered.iter().map(|(outlet, _)| *outlet).collect();
        assert_eq!(names, ["Politiken", "DR", "Berlingske"]);
    }

    #[test]
    fn category_filter_keeps_only_matches_in_order() {
        let media_stats = outlets();
        let choice = CategoryChoice::Only("Landsdækkende".to_string());
        let filtered = filter_outlets(&media_stats, &choice);

        let names: Vec<&str> = filtered.iter().map(|(outlet, _)| *outlet).collect();
        assert_eq!(names, ["Politiken", "Berlingske"]);
    }

    #[test]
    fn unmatched_category_yields_empty_result() {
        let media_stats = outlets();
        let choice = CategoryChoice::Only("Tabloid".to_string());
        assert!(filter_outlets(&media_stats, &choice).is_empty());
    }

    #[test]
    fn options_start_with_the_sentinel() {
        let snapshot = StatsSnapshot {
            media_stats: outlets(),
            categories: indexmap! {
                "Landsdækkende".to_string() => serde_json::Value::Null,
                "Public Service".to_string() => serde_json::Value::Null,
            },
        };

        assert_eq!(
            category_options(&snapshot),
            ["Alle", "Landsdækkende", "Public Service"]
        );
    }

    #[test]
    fn label_round_trips() {
        assert_eq!(CategoryChoice::from_label("Alle"), CategoryChoice::All);
        let choice = CategoryChoice::from_label("Tabloid");
        assert_eq!(choice, CategoryChoice::Only("Tabloid".to_string()));
        assert_eq!(choice.label(), "Tabloid");
    }
}
