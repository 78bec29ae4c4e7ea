//! Word-frequency aggregation for the word cloud

use indexmap::IndexMap;

use crate::model::OutletAnalysis;

/// Sum the word counts of every outlet into one combined table. First
/// occurrence wins the slot, so words appear in the order the payload first
/// mentions them.
pub fn combined_frequencies(outlets: &[OutletAnalysis]) -> IndexMap<String, u64> {
    let mut combined: IndexMap<String, u64> = IndexMap::new();
    for outlet in outlets {
        for (word, count) in &outlet.word_frequencies {
            *combined.entry(word.clone()).or_insert(0) += count;
        }
    }
    combined
}

/// Visual size of a word, in points.
pub fn font_size(count: u64) -> f32 {
    (count as f32).sqrt() * 10.0 + 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OutletMetrics;
    use indexmap::indexmap;

    fn outlet(source: &str, word_frequencies: IndexMap<String, u64>) -> OutletAnalysis {
        OutletAnalysis {
            source: source.to_string(),
            bias_score: 0.0,
            word_frequencies,
            metrics: OutletMetrics {
                factuality: 0.9,
                source_diversity: 0.8,
                topic_balance: 0.8,
            },
            top_topics: Vec::new(),
        }
    }

    #[test]
    fn sums_counts_across_outlets() {
        let outlets = [
            outlet("A", indexmap! {"ord".to_string() => 3}),
            outlet("B", indexmap! {"ord".to_string() => 2, "nyt".to_string() => 1}),
        ];

        let combined = combined_frequencies(&outlets);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined["ord"], 5);
        assert_eq!(combined["nyt"], 1);
    }

    #[test]
    fn first_occurrence_decides_order() {
        let outlets = [
            outlet("A", indexmap! {"klima".to_string() => 1}),
            outlet("B", indexmap! {"regering".to_string() => 4, "klima".to_string() => 2}),
        ];

        let words: Vec<&str> = combined_frequencies(&outlets)
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(words, ["klima", "regering"]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(combined_frequencies(&[]).is_empty());
    }

    #[test]
    fn font_size_scale() {
        assert_eq!(font_size(0), 10.0);
        assert_eq!(font_size(1), 20.0);
        assert_eq!(font_size(4), 30.0);
        assert!(font_size(9) > font_size(4));
    }
}
