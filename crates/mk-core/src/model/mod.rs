//! Payload types for the statistics API
//!
//! All maps are `IndexMap` so the backend's insertion order survives
//! deserialization; the category chips and topic bars render in that order.
//! Everything here is read-only after a fetch completes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-outlet statistics, the values of `StatsSnapshot::media_stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaStats {
    pub description: String,
    pub category: String,

    /// Signed leaning score, negative = left, positive = right. The backend
    /// guarantees [-1, 1]; out-of-range values render off-scale.
    pub political_bias: f64,
    pub reliability_score: f64,
    pub source_diversity: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fact_checking: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparency: Option<f64>,

    /// Topic name -> fractional share of coverage, in payload order.
    pub topic_coverage: IndexMap<String, f64>,
}

impl MediaStats {
    /// Sum of the topic shares. Expected to be close to 1.0 but not
    /// guaranteed by the backend.
    pub fn topic_share_sum(&self) -> f64 {
        self.topic_coverage.values().sum()
    }
}

/// Response body of `GET /api/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Outlet display name -> statistics, in payload order.
    pub media_stats: IndexMap<String, MediaStats>,

    /// Only the keys matter; the values are backend-internal.
    #[serde(default)]
    pub categories: IndexMap<String, serde_json::Value>,
}

/// Allowed drift of a topic-coverage sum before it is reported.
pub const TOPIC_SUM_TOLERANCE: f64 = 0.05;

impl StatsSnapshot {
    /// Collect backend contract breaches: leaning scores outside [-1, 1] and
    /// topic shares that do not add up to ~1.0. The UI renders the data
    /// regardless; the breaches are only surfaced in the log.
    pub fn contract_breaches(&self) -> Vec<String> {
        let mut breaches = Vec::new();
        for (outlet, stats) in &self.media_stats {
            if !(-1.0..=1.0).contains(&stats.political_bias) {
                breaches.push(format!(
                    "{outlet}: political_bias {} outside [-1, 1]",
                    stats.political_bias
                ));
            }
            let sum = stats.topic_share_sum();
            if !stats.topic_coverage.is_empty() && (sum - 1.0).abs() > TOPIC_SUM_TOLERANCE {
                breaches.push(format!("{outlet}: topic_coverage sums to {sum:.3}"));
            }
        }
        breaches
    }

    /// Log every contract breach at warn level. Never fails.
    pub fn validate(&self) {
        for breach in self.contract_breaches() {
            tracing::warn!("stats payload: {breach}");
        }
    }
}

/// Sentiment block of an article analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: String,
    pub score: f64,
}

/// Response body of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    pub title: String,
    pub sentiment: Sentiment,
    pub sources_count: u32,
    pub keywords: Vec<String>,
    pub summary: String,
}

/// Named metrics of the legacy per-outlet analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutletMetrics {
    pub factuality: f64,
    pub source_diversity: f64,
    pub topic_balance: f64,
}

/// One element of the legacy `GET /analyze/all` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutletAnalysis {
    /// Outlet display name.
    pub source: String,
    pub bias_score: f64,
    /// Word -> occurrence count, in payload order.
    pub word_frequencies: IndexMap<String, u64>,
    pub metrics: OutletMetrics,
    pub top_topics: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_fixture() -> StatsSnapshot {
        // Trimmed /api/stats body; `fact_checking` present for one outlet
        // only, plus a field this client does not know about.
        let body = r#"{
            "media_stats": {
                "Politiken": {
                    "political_bias": -0.4,
                    "reliability_score": 0.87,
                    "source_diversity": 0.83,
                    "fact_checking": 0.88,
                    "topic_coverage": {"politik": 0.25, "kultur": 0.25, "samfund": 0.5},
                    "category": "Landsdækkende",
                    "description": "Socialliberal avis"
                },
                "DR": {
                    "political_bias": -0.1,
                    "reliability_score": 0.9,
                    "source_diversity": 0.88,
                    "topic_coverage": {"politik": 0.5, "samfund": 0.5},
                    "category": "Public Service",
                    "description": "Public service medie",
                    "audience_reach": 0.92
                }
            },
            "categories": {"Landsdækkende": ["Politiken"], "Public Service": ["DR"]}
        }"#;
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn decodes_stats_snapshot() {
        let snapshot = snapshot_fixture();

        assert_eq!(snapshot.media_stats.len(), 2);
        let politiken = &snapshot.media_stats["Politiken"];
        assert_eq!(politiken.category, "Landsdækkende");
        assert_eq!(politiken.fact_checking, Some(0.88));
        assert_eq!(politiken.transparency, None);
        assert_eq!(snapshot.media_stats["DR"].fact_checking, None);
    }

    #[test]
    fn payload_order_is_preserved() {
        let snapshot = snapshot_fixture();

        let outlets: Vec<&str> = snapshot.media_stats.keys().map(String::as_str).collect();
        assert_eq!(outlets, ["Politiken", "DR"]);

        let topics: Vec<&str> = snapshot.media_stats["Politiken"]
            .topic_coverage
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(topics, ["politik", "kultur", "samfund"]);

        let categories: Vec<&str> = snapshot.categories.keys().map(String::as_str).collect();
        assert_eq!(categories, ["Landsdækkende", "Public Service"]);
    }

    #[test]
    fn well_formed_snapshot_has_no_breaches() {
        assert!(snapshot_fixture().contract_breaches().is_empty());
    }

    #[test]
    fn out_of_range_bias_is_reported() {
        let mut snapshot = snapshot_fixture();
        snapshot.media_stats["DR"].political_bias = 1.4;

        let breaches = snapshot.contract_breaches();
        assert_eq!(breaches.len(), 1);
        assert!(breaches[0].contains("DR"));
        assert!(breaches[0].contains("political_bias"));
    }

    #[test]
    fn non_normalized_topic_coverage_is_reported() {
        let mut snapshot = snapshot_fixture();
        snapshot.media_stats["Politiken"]
            .topic_coverage
            .insert("klima".to_string(), 0.4);

        let breaches = snapshot.contract_breaches();
        assert_eq!(breaches.len(), 1);
        assert!(breaches[0].contains("topic_coverage"));
    }

    #[test]
    fn decodes_outlet_analysis() {
        let body = r#"[{
            "source": "DR",
            "bias_score": -0.2,
            "word_frequencies": {"regering": 14, "klima": 9},
            "metrics": {"factuality": 0.95, "source_diversity": 0.88, "topic_balance": 0.85},
            "top_topics": ["Politik", "Kultur"]
        }]"#;
        let analyses: Vec<OutletAnalysis> = serde_json::from_str(body).unwrap();

        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].source, "DR");
        assert_eq!(analyses[0].word_frequencies["regering"], 14);
        assert_eq!(analyses[0].metrics.topic_balance, 0.85);
    }

    #[test]
    fn decodes_article_analysis() {
        let body = r#"{
            "title": "Ny klimaaftale på plads",
            "sentiment": {"label": "positiv", "score": 0.6},
            "sources_count": 4,
            "keywords": ["klima", "aftale"],
            "summary": "Et bredt flertal står bag aftalen."
        }"#;
        let analysis: ArticleAnalysis = serde_json::from_str(body).unwrap();

        assert_eq!(analysis.sentiment.label, "positiv");
        assert_eq!(analysis.sources_count, 4);
        assert_eq!(analysis.keywords.len(), 2);
    }
}
