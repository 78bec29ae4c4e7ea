//! Embedded demo dataset
//!
//! Lets the dashboard run without the statistics backend (`--demo`). The
//! outlets and numbers mirror the original deployment's catalogue of Danish
//! media.

use indexmap::IndexMap;

use mk_core::data::MediaDataSource;
use mk_core::model::{OutletMetrics, Sentiment};
use mk_core::{ArticleAnalysis, MediaStats, OutletAnalysis, StatsSnapshot};

pub struct DemoSource {
    snapshot: StatsSnapshot,
    analyses: Vec<OutletAnalysis>,
}

fn media(
    description: &str,
    category: &str,
    political_bias: f64,
    reliability_score: f64,
    source_diversity: f64,
    fact_checking: f64,
    transparency: f64,
    topics: &[(&str, f64)],
) -> MediaStats {
    MediaStats {
        description: description.to_string(),
        category: category.to_string(),
        political_bias,
        reliability_score,
        source_diversity,
        fact_checking: Some(fact_checking),
        transparency: Some(transparency),
        topic_coverage: topics
            .iter()
            .map(|(topic, share)| (topic.to_string(), *share))
            .collect(),
    }
}

fn analysis(
    source: &str,
    bias_score: f64,
    metrics: (f64, f64, f64),
    words: &[(&str, u64)],
    top_topics: &[&str],
) -> OutletAnalysis {
    let (factuality, source_diversity, topic_balance) = metrics;
    OutletAnalysis {
        source: source.to_string(),
        bias_score,
        word_frequencies: words
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect(),
        metrics: OutletMetrics {
            factuality,
            source_diversity,
            topic_balance,
        },
        top_topics: top_topics.iter().map(|t| t.to_string()).collect(),
    }
}

fn demo_snapshot() -> StatsSnapshot {
    let mut media_stats = IndexMap::new();
    media_stats.insert(
        "Berlingske".to_string(),
        media(
            "Konservativ-liberal avis med fokus på politik, erhverv og kultur",
            "Landsdækkende",
            0.3,
            0.88,
            0.85,
            0.87,
            0.86,
            &[
                ("politik", 0.30),
                ("økonomi", 0.25),
                ("kultur", 0.15),
                ("udland", 0.15),
                ("samfund", 0.15),
            ],
        ),
    );
    media_stats.insert(
        "Politiken".to_string(),
        media(
            "Socialliberal avis med fokus på kultur, samfund og politik",
            "Landsdækkende",
            -0.4,
            0.87,
            0.83,
            0.88,
            0.85,
            &[
                ("politik", 0.25),
                ("kultur", 0.25),
                ("samfund", 0.20),
                ("udland", 0.15),
                ("klima", 0.15),
            ],
        ),
    );
    media_stats.insert(
        "Information".to_string(),
        media(
            "Venstreorienteret nicheavis med fokus på dybdegående analyser",
            "Landsdækkende",
            -0.6,
            0.85,
            0.82,
            0.86,
            0.88,
            &[
                ("samfund", 0.30),
                ("klima", 0.20),
                ("kultur", 0.20),
                ("udland", 0.15),
                ("politik", 0.15),
            ],
        ),
    );
    media_stats.insert(
        "Kristeligt Dagblad".to_string(),
        media(
            "Værdiorienteret avis med fokus på religion, etik og eksistens",
            "Landsdækkende",
            0.1,
            0.89,
            0.84,
            0.89,
            0.87,
            &[
                ("religion", 0.30),
                ("etik", 0.25),
                ("samfund", 0.20),
                ("kultur", 0.15),
                ("udland", 0.10),
            ],
        ),
    );
    media_stats.insert(
        "Jyllands-Posten".to_string(),
        media(
            "Liberal-konservativ avis med fokus på politik og erhverv",
            "Landsdækkende",
            0.2,
            0.86,
            0.85,
            0.85,
            0.84,
            &[
                ("politik", 0.25),
                ("økonomi", 0.25),
                ("udland", 0.20),
                ("samfund", 0.15),
                ("kultur", 0.15),
            ],
        ),
    );
    media_stats.insert(
        "DR".to_string(),
        media(
            "Public service medie med bred dækning af alle samfundsområder",
            "Public Service",
            -0.1,
            0.90,
            0.88,
            0.91,
            0.89,
            &[
                ("politik", 0.20),
                ("samfund", 0.20),
                ("kultur", 0.20),
                ("udland", 0.20),
                ("regional", 0.20),
            ],
        ),
    );
    media_stats.insert(
        "TV2".to_string(),
        media(
            "Kommercielt public service medie med fokus på nyheder og underholdning",
            "Public Service",
            0.0,
            0.88,
            0.86,
            0.87,
            0.86,
            &[
                ("politik", 0.25),
                ("samfund", 0.25),
                ("regional", 0.20),
                ("sport", 0.15),
                ("underholdning", 0.15),
            ],
        ),
    );
    media_stats.insert(
        "BT".to_string(),
        media(
            "Tabloidavis med fokus på underholdning, sport og breaking news",
            "Tabloid",
            0.2,
            0.75,
            0.72,
            0.76,
            0.74,
            &[
                ("underholdning", 0.30),
                ("sport", 0.25),
                ("krimi", 0.20),
                ("samfund", 0.15),
                ("politik", 0.10),
            ],
        ),
    );
    media_stats.insert(
        "Ekstra Bladet".to_string(),
        media(
            "Tabloidavis kendt for undersøgende journalistik og underholdning",
            "Tabloid",
            -0.2,
            0.72,
            0.70,
            0.73,
            0.71,
            &[
                ("underholdning", 0.35),
                ("krimi", 0.25),
                ("sport", 0.20),
                ("politik", 0.10),
                ("samfund", 0.10),
            ],
        ),
    );
    media_stats.insert(
        "Altinget".to_string(),
        media(
            "Politisk nichemedie med fokus på Christiansborg og EU",
            "Niche",
            0.0,
            0.92,
            0.90,
            0.93,
            0.91,
            &[
                ("politik", 0.60),
                ("samfund", 0.20),
                ("eu", 0.10),
                ("økonomi", 0.05),
                ("miljø", 0.05),
            ],
        ),
    );
    media_stats.insert(
        "Zetland".to_string(),
        media(
            "Digitalt medie med fokus på dybdegående journalistik",
            "Niche",
            -0.3,
            0.89,
            0.87,
            0.90,
            0.92,
            &[
                ("samfund", 0.35),
                ("kultur", 0.25),
                ("klima", 0.20),
                ("teknologi", 0.10),
                ("videnskab", 0.10),
            ],
        ),
    );
    media_stats.insert(
        "Børsen".to_string(),
        media(
            "Erhvervsavis med fokus på økonomi, finans og erhvervsliv",
            "Erhverv",
            0.4,
            0.87,
            0.85,
            0.88,
            0.86,
            &[
                ("erhverv", 0.40),
                ("økonomi", 0.30),
                ("finans", 0.15),
                ("politik", 0.10),
                ("teknologi", 0.05),
            ],
        ),
    );

    let categories = ["Landsdækkende", "Public Service", "Tabloid", "Niche", "Erhverv"]
        .into_iter()
        .map(|category| {
            let outlets: Vec<serde_json::Value> = media_stats
                .iter()
                .filter(|(_, stats)| stats.category == category)
                .map(|(outlet, _)| serde_json::Value::String(outlet.clone()))
                .collect();
            (category.to_string(), serde_json::Value::Array(outlets))
        })
        .collect();

    StatsSnapshot {
        media_stats,
        categories,
    }
}

fn demo_analyses() -> Vec<OutletAnalysis> {
    vec![
        analysis(
            "DR",
            -0.2,
            (0.95, 0.88, 0.85),
            &[
                ("regeringen", 18),
                ("klima", 12),
                ("velfærd", 9),
                ("forhandlinger", 7),
                ("kommuner", 5),
            ],
            &["Politik", "Kultur", "Samfund", "Økonomi"],
        ),
        analysis(
            "TV2",
            0.1,
            (0.92, 0.82, 0.80),
            &[
                ("politi", 14),
                ("regeringen", 10),
                ("landskamp", 8),
                ("vejret", 6),
                ("klima", 4),
            ],
            &["Nyheder", "Sport", "Politik", "Underholdning"],
        ),
        analysis(
            "Politiken",
            -0.4,
            (0.89, 0.84, 0.78),
            &[
                ("kultur", 16),
                ("klima", 13),
                ("ulighed", 8),
                ("regeringen", 7),
                ("kunst", 5),
            ],
            &["Kultur", "Samfund", "Politik"],
        ),
        analysis(
            "Berlingske",
            0.3,
            (0.90, 0.83, 0.79),
            &[
                ("erhvervslivet", 15),
                ("skat", 11),
                ("regeringen", 9),
                ("vækst", 7),
                ("boligmarkedet", 4),
            ],
            &["Politik", "Erhverv", "Kultur"],
        ),
        analysis(
            "Information",
            -0.6,
            (0.88, 0.80, 0.72),
            &[
                ("klima", 17),
                ("solidaritet", 9),
                ("eu", 8),
                ("bæredygtighed", 6),
                ("aktivisme", 4),
            ],
            &["Klima", "Samfund", "Udland"],
        ),
        analysis(
            "Jyllands-Posten",
            0.2,
            (0.88, 0.83, 0.77),
            &[
                ("erhverv", 13),
                ("udlændinge", 9),
                ("regeringen", 8),
                ("landbrug", 6),
                ("eksport", 5),
            ],
            &["Politik", "Erhverv", "Udland"],
        ),
        analysis(
            "Ekstra Bladet",
            -0.2,
            (0.73, 0.70, 0.65),
            &[
                ("afsløring", 12),
                ("kendte", 10),
                ("politi", 9),
                ("fodbold", 8),
                ("skandale", 6),
            ],
            &["Krimi", "Underholdning", "Sport"],
        ),
        analysis(
            "Børsen",
            0.4,
            (0.88, 0.84, 0.70),
            &[
                ("aktier", 16),
                ("renter", 12),
                ("vækst", 9),
                ("virksomheder", 8),
                ("investorer", 6),
            ],
            &["Finans", "Erhverv", "Økonomi"],
        ),
    ]
}

impl DemoSource {
    pub fn new() -> Self {
        Self {
            snapshot: demo_snapshot(),
            analyses: demo_analyses(),
        }
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MediaDataSource for DemoSource {
    async fn fetch_stats(&self) -> anyhow::Result<StatsSnapshot> {
        Ok(self.snapshot.clone())
    }

    async fn fetch_outlet_analyses(&self) -> anyhow::Result<Vec<OutletAnalysis>> {
        Ok(self.analyses.clone())
    }

    async fn analyze_article(&self, url: &str) -> anyhow::Result<ArticleAnalysis> {
        Ok(ArticleAnalysis {
            title: format!("Demo-analyse af {url}"),
            sentiment: Sentiment {
                label: "positiv".to_string(),
                score: 0.62,
            },
            sources_count: 4,
            keywords: vec![
                "klima".to_string(),
                "regeringen".to_string(),
                "forhandlinger".to_string(),
            ],
            summary: "Artiklen beskriver de igangværende forhandlinger om en ny klimaaftale."
                .to_string(),
        })
    }

    fn source_name(&self) -> &str {
        "demodata"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_snapshot_honors_the_backend_contract() {
        let snapshot = demo_snapshot();
        assert!(snapshot.contract_breaches().is_empty());
    }

    #[test]
    fn every_outlet_category_is_listed() {
        let snapshot = demo_snapshot();
        for (outlet, stats) in &snapshot.media_stats {
            assert!(
                snapshot.categories.contains_key(&stats.category),
                "{outlet} has unlisted category {}",
                stats.category
            );
        }
    }

    #[test]
    fn demo_analyses_carry_words_and_topics() {
        for analysis in demo_analyses() {
            assert!(!analysis.word_frequencies.is_empty(), "{}", analysis.source);
            assert!(!analysis.top_topics.is_empty(), "{}", analysis.source);
            assert!((-1.0..=1.0).contains(&analysis.bias_score));
        }
    }
}
