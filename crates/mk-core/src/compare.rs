//! Side-by-side outlet comparison
//!
//! The selection is owned by the comparison view and handed to the pure
//! projection functions below; nothing here is global. Projections are
//! recomputed from scratch on every change.

use crate::bias::marker_position;
use crate::model::{OutletAnalysis, OutletMetrics};
use crate::palette::OutletPalette;

/// Minimum number of selected outlets before the comparison renders.
pub const MIN_COMPARED: usize = 2;

/// What the comparison panel should show for the current selection size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonState {
    /// Nothing selected yet.
    Empty,
    /// One outlet selected, comparison still hidden.
    Insufficient,
    /// Two or more selected, comparison visible.
    Comparing,
}

/// The set of outlets picked for comparison, in toggle order.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSelection {
    selected: Vec<String>,
}

impl ComparisonSelection {
    pub fn contains(&self, outlet: &str) -> bool {
        self.selected.iter().any(|s| s == outlet)
    }

    /// Checkbox toggle: removes the outlet if present, appends it otherwise.
    pub fn toggle(&mut self, outlet: &str) {
        if let Some(index) = self.selected.iter().position(|s| s == outlet) {
            self.selected.remove(index);
        } else {
            self.selected.push(outlet.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn state(&self) -> ComparisonState {
        match self.selected.len() {
            0 => ComparisonState::Empty,
            n if n < MIN_COMPARED => ComparisonState::Insufficient,
            _ => ComparisonState::Comparing,
        }
    }

    /// The selected outlets' analyses, in selection order. Selected outlets
    /// missing from the data are skipped.
    fn resolve<'a>(&self, analyses: &'a [OutletAnalysis]) -> Vec<&'a OutletAnalysis> {
        self.iter()
            .filter_map(|outlet| analyses.iter().find(|a| a.source == outlet))
            .collect()
    }
}

/// A marker on the shared leaning scale.
#[derive(Debug, Clone, PartialEq)]
pub struct BiasMarker {
    pub outlet: String,
    /// Percent along the scale, 0 = far left, 100 = far right.
    pub position: f64,
    pub color: String,
}

pub fn bias_markers(
    selection: &ComparisonSelection,
    analyses: &[OutletAnalysis],
    palette: &OutletPalette,
) -> Vec<BiasMarker> {
    selection
        .resolve(analyses)
        .into_iter()
        .map(|analysis| BiasMarker {
            outlet: analysis.source.clone(),
            position: marker_position(analysis.bias_score),
            color: palette.color_for(&analysis.source).to_string(),
        })
        .collect()
}

/// The three compared metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonMetric {
    Factuality,
    SourceDiversity,
    TopicBalance,
}

impl ComparisonMetric {
    pub const ALL: [ComparisonMetric; 3] = [
        ComparisonMetric::Factuality,
        ComparisonMetric::SourceDiversity,
        ComparisonMetric::TopicBalance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComparisonMetric::Factuality => "Faktualitet",
            ComparisonMetric::SourceDiversity => "Kildediversitet",
            ComparisonMetric::TopicBalance => "Emnebalance",
        }
    }

    fn value(self, metrics: &OutletMetrics) -> f64 {
        match self {
            ComparisonMetric::Factuality => metrics.factuality,
            ComparisonMetric::SourceDiversity => metrics.source_diversity,
            ComparisonMetric::TopicBalance => metrics.topic_balance,
        }
    }
}

/// One bar in a metric comparison section.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricBar {
    pub outlet: String,
    /// Metric scaled to percent.
    pub percent: f64,
    pub color: String,
}

pub fn metric_bars(
    metric: ComparisonMetric,
    selection: &ComparisonSelection,
    analyses: &[OutletAnalysis],
    palette: &OutletPalette,
) -> Vec<MetricBar> {
    selection
        .resolve(analyses)
        .into_iter()
        .map(|analysis| MetricBar {
            outlet: analysis.source.clone(),
            percent: metric.value(&analysis.metrics) * 100.0,
            color: palette.color_for(&analysis.source).to_string(),
        })
        .collect()
}

/// One outlet's row of topic tags.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicTagRow {
    pub outlet: String,
    pub color: String,
    pub topics: Vec<String>,
}

pub fn topic_rows(
    selection: &ComparisonSelection,
    analyses: &[OutletAnalysis],
    palette: &OutletPalette,
) -> Vec<TopicTagRow> {
    selection
        .resolve(analyses)
        .into_iter()
        .map(|analysis| TopicTagRow {
            outlet: analysis.source.clone(),
            color: palette.color_for(&analysis.source).to_string(),
            topics: analysis.top_topics.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn analysis(source: &str, bias_score: f64) -> OutletAnalysis {
        OutletAnalysis {
            source: source.to_string(),
            bias_score,
            word_frequencies: IndexMap::new(),
            metrics: OutletMetrics {
                factuality: 0.95,
                source_diversity: 0.88,
                topic_balance: 0.85,
            },
            top_topics: vec!["Politik".to_string(), "Kultur".to_string()],
        }
    }

    #[test]
    fn selection_size_drives_the_state_machine() {
        let mut selection = ComparisonSelection::default();
        assert_eq!(selection.state(), ComparisonState::Empty);

        selection.toggle("DR");
        assert_eq!(selection.state(), ComparisonState::Insufficient);

        selection.toggle("TV2");
        assert_eq!(selection.state(), ComparisonState::Comparing);

        // Deselecting back below two hides the comparison again.
        selection.toggle("TV2");
        assert_eq!(selection.state(), ComparisonState::Insufficient);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut selection = ComparisonSelection::default();
        selection.toggle("DR");
        assert!(selection.contains("DR"));
        selection.toggle("DR");
        assert!(!selection.contains("DR"));
        assert!(selection.is_empty());
    }

    #[test]
    fn markers_follow_selection_order() {
        let analyses = [analysis("DR", -0.2), analysis("TV2", 0.1)];
        let palette = OutletPalette::default();

        let mut selection = ComparisonSelection::default();
        selection.toggle("TV2");
        selection.toggle("DR");

        let markers = bias_markers(&selection, &analyses, &palette);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].outlet, "TV2");
        assert_eq!(markers[0].position, marker_position(0.1));
        assert_eq!(markers[0].color, "#E4002B");
        assert_eq!(markers[1].outlet, "DR");
    }

    #[test]
    fn metric_bars_scale_to_percent() {
        let analyses = [analysis("DR", -0.2)];
        let palette = OutletPalette::default();
        let mut selection = ComparisonSelection::default();
        selection.toggle("DR");

        let bars = metric_bars(ComparisonMetric::Factuality, &selection, &analyses, &palette);
        assert_eq!(bars[0].percent, 95.0);

        let bars = metric_bars(ComparisonMetric::TopicBalance, &selection, &analyses, &palette);
        assert_eq!(bars[0].percent, 85.0);
    }

    #[test]
    fn unknown_outlet_in_projection_uses_default_color() {
        let analyses = [analysis("Zetland", 0.0)];
        let palette = OutletPalette::default();
        let mut selection = ComparisonSelection::default();
        selection.toggle("Zetland");

        let rows = topic_rows(&selection, &analyses, &palette);
        assert_eq!(rows[0].color, crate::palette::DEFAULT_OUTLET_COLOR);
        assert_eq!(rows[0].topics, ["Politik", "Kultur"]);
    }

    #[test]
    fn selected_outlet_without_data_is_skipped() {
        let analyses = [analysis("DR", -0.2)];
        let palette = OutletPalette::default();
        let mut selection = ComparisonSelection::default();
        selection.toggle("DR");
        selection.toggle("Radio4");

        let markers = bias_markers(&selection, &analyses, &palette);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].outlet, "DR");
    }
}
