//! Core functionality for the Mediekompasset dashboard
//!
//! This crate provides the domain model for the statistics API payloads and
//! the derived projections (leaning scale, category filter, word-frequency
//! table, comparison board) the views render from.

pub mod bias;
pub mod compare;
pub mod filter;
pub mod model;
pub mod palette;
pub mod state;
pub mod wordfreq;

// Re-export commonly used types
pub use bias::{marker_position, Leaning};
pub use compare::{ComparisonSelection, ComparisonState};
pub use filter::{CategoryChoice, ALL_CATEGORIES};
pub use model::{ArticleAnalysis, MediaStats, OutletAnalysis, StatsSnapshot};
pub use palette::{OutletPalette, DEFAULT_OUTLET_COLOR};
pub use state::{loading_slot, AppSettings, RemoteData, RemoteSlot};

/// Data-source abstraction the views and the app wire against.
pub mod data {
    use crate::model::{ArticleAnalysis, OutletAnalysis, StatsSnapshot};

    /// Trait for statistics backends (live HTTP API or embedded fixture)
    #[async_trait::async_trait]
    pub trait MediaDataSource: Send + Sync {
        /// Fetch the full per-outlet statistics snapshot
        async fn fetch_stats(&self) -> anyhow::Result<StatsSnapshot>;

        /// Fetch the legacy per-outlet analysis list
        async fn fetch_outlet_analyses(&self) -> anyhow::Result<Vec<OutletAnalysis>>;

        /// Analyze a single article by URL
        async fn analyze_article(&self, url: &str) -> anyhow::Result<ArticleAnalysis>;

        /// Get the source name (shown in the status bar)
        fn source_name(&self) -> &str;
    }
}

pub use data::MediaDataSource;
