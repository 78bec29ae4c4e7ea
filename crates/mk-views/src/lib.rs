//! View system for the Mediekompasset dashboard

mod analysis;
mod bias_chart;
mod comparison;
mod methodology;
mod overview;
mod viewport;
pub mod widgets;
mod word_cloud;

pub use analysis::AnalyzeView;
pub use bias_chart::BiasChartView;
pub use comparison::ComparisonView;
pub use methodology::MethodologyView;
pub use overview::DashboardView;
pub use viewport::Viewport;
pub use word_cloud::WordCloudView;

use std::sync::Arc;

use egui::Ui;

use mk_core::data::MediaDataSource;
use mk_core::{OutletAnalysis, OutletPalette, RemoteSlot, StatsSnapshot};

/// Unique identifier for a view
pub type ViewId = uuid::Uuid;

/// Context passed to views during rendering
#[derive(Clone)]
pub struct ViewerContext {
    /// The statistics backend (live API or embedded fixture)
    pub source: Arc<dyn MediaDataSource>,

    /// Outcome of the startup `GET /api/stats` fetch
    pub stats: RemoteSlot<StatsSnapshot>,

    /// Outcome of the startup legacy `GET /analyze/all` fetch
    pub analyses: RemoteSlot<Vec<OutletAnalysis>>,

    /// Outlet color table
    pub palette: OutletPalette,

    /// Tokio runtime handle for spawning fetches
    pub runtime_handle: tokio::runtime::Handle,

    /// Egui context, for repaint requests from completed fetches
    pub egui_ctx: egui::Context,
}

/// Base trait for all dockable views
pub trait View: Send + Sync {
    /// Get the unique ID of this view
    fn id(&self) -> ViewId;

    /// Tab title
    fn title(&self) -> &str;

    /// Draw the UI
    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui);
}
