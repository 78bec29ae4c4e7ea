//! Main application entry point

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Local};
use eframe::egui;
use parking_lot::RwLock;
use tracing::{error, info};

use mk_core::data::MediaDataSource;
use mk_core::{loading_slot, AppSettings, RemoteData};
use mk_data::{ApiConfig, HttpSource};
use mk_ui::{apply_theme, menu_bar, status_bar, Theme};
use mk_views::{
    AnalyzeView, BiasChartView, ComparisonView, DashboardView, MethodologyView, View,
    ViewerContext, Viewport, WordCloudView,
};

mod demo;

/// Main application state
struct MediekompassetApp {
    /// The viewport managing all docked views
    viewport: Viewport,

    /// Viewer context shared between all views
    viewer_context: ViewerContext,

    /// Application settings
    settings: AppSettings,

    /// Current theme
    theme: Theme,

    /// When the statistics fetch completed
    stats_fetched_at: Arc<RwLock<Option<DateTime<Local>>>>,

    /// Tokio runtime driving the fetches
    _runtime: tokio::runtime::Runtime,
}

impl MediekompassetApp {
    fn new(cc: &eframe::CreationContext<'_>, source: Arc<dyn MediaDataSource>) -> Self {
        let theme = Theme::default();
        apply_theme(&cc.egui_ctx, &theme);

        let runtime = tokio::runtime::Runtime::new().unwrap();

        let palette = ApiConfig::load(None).palette;
        let viewer_context = ViewerContext {
            source,
            stats: loading_slot(),
            analyses: loading_slot(),
            palette,
            runtime_handle: runtime.handle().clone(),
            egui_ctx: cc.egui_ctx.clone(),
        };

        let stats_fetched_at = Arc::new(RwLock::new(None));
        start_fetches(&viewer_context, stats_fetched_at.clone());

        let mut viewport = Viewport::new();
        let views: Vec<Box<dyn View>> = vec![
            Box::new(DashboardView::new()),
            Box::new(BiasChartView::new()),
            Box::new(WordCloudView::new()),
            Box::new(ComparisonView::new()),
            Box::new(AnalyzeView::new()),
            Box::new(MethodologyView::new()),
        ];
        for view in views {
            viewport.add_view(view);
        }

        Self {
            viewport,
            viewer_context,
            settings: AppSettings::default(),
            theme,
            stats_fetched_at,
            _runtime: runtime,
        }
    }

    fn status_text(&self) -> String {
        let stats = self.viewer_context.stats.read();
        match &*stats {
            RemoteData::Loading => "Henter statistik…".to_string(),
            RemoteData::Failed(_) => "Statistikken kunne ikke hentes".to_string(),
            RemoteData::Ready(snapshot) => {
                let when = self
                    .stats_fetched_at
                    .read()
                    .as_ref()
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default();
                format!("{} medier hentet kl. {when}", snapshot.media_stats.len())
            }
        }
    }
}

/// Spawn the two startup fetches. Each writes its outcome into the shared
/// slot and requests a repaint; there are no retries.
fn start_fetches(ctx: &ViewerContext, stats_fetched_at: Arc<RwLock<Option<DateTime<Local>>>>) {
    let source = ctx.source.clone();
    let stats = ctx.stats.clone();
    let egui_ctx = ctx.egui_ctx.clone();
    ctx.runtime_handle.spawn(async move {
        match source.fetch_stats().await {
            Ok(snapshot) => {
                snapshot.validate();
                info!("loaded statistics for {} outlets", snapshot.media_stats.len());
                *stats_fetched_at.write() = Some(Local::now());
                *stats.write() = RemoteData::Ready(snapshot);
            }
            Err(e) => {
                error!("failed to fetch statistics: {e:#}");
                *stats.write() = RemoteData::Failed(e.to_string());
            }
        }
        egui_ctx.request_repaint();
    });

    let source = ctx.source.clone();
    let analyses = ctx.analyses.clone();
    let egui_ctx = ctx.egui_ctx.clone();
    ctx.runtime_handle.spawn(async move {
        match source.fetch_outlet_analyses().await {
            Ok(list) => {
                info!("loaded {} outlet analyses", list.len());
                *analyses.write() = RemoteData::Ready(list);
            }
            Err(e) => {
                error!("failed to fetch outlet analyses: {e:#}");
                *analyses.write() = RemoteData::Failed(e.to_string());
            }
        }
        egui_ctx.request_repaint();
    });
}

impl eframe::App for MediekompassetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if menu_bar(ctx, &mut self.settings, &mut self.theme) {
            apply_theme(ctx, &self.theme);
        }

        if self.settings.show_status_bar {
            status_bar(
                ctx,
                self.viewer_context.source.source_name(),
                &self.status_text(),
            );
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewport.ui(ui, &self.viewer_context);
        });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let demo_mode = std::env::args().any(|arg| arg == "--demo");
    let source: Arc<dyn MediaDataSource> = if demo_mode {
        info!("Starting Mediekompasset with demo data");
        Arc::new(demo::DemoSource::new())
    } else {
        let config = ApiConfig::load(None);
        info!("Starting Mediekompasset against {}", config.base_url);
        Arc::new(HttpSource::new(config)?)
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mediekompasset",
        options,
        Box::new(move |cc| Box::new(MediekompassetApp::new(cc, source))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {e}"))?;

    Ok(())
}
