//! Outlet overview: category filter chips above a grid of outlet cards

use egui::{RichText, ScrollArea, Ui};

use mk_core::filter::{category_options, filter_outlets, CategoryChoice};
use mk_core::{MediaStats, RemoteData, StatsSnapshot};
use mk_ui::{theme, ScrollAreaExt, WidgetId};

use crate::widgets;
use crate::{View, ViewerContext, ViewId};

/// Minimum card width before the grid drops a column.
const CARD_WIDTH: f32 = 340.0;

pub struct DashboardView {
    id: ViewId,
    title: String,
    choice: CategoryChoice,
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            id: ViewId::new_v4(),
            title: "Overblik".to_string(),
            choice: CategoryChoice::default(),
        }
    }

    fn category_chips(&mut self, ui: &mut Ui, snapshot: &StatsSnapshot) {
        ui.horizontal_wrapped(|ui| {
            for option in category_options(snapshot) {
                let selected = self.choice.label() == option;
                if ui.selectable_label(selected, &option).clicked() {
                    self.choice = CategoryChoice::from_label(&option);
                }
            }
        });
    }

    fn card_grid(&self, ui: &mut Ui, snapshot: &StatsSnapshot) {
        let outlets = filter_outlets(&snapshot.media_stats, &self.choice);
        // An empty category renders an empty grid, nothing else.
        if outlets.is_empty() {
            return;
        }

        let columns = (ui.available_width() / CARD_WIDTH).floor().max(1.0) as usize;
        for row in outlets.chunks(columns) {
            ui.columns(columns, |columns_ui| {
                for (i, (outlet, stats)) in row.iter().enumerate() {
                    media_card(&mut columns_ui[i], outlet, stats);
                }
            });
            ui.add_space(8.0);
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for DashboardView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        let stats = ctx.stats.read();
        match &*stats {
            RemoteData::Loading => widgets::loading(ui),
            RemoteData::Failed(_) => {
                widgets::no_data(ui, "Ingen data – statistikken kunne ikke hentes")
            }
            RemoteData::Ready(snapshot) => {
                self.category_chips(ui, snapshot);
                ui.add_space(6.0);
                ScrollArea::vertical()
                    .id_builder(WidgetId::new("dashboard").with("cards"))
                    .show(ui, |ui| {
                        self.card_grid(ui, snapshot);
                    });
            }
        }
    }
}

fn media_card(ui: &mut Ui, outlet: &str, stats: &MediaStats) {
    widgets::card_frame(ui).show(ui, |ui| {
        ui.heading(outlet);
        ui.label(
            RichText::new(&stats.description)
                .small()
                .color(theme::secondary_text_color()),
        );
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            widgets::tag(ui, &stats.category, theme::accent_color());
        });

        ui.add_space(6.0);
        ui.label(RichText::new("Politisk orientering").strong());
        widgets::bias_scale(ui, stats.political_bias);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            widgets::percent_stat(ui, "Pålidelighed", stats.reliability_score);
            ui.add_space(24.0);
            widgets::percent_stat(ui, "Kildediversitet", stats.source_diversity);
        });
        if stats.fact_checking.is_some() || stats.transparency.is_some() {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if let Some(fact_checking) = stats.fact_checking {
                    widgets::percent_stat(ui, "Faktatjek", fact_checking);
                    ui.add_space(24.0);
                }
                if let Some(transparency) = stats.transparency {
                    widgets::percent_stat(ui, "Transparens", transparency);
                }
            });
        }

        ui.add_space(6.0);
        ui.label(RichText::new("Emnefordeling").strong());
        for (topic, share) in &stats.topic_coverage {
            widgets::topic_bar(ui, topic, *share);
        }
    });
}
