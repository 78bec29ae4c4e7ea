//! Side-by-side comparison of selected outlets

use egui::{RichText, ScrollArea, Ui};

use mk_core::compare::{
    bias_markers, metric_bars, topic_rows, ComparisonMetric, ComparisonSelection, ComparisonState,
};
use mk_core::{OutletAnalysis, RemoteData};
use mk_ui::{ScrollAreaExt, WidgetId};

use crate::widgets::{self, hex_color};
use crate::{View, ViewerContext, ViewId};

pub struct ComparisonView {
    id: ViewId,
    title: String,
    selection: ComparisonSelection,
}

impl ComparisonView {
    pub fn new() -> Self {
        Self {
            id: ViewId::new_v4(),
            title: "Sammenligning".to_string(),
            selection: ComparisonSelection::default(),
        }
    }

    fn outlet_checkboxes(&mut self, ui: &mut Ui, analyses: &[OutletAnalysis]) {
        ui.horizontal_wrapped(|ui| {
            for analysis in analyses {
                let mut checked = self.selection.contains(&analysis.source);
                if ui.checkbox(&mut checked, &analysis.source).changed() {
                    self.selection.toggle(&analysis.source);
                }
            }
        });
    }

    fn comparison_board(&self, ui: &mut Ui, ctx: &ViewerContext, analyses: &[OutletAnalysis]) {
        ui.label(RichText::new("Politisk orientering").strong());
        widgets::comparison_scale(ui, &bias_markers(&self.selection, analyses, &ctx.palette));

        ui.add_space(8.0);
        ui.label(RichText::new("Nøgletal").strong());
        for metric in ComparisonMetric::ALL {
            ui.label(RichText::new(metric.label()).small());
            for bar in metric_bars(metric, &self.selection, analyses, &ctx.palette) {
                widgets::comparison_metric_bar(ui, &bar);
            }
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        ui.label(RichText::new("Hovedemner").strong());
        for row in topic_rows(&self.selection, analyses, &ctx.palette) {
            let color = hex_color(&row.color);
            ui.horizontal_wrapped(|ui| {
                ui.add_sized(
                    [110.0, 18.0],
                    egui::Label::new(RichText::new(&row.outlet).small().color(color)),
                );
                for topic in &row.topics {
                    widgets::tag(ui, topic, color);
                }
            });
        }
    }
}

impl Default for ComparisonView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ComparisonView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        let analyses = ctx.analyses.read();
        match &*analyses {
            RemoteData::Loading => widgets::loading(ui),
            RemoteData::Failed(_) => {
                widgets::no_data(ui, "Ingen data – analyserne kunne ikke hentes")
            }
            RemoteData::Ready(analyses) if analyses.is_empty() => {
                widgets::no_data(ui, "Ingen analyserede medier endnu")
            }
            RemoteData::Ready(analyses) => {
                ui.heading("Sammenlign medier");
                self.outlet_checkboxes(ui, analyses);
                ui.separator();

                match self.selection.state() {
                    ComparisonState::Empty => {
                        ui.label(
                            RichText::new("Vælg to eller flere medier for at sammenligne dem.")
                                .weak(),
                        );
                    }
                    ComparisonState::Insufficient => {
                        ui.label(
                            RichText::new("Vælg mindst ét medie mere for at se sammenligningen.")
                                .weak(),
                        );
                    }
                    ComparisonState::Comparing => {
                        ScrollArea::vertical()
                            .id_builder(WidgetId::new("comparison").with("board"))
                            .show(ui, |ui| {
                                self.comparison_board(ui, ctx, analyses);
                            });
                    }
                }
            }
        }
    }
}
