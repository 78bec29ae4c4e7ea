//! Bar chart of leaning scores across all outlets

use egui::{Color32, RichText, Sense, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot};

use mk_core::{Leaning, RemoteData};

use crate::widgets;
use crate::{View, ViewerContext, ViewId};

fn leaning_color(leaning: Leaning) -> Color32 {
    match leaning {
        Leaning::Left => Color32::from_rgb(255, 99, 132),
        Leaning::Neutral => Color32::from_rgb(255, 206, 86),
        Leaning::Right => Color32::from_rgb(54, 162, 235),
    }
}

pub struct BiasChartView {
    id: ViewId,
    title: String,
}

impl BiasChartView {
    pub fn new() -> Self {
        Self {
            id: ViewId::new_v4(),
            title: "Bias-oversigt".to_string(),
        }
    }
}

impl Default for BiasChartView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for BiasChartView {
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
                ui.heading("Politisk bias på tværs af danske medier");

                // Legend
                ui.horizontal(|ui| {
                    for leaning in [Leaning::Left, Leaning::Neutral, Leaning::Right] {
                        let (rect, _response) =
                            ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
                        ui.painter()
                            .rect_filled(rect, 2.0, leaning_color(leaning));
                        ui.label(RichText::new(leaning.label()).small());
                        ui.add_space(10.0);
                    }
                });

                let plot = Plot::new(format!("bias_chart_{}", self.id))
                    .show_grid(true)
                    .include_y(-1.0)
                    .include_y(1.0)
                    .y_axis_label("Bias score (-1 = venstre, 1 = højre)")
                    .allow_zoom(true)
                    .allow_drag(true)
                    .allow_boxed_zoom(true);

                plot.show(ui, |plot_ui| {
                    let mut bars = Vec::new();
                    for (i, analysis) in analyses.iter().enumerate() {
                        let leaning = Leaning::classify(analysis.bias_score);
                        let bar = Bar::new(i as f64, analysis.bias_score)
                            .width(0.7)
                            .name(format!(
                                "{}\n{:.2} ({})",
                                analysis.source,
                                analysis.bias_score,
                                leaning.label()
                            ))
                            .fill(leaning_color(leaning));
                        bars.push(bar);
                    }
                    plot_ui.bar_chart(BarChart::new(bars));
                });
            }
        }
    }
}
