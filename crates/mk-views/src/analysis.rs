//! Single-article analysis form

use egui::{RichText, ScrollArea, TextEdit, Ui};

use mk_core::state::loading_slot;
use mk_core::{ArticleAnalysis, RemoteData, RemoteSlot};
use mk_ui::{theme, ScrollAreaExt, WidgetId};

use crate::widgets;
use crate::{View, ViewerContext, ViewId};

pub struct AnalyzeView {
    id: ViewId,
    title: String,
    url: String,
    input_error: Option<String>,
    /// Slot of the most recent submission; None until the first one.
    result: Option<RemoteSlot<ArticleAnalysis>>,
}

impl AnalyzeView {
    pub fn new() -> Self {
        Self {
            id: ViewId::new_v4(),
            title: "Analyse".to_string(),
            url: String::new(),
            input_error: None,
            result: None,
        }
    }

    fn submit(&mut self, ctx: &ViewerContext) {
        self.input_error = None;
        if self.url.trim().is_empty() {
            self.input_error = Some("Indtast venligst en URL".to_string());
            return;
        }

        let slot = loading_slot();
        self.result = Some(slot.clone());

        let source = ctx.source.clone();
        let url = self.url.clone();
        let egui_ctx = ctx.egui_ctx.clone();
        ctx.runtime_handle.spawn(async move {
            let outcome = source.analyze_article(&url).await;
            match outcome {
                Ok(analysis) => *slot.write() = RemoteData::Ready(analysis),
                Err(e) => {
                    tracing::error!("article analysis failed: {e:#}");
                    *slot.write() = RemoteData::Failed(e.to_string());
                }
            }
            egui_ctx.request_repaint();
        });
    }

    fn in_flight(&self) -> bool {
        self.result
            .as_ref()
            .map(|slot| slot.read().is_loading())
            .unwrap_or(false)
    }
}

impl Default for AnalyzeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for AnalyzeView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading("Analysér artikel");

        let busy = self.in_flight();
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut self.url)
                    .hint_text("https://…")
                    .desired_width(420.0),
            );
            let button = ui.add_enabled(!busy, egui::Button::new("Analysér"));
            if button.clicked() {
                self.submit(ctx);
            }
            if busy {
                ui.spinner();
            }
        });

        if let Some(message) = &self.input_error {
            ui.colored_label(theme::error_color(), message);
        }

        let Some(slot) = self.result.clone() else {
            return;
        };
        let result = slot.read();
        match &*result {
            RemoteData::Loading => {}
            RemoteData::Failed(_) => {
                ui.add_space(6.0);
                ui.colored_label(
                    theme::error_color(),
                    "Der opstod en fejl under analysen. Prøv igen senere.",
                );
            }
            RemoteData::Ready(analysis) => {
                ui.add_space(8.0);
                ScrollArea::vertical()
                    .id_builder(WidgetId::new("analysis").with("result"))
                    .show(ui, |ui| {
                        analysis_result(ui, analysis);
                    });
            }
        }
    }
}

fn analysis_result(ui: &mut Ui, analysis: &ArticleAnalysis) {
    ui.label(RichText::new("Analyseresultater").strong());

    widgets::card_frame(ui).show(ui, |ui| {
        result_section(ui, "Titel", &analysis.title);
        ui.separator();
        result_section(
            ui,
            "Sentiment",
            &format!(
                "{}: {:.1}%",
                analysis.sentiment.label,
                analysis.sentiment.score * 100.0
            ),
        );
        ui.separator();
        result_section(ui, "Antal kilder", &analysis.sources_count.to_string());
        ui.separator();
        result_section(ui, "Nøgleord", &analysis.keywords.join(", "));
        ui.separator();
        result_section(ui, "Sammenfatning", &analysis.summary);
    });
}

fn result_section(ui: &mut Ui, label: &str, value: &str) {
    ui.label(
        RichText::new(label)
            .small()
            .color(theme::secondary_text_color()),
    );
    ui.label(value);
    ui.add_space(4.0);
}
