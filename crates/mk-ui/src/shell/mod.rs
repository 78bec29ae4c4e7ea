use egui::{Context, TopBottomPanel};

use mk_core::AppSettings;

use crate::theme::Theme;

/// Render the main menu bar. Returns true when the theme changed and needs
/// to be re-applied.
pub fn menu_bar(ctx: &Context, settings: &mut AppSettings, theme: &mut Theme) -> bool {
    let mut theme_changed = false;

    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Filer", |ui| {
                if ui.button("Afslut").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Vis", |ui| {
                if ui.checkbox(&mut settings.show_status_bar, "Statuslinje").clicked() {
                    ui.close_menu();
                }
                if ui.checkbox(&mut theme.dark_mode, "Mørkt tema").clicked() {
                    theme_changed = true;
                    ui.close_menu();
                }
            });
        });
    });

    theme_changed
}

/// Render the status bar: data-source name on the left, fetch status on the
/// right.
pub fn status_bar(ctx: &Context, source: &str, status: &str) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(source).small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(status).small());
            });
        });
    });
}
