//! Viewport - manages the dockable views

use std::collections::HashMap;

use egui::Ui;
use egui_dock::{DockArea, DockState, TabViewer};

use crate::{View, ViewerContext, ViewId};

/// The main viewport hosting the dashboard's views as dockable tabs.
pub struct Viewport {
    dock_state: DockState<ViewId>,
    views: HashMap<ViewId, Box<dyn View>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            dock_state: DockState::new(vec![]),
            views: HashMap::new(),
        }
    }

    /// Add a view to the viewport
    pub fn add_view(&mut self, view: Box<dyn View>) {
        let id = view.id();
        self.views.insert(id, view);

        if self.dock_state.main_surface().is_empty() {
            self.dock_state = DockState::new(vec![id]);
        } else {
            self.dock_state.push_to_first_leaf(id);
        }
    }

    /// Draw the viewport
    pub fn ui(&mut self, ui: &mut Ui, viewer_context: &ViewerContext) {
        let available_rect = ui.available_rect_before_wrap();
        ui.allocate_ui(available_rect.size(), |ui| {
            DockArea::new(&mut self.dock_state)
                .show_close_buttons(false)
                .draggable_tabs(true)
                .show_tab_name_on_hover(false)
                .show_inside(
                    ui,
                    &mut ViewportTabViewer {
                        views: &mut self.views,
                        viewer_context,
                    },
                );
        });
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Tab viewer for egui_dock
struct ViewportTabViewer<'a> {
    views: &'a mut HashMap<ViewId, Box<dyn View>>,
    viewer_context: &'a ViewerContext,
}

impl<'a> TabViewer for ViewportTabViewer<'a> {
    type Tab = ViewId;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        if let Some(view) = self.views.get(tab) {
            view.title().into()
        } else {
            "Ukendt".into()
        }
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        if let Some(view) = self.views.get_mut(tab) {
            view.ui(self.viewer_context, ui);
        }
    }
}
