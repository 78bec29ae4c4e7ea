//! Widget ID helpers
//!
//! Repeated scroll areas need distinct egui IDs or debug builds flag ID
//! clashes. The builder below composes stable IDs from path-like components.

use egui::ScrollArea;
use std::fmt::Display;

/// Builder for unique widget IDs composed of multiple components
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Build the final ID string
    pub fn build(&self) -> String {
        self.components.join("_")
    }
}

/// Extension trait for ScrollArea to set an ID from a builder
pub trait ScrollAreaExt {
    fn id_builder(self, builder: WidgetId) -> Self;
}

impl ScrollAreaExt for ScrollArea {
    fn id_builder(self, builder: WidgetId) -> Self {
        self.id_source(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_builder() {
        let id = WidgetId::new("comparison").with("board").build();
        assert_eq!(id, "comparison_board");
    }
}
