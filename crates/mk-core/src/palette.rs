//! Outlet color table
//!
//! The palette is injected configuration: the config file can extend or
//! override it without code changes. Lookups normalize both sides so
//! "Kristeligt Dagblad", "kristeligt-dagblad" and "kristeligtdagblad" all hit
//! the same entry.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Fallback for outlets with no palette entry.
pub const DEFAULT_OUTLET_COLOR: &str = "#666666";

/// Outlet id -> hex color mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutletPalette {
    colors: IndexMap<String, String>,
}

static BUILTIN: Lazy<OutletPalette> = Lazy::new(|| {
    let entries = [
        ("dr", "#C70000"),
        ("tv2", "#E4002B"),
        ("politiken", "#333333"),
        ("berlingske", "#00447C"),
        ("information", "#D14124"),
        ("jyllandsposten", "#005293"),
        ("ekstrabladet", "#FF5722"),
        ("bt", "#E65100"),
        ("kristeligt-dagblad", "#1B5E20"),
        ("borsen", "#F9A825"),
        ("altinget", "#4A148C"),
        ("finans", "#0277BD"),
    ];
    OutletPalette {
        colors: entries
            .into_iter()
            .map(|(outlet, color)| (outlet.to_string(), color.to_string()))
            .collect(),
    }
});

impl Default for OutletPalette {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl OutletPalette {
    /// Lookup key for an outlet name: lowercased, Danish letters folded to
    /// ASCII, everything non-alphanumeric dropped.
    pub fn outlet_key(name: &str) -> String {
        name.to_lowercase()
            .chars()
            .flat_map(|c| match c {
                'æ' => vec!['a', 'e'],
                'ø' => vec!['o'],
                'å' => vec!['a', 'a'],
                c if c.is_alphanumeric() => vec![c],
                _ => vec![],
            })
            .collect()
    }

    /// Hex color for an outlet, falling back to `DEFAULT_OUTLET_COLOR` for
    /// unknown ids.
    pub fn color_for(&self, outlet: &str) -> &str {
        let wanted = Self::outlet_key(outlet);
        self.colors
            .iter()
            .find(|(known, _)| Self::outlet_key(known) == wanted)
            .map(|(_, color)| color.as_str())
            .unwrap_or(DEFAULT_OUTLET_COLOR)
    }

    /// Overlay entries from a configuration file on top of this palette.
    pub fn merge(&mut self, overrides: OutletPalette) {
        for (outlet, color) in overrides.colors {
            self.colors.insert(outlet, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_outlets_resolve() {
        let palette = OutletPalette::default();
        assert_eq!(palette.color_for("dr"), "#C70000");
        assert_eq!(palette.color_for("borsen"), "#F9A825");
    }

    #[test]
    fn display_names_resolve_through_normalization() {
        let palette = OutletPalette::default();
        assert_eq!(palette.color_for("DR"), "#C70000");
        assert_eq!(palette.color_for("Børsen"), "#F9A825");
        assert_eq!(palette.color_for("Jyllands-Posten"), "#005293");
        assert_eq!(palette.color_for("Kristeligt Dagblad"), "#1B5E20");
        assert_eq!(palette.color_for("Ekstra Bladet"), "#FF5722");
    }

    #[test]
    fn unknown_outlet_gets_the_default_color() {
        let palette = OutletPalette::default();
        assert_eq!(palette.color_for("Zetland"), DEFAULT_OUTLET_COLOR);
        assert_eq!(palette.color_for(""), DEFAULT_OUTLET_COLOR);
    }

    #[test]
    fn config_overrides_extend_the_builtin_table() {
        let mut palette = OutletPalette::default();
        let overrides: OutletPalette =
            serde_json::from_str(r#"{"zetland": "#1A7A5E", "dr": "#AA0000"}"#).unwrap();
        palette.merge(overrides);

        assert_eq!(palette.color_for("Zetland"), "#1A7A5E");
        assert_eq!(palette.color_for("dr"), "#AA0000");
        assert_eq!(palette.color_for("tv2"), "#E4002B");
    }
}
