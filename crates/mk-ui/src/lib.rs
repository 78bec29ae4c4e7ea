//! User interface chrome for the Mediekompasset dashboard
//!
//! This crate provides the theme, the application shell (menu and status
//! bars) and small widget helpers shared by the views.

pub mod shell;
pub mod theme;
pub mod widget_utils;

pub use shell::{menu_bar, status_bar};
pub use theme::{apply_theme, Theme};
pub use widget_utils::{ScrollAreaExt, WidgetId};
