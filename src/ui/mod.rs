//! UI components module
//!
//! Reusable UI components: panels, status bar and the help overlay.

pub mod help_overlay;
pub mod panels;
pub mod status_bar;

pub use help_overlay::HelpOverlay;
pub use panels::{Panel, PanelStyle};
pub use status_bar::StatusBar;
