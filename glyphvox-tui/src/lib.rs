//! Terminal UI for GlyphVox - widgets, themes, and layout
//!
//! One screen: a huge glyph in the middle, mode and language selectors on
//! top, a status bar at the bottom.

mod app;
mod theme;
pub mod widgets;

pub use app::{App, AppState, MessageType, POP_FRAMES};
pub use theme::{Theme, MIDNIGHT, SUNSHINE};
pub use widgets::{
    GlyphPanelWidget, LanguageSelectorWidget, ModeSelectorWidget, StatusBarWidget,
};
