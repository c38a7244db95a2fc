//! Widgets for the GlyphVox screen

pub mod font;
mod glyph_panel;
mod selector;
mod status_bar;

pub use glyph_panel::GlyphPanelWidget;
pub use selector::{LanguageSelectorWidget, ModeSelectorWidget};
pub use status_bar::StatusBarWidget;
