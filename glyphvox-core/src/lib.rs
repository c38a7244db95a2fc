//! Core state machine for GlyphVox
//!
//! Maps UI events (mode change, language change, text input, appear) to a
//! displayed glyph and a list of effects to perform. No I/O happens here;
//! the app crate interprets the effects.

mod controller;
mod input;
mod timer;

pub use controller::{Effect, GlyphController, Language, Mode, FOCUS_DELAY};
pub use input::InputRouter;
pub use timer::FocusTimer;
