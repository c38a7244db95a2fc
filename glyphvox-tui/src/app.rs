//! Application state management (Elm architecture)

use glyphvox_core::{GlyphController, Mode};
use glyphvox_speech::SpeechEvent;

use crate::theme::Theme;

/// Frames the glyph pop-in animation runs for (~10 at 30fps)
pub const POP_FRAMES: u8 = 10;

/// Message type for colored status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageType {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Application state
pub struct AppState {
    /// The input-to-utterance state machine
    pub controller: GlyphController,

    /// Which input surface holds focus (None until the startup delay
    /// elapses)
    pub focus: Option<Mode>,

    /// Last utterance handed to the speech engine, for the status bar
    pub last_utterance: Option<String>,

    /// Transient status message
    pub message: Option<String>,
    pub message_type: MessageType,

    // Theme & animation
    pub theme: Theme,
    pub frame_count: u64,
    /// Remaining frames of the glyph pop-in animation
    pop_frames: u8,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            controller: GlyphController::new(),
            focus: None,
            last_utterance: None,
            message: None,
            message_type: MessageType::Info,
            theme: Theme::default(),
            frame_count: 0,
            pop_frames: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update state from a speech worker event
    pub fn handle_speech_event(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Spoke { text, language } => {
                self.last_utterance = Some(format!("\"{}\" ({})", text, language.code()));
            }
            SpeechEvent::Error(msg) => {
                self.set_error(format!("Speech: {}", msg));
            }
        }
    }

    /// Start the glyph pop-in animation
    pub fn trigger_pop(&mut self) {
        self.pop_frames = POP_FRAMES;
    }

    /// Current glyph scale (grows from 0.4 to 1.0 while the pop runs)
    pub fn pop_scale(&self) -> f32 {
        if self.pop_frames == 0 {
            return 1.0;
        }
        let progress = 1.0 - self.pop_frames as f32 / POP_FRAMES as f32;
        0.4 + 0.6 * progress
    }

    /// Advance per-frame counters (call once per frame)
    pub fn tick(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.pop_frames = self.pop_frames.saturating_sub(1);
    }

    /// Clear any displayed message
    pub fn clear_message(&mut self) {
        self.message = None;
        self.message_type = MessageType::Info;
    }

    /// Set a message to display (info level)
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_type = MessageType::Info;
    }

    /// Set a success message (green)
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_type = MessageType::Success;
    }

    /// Set a warning message (yellow)
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_type = MessageType::Warning;
    }

    /// Set an error message (red)
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_type = MessageType::Error;
    }
}

/// Main application wrapper
pub struct App {
    pub state: AppState,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphvox_core::Language;

    #[test]
    fn test_pop_scale_progression() {
        let mut state = AppState::new();
        assert_eq!(state.pop_scale(), 1.0);

        state.trigger_pop();
        let start = state.pop_scale();
        assert!(start < 1.0);

        for _ in 0..POP_FRAMES {
            state.tick();
        }
        assert_eq!(state.pop_scale(), 1.0);
    }

    #[test]
    fn test_spoke_event_records_last_utterance() {
        let mut state = AppState::new();
        state.handle_speech_event(SpeechEvent::Spoke {
            text: "b".into(),
            language: Language::German,
        });
        assert_eq!(state.last_utterance.as_deref(), Some("\"b\" (de-DE)"));
    }

    #[test]
    fn test_error_event_sets_error_message() {
        let mut state = AppState::new();
        state.handle_speech_event(SpeechEvent::Error("engine gone".into()));
        assert_eq!(state.message_type, MessageType::Error);
        assert!(state.message.unwrap().contains("engine gone"));
    }
}
