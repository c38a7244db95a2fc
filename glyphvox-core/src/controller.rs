//! Input-to-utterance state machine

use std::time::Duration;

/// Delay before the startup focus request is routed to an input surface.
/// Focus requested during initial layout does not stick; anything over
/// 500ms works reliably.
pub const FOCUS_DELAY: Duration = Duration::from_millis(1000);

/// Which input surface is active (digit pad or alphabet keyboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Digits,
    Letters,
}

impl Mode {
    /// Get display name for the mode selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Digits => "123",
            Mode::Letters => "ABC",
        }
    }

    /// The other mode (the selector only has two segments)
    pub fn toggled(self) -> Self {
        match self {
            Mode::Digits => Mode::Letters,
            Mode::Letters => Mode::Digits,
        }
    }
}

/// Speech output language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    /// Locale code passed to the speech engine
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en-GB",
            Language::German => "de-DE",
        }
    }

    /// Get display name for the language selector
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::German => "DE",
        }
    }

    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::German,
            Language::German => Language::English,
        }
    }
}

/// Side effects requested by a state transition.
///
/// The controller never performs I/O itself; the event loop interprets
/// these after each dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the one-shot focus timer; focus is routed when it fires.
    ScheduleFocus(Duration),
    /// Give keyboard focus to the given input surface.
    FocusInput(Mode),
    /// The displayed glyph changed; `animated` requests the pop-in
    /// transition.
    Render { animated: bool },
    /// Ask the speech service to vocalize `text` in `language`.
    /// Text is already lowercased for the engine.
    Speak { text: String, language: Language },
}

/// Owns the visible state of the screen: active mode, language, the raw
/// text buffer fed by the input surfaces, and the derived glyph.
///
/// Each `on_*` method is one UI event; the returned effects are the only
/// way the outside world is touched.
pub struct GlyphController {
    mode: Mode,
    language: Language,
    input_buffer: String,
    current_glyph: String,
}

impl GlyphController {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            language: Language::default(),
            input_buffer: String::new(),
            current_glyph: String::new(),
        }
    }

    /// Active input surface
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current speech language
    pub fn language(&self) -> Language {
        self.language
    }

    /// The glyph to render (uppercase, possibly empty)
    pub fn glyph(&self) -> &str {
        &self.current_glyph
    }

    /// Raw text buffer as last reported by the input surface
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// View appeared: arm the focus timer. Focus itself is routed when
    /// the timer fires so a mode switch during the delay wins.
    pub fn on_appear(&mut self) -> Vec<Effect> {
        vec![Effect::ScheduleFocus(FOCUS_DELAY)]
    }

    /// The focus timer fired. The target is the mode current *now*, not
    /// the mode captured when the timer was armed.
    pub fn on_focus_delay_elapsed(&self) -> Vec<Effect> {
        vec![Effect::FocusInput(self.mode)]
    }

    /// Mode selector changed: refocus the matching surface. The glyph is
    /// untouched until new text arrives.
    pub fn on_mode_changed(&mut self, mode: Mode) -> Vec<Effect> {
        self.mode = mode;
        vec![Effect::FocusInput(mode)]
    }

    /// Language selector changed: re-speak the held glyph, if any, in the
    /// new language.
    pub fn on_language_changed(&mut self, language: Language) -> Vec<Effect> {
        self.language = language;
        if self.current_glyph.is_empty() {
            Vec::new()
        } else {
            vec![self.speak_effect()]
        }
    }

    /// The input buffer changed: recompute the glyph and speak it.
    ///
    /// Every non-empty assignment speaks, even when the glyph is the same
    /// character as before.
    pub fn on_text_changed(&mut self, buffer: &str) -> Vec<Effect> {
        self.input_buffer.clear();
        self.input_buffer.push_str(buffer);
        self.current_glyph = derive_glyph(buffer);

        let mut effects = vec![Effect::Render { animated: true }];
        if !self.current_glyph.is_empty() {
            effects.push(self.speak_effect());
        }
        effects
    }

    fn speak_effect(&self) -> Effect {
        Effect::Speak {
            text: self.current_glyph.to_lowercase(),
            language: self.language,
        }
    }
}

impl Default for GlyphController {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase of the last character of the buffer, or empty.
///
/// Uppercasing can expand (`ß` -> `SS`), so the glyph is a string.
fn derive_glyph(buffer: &str) -> String {
    buffer
        .chars()
        .next_back()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speak_effects(effects: &[Effect]) -> Vec<&Effect> {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Speak { .. }))
            .collect()
    }

    #[test]
    fn test_glyph_is_uppercase_of_last_char() {
        assert_eq!(derive_glyph(""), "");
        assert_eq!(derive_glyph("7"), "7");
        assert_eq!(derive_glyph("abc"), "C");
        assert_eq!(derive_glyph("grün"), "N");
        assert_eq!(derive_glyph("ä"), "Ä");
        // Uppercasing expands sharp s
        assert_eq!(derive_glyph("ß"), "SS");
    }

    #[test]
    fn test_text_changed_speaks_digit_in_default_language() {
        let mut ctl = GlyphController::new();
        let effects = ctl.on_text_changed("7");

        assert_eq!(ctl.glyph(), "7");
        assert_eq!(
            speak_effects(&effects),
            vec![&Effect::Speak {
                text: "7".into(),
                language: Language::English,
            }]
        );
    }

    #[test]
    fn test_text_changed_lowercases_speech_text() {
        let mut ctl = GlyphController::new();
        let effects = ctl.on_text_changed("b");

        assert_eq!(ctl.glyph(), "B");
        assert_eq!(
            speak_effects(&effects),
            vec![&Effect::Speak {
                text: "b".into(),
                language: Language::English,
            }]
        );
    }

    #[test]
    fn test_empty_buffer_yields_no_glyph_and_no_speech() {
        let mut ctl = GlyphController::new();
        ctl.on_text_changed("a");
        let effects = ctl.on_text_changed("");

        assert_eq!(ctl.glyph(), "");
        assert!(speak_effects(&effects).is_empty());
        // The render effect still fires so the panel clears
        assert!(effects.contains(&Effect::Render { animated: true }));
    }

    #[test]
    fn test_repeated_identical_input_respeaks() {
        let mut ctl = GlyphController::new();
        let first = ctl.on_text_changed("5");
        let second = ctl.on_text_changed("5");

        // No suppression on a no-op transition: both dispatches speak
        assert_eq!(speak_effects(&first).len(), 1);
        assert_eq!(speak_effects(&second).len(), 1);
    }

    #[test]
    fn test_language_change_with_empty_glyph_is_silent() {
        let mut ctl = GlyphController::new();
        let effects = ctl.on_language_changed(Language::German);

        assert!(effects.is_empty());
        assert_eq!(ctl.language(), Language::German);
    }

    #[test]
    fn test_language_change_respeaks_held_glyph() {
        let mut ctl = GlyphController::new();
        ctl.on_text_changed("b");
        let effects = ctl.on_language_changed(Language::German);

        assert_eq!(
            effects,
            vec![Effect::Speak {
                text: "b".into(),
                language: Language::German,
            }]
        );
        // The glyph itself is unchanged
        assert_eq!(ctl.glyph(), "B");
    }

    #[test]
    fn test_language_change_speaks_exactly_once() {
        let mut ctl = GlyphController::new();
        ctl.on_text_changed("a");
        let effects = ctl.on_language_changed(Language::German);

        assert_eq!(speak_effects(&effects).len(), 1);
    }

    #[test]
    fn test_mode_change_refocuses_without_touching_glyph() {
        let mut ctl = GlyphController::new();
        ctl.on_text_changed("3");
        let effects = ctl.on_mode_changed(Mode::Letters);

        assert_eq!(effects, vec![Effect::FocusInput(Mode::Letters)]);
        assert_eq!(ctl.glyph(), "3");
        assert_eq!(ctl.mode(), Mode::Letters);
    }

    #[test]
    fn test_appear_schedules_focus_only() {
        let mut ctl = GlyphController::new();
        let effects = ctl.on_appear();

        assert_eq!(effects, vec![Effect::ScheduleFocus(FOCUS_DELAY)]);
        assert_eq!(ctl.glyph(), "");
    }

    #[test]
    fn test_focus_delay_targets_current_mode() {
        let mut ctl = GlyphController::new();
        ctl.on_appear();

        // Default mode: the digit surface gets focus
        assert_eq!(
            ctl.on_focus_delay_elapsed(),
            vec![Effect::FocusInput(Mode::Digits)]
        );

        // Mode switched before the delay elapsed: focus follows
        ctl.on_mode_changed(Mode::Letters);
        assert_eq!(
            ctl.on_focus_delay_elapsed(),
            vec![Effect::FocusInput(Mode::Letters)]
        );
    }

    #[test]
    fn test_startup_focus_scenario() {
        use crate::{FocusTimer, InputRouter};
        use std::time::Instant;

        let mut ctl = GlyphController::new();
        let mut router = InputRouter::new();
        let mut timer = FocusTimer::new();
        let t0 = Instant::now();

        for effect in ctl.on_appear() {
            if let Effect::ScheduleFocus(delay) = effect {
                timer.schedule(t0, delay);
            }
        }
        // Keys are dead until the delay elapses
        assert_eq!(router.focus(), None);

        assert!(timer.fire_if_due(t0 + FOCUS_DELAY));
        for effect in ctl.on_focus_delay_elapsed() {
            if let Effect::FocusInput(mode) = effect {
                router.set_focus(mode);
            }
        }
        assert_eq!(router.focus(), Some(Mode::Digits));
    }

    #[test]
    fn test_defaults() {
        let ctl = GlyphController::new();
        assert_eq!(ctl.mode(), Mode::Digits);
        assert_eq!(ctl.language(), Language::English);
        assert_eq!(ctl.input_buffer(), "");
        assert_eq!(ctl.glyph(), "");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en-GB");
        assert_eq!(Language::German.code(), "de-DE");
    }
}
