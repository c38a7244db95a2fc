//! The two invisible input surfaces: focus routing and key filtering

use crossterm::event::{KeyCode, KeyEvent};

use crate::controller::Mode;

/// Routes key presses to the focused input surface.
///
/// Mirrors the original screen's pair of hidden text fields: a digit-only
/// surface and an alphabet surface, mutually exclusive by focus, both
/// bound to one shared text buffer. Until focus is first routed (the
/// startup delay), keys are dropped.
pub struct InputRouter {
    focus: Option<Mode>,
    buffer: String,
}

impl InputRouter {
    pub fn new() -> Self {
        Self {
            focus: None,
            buffer: String::new(),
        }
    }

    /// The surface currently holding focus, if any
    pub fn focus(&self) -> Option<Mode> {
        self.focus
    }

    /// Move focus to the given surface; the other one loses it implicitly
    pub fn set_focus(&mut self, mode: Mode) {
        self.focus = Some(mode);
    }

    /// Shared text buffer
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Feed a key event to the focused surface.
    ///
    /// Returns the updated buffer when the surface accepted the key, so
    /// the caller can dispatch a text-changed event. Keys the surface
    /// does not accept (and all keys while unfocused) are swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        let surface = self.focus?;

        match key.code {
            KeyCode::Char(c) if surface_accepts(surface, c) => {
                self.buffer.push(c);
                Some(self.buffer.clone())
            }
            KeyCode::Backspace => {
                self.buffer.pop()?;
                Some(self.buffer.clone())
            }
            _ => None,
        }
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Which characters each surface's keyboard produces
fn surface_accepts(surface: Mode, c: char) -> bool {
    match surface {
        Mode::Digits => c.is_ascii_digit(),
        // Alphabetic covers umlauts and sharp s for the German keyboard
        Mode::Letters => c.is_alphabetic(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_unfocused_router_drops_keys() {
        let mut router = InputRouter::new();
        assert_eq!(router.handle_key(press(KeyCode::Char('7'))), None);
        assert_eq!(router.buffer(), "");
    }

    #[test]
    fn test_digit_surface_accepts_digits_only() {
        let mut router = InputRouter::new();
        router.set_focus(Mode::Digits);

        assert_eq!(
            router.handle_key(press(KeyCode::Char('7'))),
            Some("7".to_string())
        );
        assert_eq!(router.handle_key(press(KeyCode::Char('a'))), None);
        assert_eq!(router.buffer(), "7");
    }

    #[test]
    fn test_letter_surface_accepts_letters_only() {
        let mut router = InputRouter::new();
        router.set_focus(Mode::Letters);

        assert_eq!(
            router.handle_key(press(KeyCode::Char('b'))),
            Some("b".to_string())
        );
        assert_eq!(router.handle_key(press(KeyCode::Char('4'))), None);
    }

    #[test]
    fn test_letter_surface_accepts_umlauts() {
        let mut router = InputRouter::new();
        router.set_focus(Mode::Letters);

        assert_eq!(
            router.handle_key(press(KeyCode::Char('ö'))),
            Some("ö".to_string())
        );
    }

    #[test]
    fn test_buffer_survives_focus_switch() {
        let mut router = InputRouter::new();
        router.set_focus(Mode::Digits);
        router.handle_key(press(KeyCode::Char('1')));

        // Both surfaces share the one buffer
        router.set_focus(Mode::Letters);
        assert_eq!(
            router.handle_key(press(KeyCode::Char('a'))),
            Some("1a".to_string())
        );
    }

    #[test]
    fn test_backspace_pops_and_reports() {
        let mut router = InputRouter::new();
        router.set_focus(Mode::Digits);
        router.handle_key(press(KeyCode::Char('1')));
        router.handle_key(press(KeyCode::Char('2')));

        assert_eq!(
            router.handle_key(press(KeyCode::Backspace)),
            Some("1".to_string())
        );
        assert_eq!(
            router.handle_key(press(KeyCode::Backspace)),
            Some(String::new())
        );
        // Backspace on an empty buffer is not an event
        assert_eq!(router.handle_key(press(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_non_character_keys_ignored() {
        let mut router = InputRouter::new();
        router.set_focus(Mode::Letters);

        assert_eq!(router.handle_key(press(KeyCode::Enter)), None);
        assert_eq!(router.handle_key(press(KeyCode::Tab)), None);
        assert_eq!(router.handle_key(press(KeyCode::Esc)), None);
    }
}
