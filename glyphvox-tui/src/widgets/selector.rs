//! Segmented selector widgets - mode (123/ABC) and language (EN/DE)

use glyphvox_core::{Language, Mode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Build a two-segment picker line, the active segment highlighted
fn segmented_line<'a>(
    segments: [(&'a str, bool); 2],
    theme: &Theme,
) -> Line<'a> {
    let mut spans = Vec::with_capacity(5);
    for (i, (label, active)) in segments.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", theme.dim()));
        }
        let style = if active {
            theme.segment_active()
        } else {
            theme.segment_inactive()
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }
    Line::from(spans)
}

/// Picker for the active input surface
pub struct ModeSelectorWidget<'a> {
    mode: Mode,
    theme: &'a Theme,
}

impl<'a> ModeSelectorWidget<'a> {
    pub fn new(mode: Mode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }
}

impl Widget for ModeSelectorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let line = segmented_line(
            [
                (Mode::Digits.display_name(), self.mode == Mode::Digits),
                (Mode::Letters.display_name(), self.mode == Mode::Letters),
            ],
            self.theme,
        );
        Paragraph::new(line)
            .alignment(Alignment::Left)
            .render(area, buf);
    }
}

/// Picker for the speech language
pub struct LanguageSelectorWidget<'a> {
    language: Language,
    theme: &'a Theme,
}

impl<'a> LanguageSelectorWidget<'a> {
    pub fn new(language: Language, theme: &'a Theme) -> Self {
        Self { language, theme }
    }
}

impl Widget for LanguageSelectorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let line = segmented_line(
            [
                (
                    Language::English.display_name(),
                    self.language == Language::English,
                ),
                (
                    Language::German.display_name(),
                    self.language == Language::German,
                ),
            ],
            self.theme,
        );
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
