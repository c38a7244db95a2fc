//! Status bar widget - focus indicator, last utterance, key hints

use glyphvox_core::{Language, Mode};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::MessageType;
use crate::theme::Theme;

/// Widget for the bottom status row
pub struct StatusBarWidget<'a> {
    focus: Option<Mode>,
    language: Language,
    theme: &'a Theme,
    message: Option<&'a str>,
    message_type: MessageType,
    last_utterance: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(focus: Option<Mode>, language: Language, theme: &'a Theme) -> Self {
        Self {
            focus,
            language,
            theme,
            message: None,
            message_type: MessageType::Info,
            last_utterance: None,
        }
    }

    pub fn message(mut self, msg: Option<&'a str>, msg_type: MessageType) -> Self {
        self.message = msg;
        self.message_type = msg_type;
        self
    }

    pub fn last_utterance(mut self, utterance: Option<&'a str>) -> Self {
        self.last_utterance = utterance;
        self
    }

    fn focus_string(&self) -> (String, Style) {
        match self.focus {
            Some(mode) => (
                format!("[{}]", mode.display_name()),
                self.theme.highlight(),
            ),
            // The startup focus delay has not elapsed yet
            None => ("[...]".to_string(), self.theme.dim()),
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let chunks = Layout::horizontal([
            Constraint::Length(10), // Focus indicator
            Constraint::Min(20),    // Message / last utterance
            Constraint::Length(32), // Key hints
        ])
        .split(area);

        // Focus indicator plus language code
        let (focus_text, focus_style) = self.focus_string();
        let focus_line = Line::from(vec![
            Span::styled(focus_text, focus_style),
            Span::raw(" "),
            Span::styled(self.language.code(), self.theme.dim()),
        ]);
        Paragraph::new(focus_line).render(chunks[0], buf);

        // Message takes precedence over the last utterance
        let content = if let Some(msg) = self.message {
            let msg_style = match self.message_type {
                MessageType::Info => self.theme.dim(),
                MessageType::Success => Style::from(self.theme.accent),
                MessageType::Warning => Style::default().fg(self.theme.warning),
                MessageType::Error => Style::default().fg(self.theme.danger),
            };
            Line::from(Span::styled(msg, msg_style))
        } else if let Some(utterance) = self.last_utterance {
            Line::from(vec![
                Span::styled("spoke ", self.theme.dim()),
                Span::styled(utterance, self.theme.normal()),
            ])
        } else {
            Line::from(Span::styled(
                "Press a key to hear it",
                self.theme.dim(),
            ))
        };
        Paragraph::new(content).render(chunks[1], buf);

        // Key hints
        let help = "Tab:123/ABC  ←→:lang  Ctrl-Q:quit";
        Paragraph::new(Line::from(Span::styled(help, self.theme.dim())))
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SUNSHINE;

    fn row_text(buf: &Buffer, area: Rect) -> String {
        (area.x..area.right())
            .map(|x| buf[(x, area.y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_unfocused_shows_placeholder() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(None, Language::English, &SUNSHINE).render(area, &mut buf);

        let text = row_text(&buf, area);
        assert!(text.contains("[...]"));
        assert!(text.contains("en-GB"));
    }

    #[test]
    fn test_focused_shows_surface_name() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Some(Mode::Letters), Language::German, &SUNSHINE)
            .render(area, &mut buf);

        let text = row_text(&buf, area);
        assert!(text.contains("[ABC]"));
        assert!(text.contains("de-DE"));
    }

    #[test]
    fn test_message_beats_last_utterance() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Some(Mode::Digits), Language::English, &SUNSHINE)
            .message(Some("Speech: engine gone"), MessageType::Error)
            .last_utterance(Some("\"a\" (en-GB)"))
            .render(area, &mut buf);

        let text = row_text(&buf, area);
        assert!(text.contains("engine gone"));
        assert!(!text.contains("spoke"));
    }
}
