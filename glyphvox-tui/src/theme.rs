//! Color themes for GlyphVox

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    /// Primary foreground color (text, labels)
    pub fg: Color,
    /// Dimmed foreground (hints, inactive segments)
    pub fg_dim: Color,
    /// Background color
    pub bg: Color,
    /// Highlight color (active selector segments)
    pub highlight: Color,
    /// Accent color (panel frame, success messages)
    pub accent: Color,
    /// Warning color
    pub warning: Color,
    /// Error color
    pub danger: Color,
    /// The big glyph itself
    pub glyph: Color,
}

impl Theme {
    /// Get style for normal text
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Get style for dimmed text
    pub fn dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Get style for highlighted/selected items
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for borders
    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the rendered glyph blocks
    pub fn glyph_style(&self) -> Style {
        Style::default().fg(self.glyph).add_modifier(Modifier::BOLD)
    }

    /// Get style for an active selector segment
    pub fn segment_active(&self) -> Style {
        self.highlight()
    }

    /// Get style for an inactive selector segment
    pub fn segment_inactive(&self) -> Style {
        self.dim()
    }
}

/// Bright daylight theme: blue glyph on a warm frame, like a toy
pub const SUNSHINE: Theme = Theme {
    name: "sunshine",
    fg: Color::Rgb(235, 235, 225),      // warm off-white
    fg_dim: Color::Rgb(130, 125, 110),  // faded sand
    bg: Color::Rgb(18, 12, 4),          // near black with amber tint
    highlight: Color::Rgb(80, 220, 60), // picker green
    accent: Color::Rgb(255, 160, 40),   // panel orange
    warning: Color::Rgb(255, 220, 80),  // yellow
    danger: Color::Rgb(255, 90, 90),    // red
    glyph: Color::Rgb(90, 150, 255),    // glyph blue
};

/// Low-light theme for bedtime use
pub const MIDNIGHT: Theme = Theme {
    name: "midnight",
    fg: Color::Rgb(180, 185, 200),
    fg_dim: Color::Rgb(90, 95, 110),
    bg: Color::Rgb(4, 6, 14),
    highlight: Color::Rgb(120, 180, 255),
    accent: Color::Rgb(100, 90, 200),
    warning: Color::Rgb(230, 200, 90),
    danger: Color::Rgb(230, 100, 100),
    glyph: Color::Rgb(220, 220, 160),
};

impl Default for Theme {
    fn default() -> Self {
        SUNSHINE
    }
}
