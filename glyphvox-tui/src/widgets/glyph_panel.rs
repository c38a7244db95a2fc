//! Glyph panel widget - the huge character in the middle of the screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use super::font;
use crate::theme::Theme;

/// Widget rendering the current glyph scaled up from the built-in block
/// font. `scale` below 1.0 shrinks the glyph for the pop-in animation.
pub struct GlyphPanelWidget<'a> {
    glyph: &'a str,
    theme: &'a Theme,
    scale: f32,
}

impl<'a> GlyphPanelWidget<'a> {
    pub fn new(glyph: &'a str, theme: &'a Theme) -> Self {
        Self {
            glyph,
            theme,
            scale: 1.0,
        }
    }

    /// Animation scale, 0.1-1.0
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale.clamp(0.1, 1.0);
        self
    }
}

impl Widget for GlyphPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 7 || inner.height < 3 {
            return;
        }

        if self.glyph.is_empty() {
            render_prompt(inner, buf, self.theme);
            return;
        }

        let chars: Vec<char> = self.glyph.chars().collect();
        let n = chars.len() as u16;
        // 1 font pixel of spacing between characters
        let px_w = n * font::GLYPH_WIDTH + (n - 1);
        let px_h = font::GLYPH_HEIGHT;

        // Terminal cells are roughly twice as tall as wide; aim for
        // cell_w = 2 * cell_h, capped by the panel size
        let cell_h = (inner.height / px_h)
            .min(inner.width / (px_w * 2))
            .max(1);
        let cell_w = (cell_h * 2).min(inner.width / px_w).max(1);

        // Pop-in: shrink both dimensions, never below one cell
        let cell_h = ((cell_h as f32 * self.scale) as u16).max(1);
        let cell_w = ((cell_w as f32 * self.scale) as u16).max(1);

        let total_w = px_w * cell_w;
        let total_h = px_h * cell_h;
        let origin_x = inner.x + inner.width.saturating_sub(total_w) / 2;
        let origin_y = inner.y + inner.height.saturating_sub(total_h) / 2;

        for (i, &c) in chars.iter().enumerate() {
            let char_x = origin_x + i as u16 * (font::GLYPH_WIDTH + 1) * cell_w;
            match font::rows(c) {
                Some(rows) => {
                    render_bitmap(inner, buf, self.theme, rows, char_x, origin_y, cell_w, cell_h)
                }
                // No pattern: draw the character itself, centered in its box
                None => {
                    let x = char_x + font::GLYPH_WIDTH * cell_w / 2;
                    let y = origin_y + font::GLYPH_HEIGHT * cell_h / 2;
                    if x < inner.right() && y < inner.bottom() {
                        buf[(x, y)].set_char(c).set_style(self.theme.glyph_style());
                    }
                }
            }
        }
    }
}

/// Dim hint shown while no glyph is held
fn render_prompt(inner: Rect, buf: &mut Buffer, theme: &Theme) {
    let prompt = "· · ·";
    let len = prompt.chars().count() as u16;
    let x0 = inner.x + inner.width.saturating_sub(len) / 2;
    let y = inner.y + inner.height / 2;
    for (i, ch) in prompt.chars().enumerate() {
        let x = x0 + i as u16;
        if x < inner.right() {
            buf[(x, y)].set_char(ch).set_style(theme.dim());
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_bitmap(
    inner: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    rows: [u8; 7],
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
) {
    let style = theme.glyph_style();
    for (ry, &row) in rows.iter().enumerate() {
        for cx in 0..font::GLYPH_WIDTH {
            if row >> (font::GLYPH_WIDTH - 1 - cx) & 1 == 0 {
                continue;
            }
            // One font pixel becomes a cell_w x cell_h block
            for dy in 0..cell_h {
                for dx in 0..cell_w {
                    let x = origin_x + cx * cell_w + dx;
                    let y = origin_y + ry as u16 * cell_h + dy;
                    if x < inner.right() && y < inner.bottom() {
                        buf[(x, y)].set_char('█').set_style(style);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SUNSHINE;

    fn block_count(buf: &Buffer, area: Rect) -> usize {
        let mut count = 0;
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if buf[(x, y)].symbol() == "█" {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_renders_blocks_for_known_glyph() {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        GlyphPanelWidget::new("A", &SUNSHINE).render(area, &mut buf);
        assert!(block_count(&buf, area) > 0);
    }

    #[test]
    fn test_empty_glyph_renders_no_blocks() {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        GlyphPanelWidget::new("", &SUNSHINE).render(area, &mut buf);
        assert_eq!(block_count(&buf, area), 0);
    }

    #[test]
    fn test_pop_scale_shrinks_glyph() {
        let area = Rect::new(0, 0, 60, 30);

        let mut full = Buffer::empty(area);
        GlyphPanelWidget::new("A", &SUNSHINE).render(area, &mut full);

        let mut small = Buffer::empty(area);
        GlyphPanelWidget::new("A", &SUNSHINE)
            .scale(0.4)
            .render(area, &mut small);

        assert!(block_count(&small, area) < block_count(&full, area));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        GlyphPanelWidget::new("W", &SUNSHINE).render(area, &mut buf);
    }

    #[test]
    fn test_expanded_glyph_renders_both_characters() {
        // "ß".to_uppercase() == "SS": two characters side by side
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        GlyphPanelWidget::new("SS", &SUNSHINE).render(area, &mut buf);
        assert!(block_count(&buf, area) > 0);
    }
}
