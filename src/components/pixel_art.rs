use ratatui::style::Color;

use super::canvas::PixelCanvas;
use crate::constants::scene::{GLYPHS, GLYPH_HEIGHT, GLYPH_SPACING};

/// Cell marker that leaves the canvas untouched.
pub const TRANSPARENT: char = '.';

fn filter_text(text: &str) -> Vec<&str> {
    text.lines().filter(|s| !s.is_empty()).collect()
}

/// Paints a text-art sprite with its upper-left corner at `(x, y)`. Every
/// character is looked up in `legend`; `.` and characters missing from the
/// legend are skipped.
pub fn paint(canvas: &mut PixelCanvas, x: i32, y: i32, art: &str, legend: &[(char, Color)]) {
    for (row, line) in filter_text(art).into_iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            if c == TRANSPARENT {
                continue;
            }
            if let Some((_, color)) = legend.iter().find(|(key, _)| *key == c) {
                canvas.draw_pixel(x + col as i32, y + row as i32, *color);
            }
        }
    }
}

/// Width and height of a text-art sprite in cells.
pub fn size(art: &str) -> (i32, i32) {
    let lines = filter_text(art);
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as i32;
    (width, lines.len() as i32)
}

fn glyph(c: char) -> Option<&'static str> {
    GLYPHS.iter().find(|(key, _)| *key == c.to_ascii_uppercase()).map(|(_, art)| *art)
}

/// Width of `text` in cells when set in the built-in pixel font.
pub fn text_width(text: &str) -> i32 {
    let widths: Vec<i32> = text.chars().filter_map(glyph).map(|art| size(art).0).collect();
    widths.iter().sum::<i32>() + GLYPH_SPACING * (widths.len() as i32 - 1).max(0)
}

/// Writes `text` centred on `(center_x, center_y)` in the pixel font.
/// Characters without a glyph are dropped.
pub fn paint_text(canvas: &mut PixelCanvas, center_x: i32, center_y: i32, text: &str, color: Color) {
    let mut x = center_x - text_width(text) / 2;
    let y = center_y - GLYPH_HEIGHT / 2;
    for art in text.chars().filter_map(glyph) {
        paint(canvas, x, y, art, &[('#', color)]);
        x += size(art).0 + GLYPH_SPACING;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const INK: Color = Color::Rgb(1, 2, 3);
    const PAPER: Color = Color::Rgb(9, 9, 9);

    #[test]
    fn test_paint_skips_transparent_cells() {
        let mut canvas = PixelCanvas::new(4, 4, PAPER);
        paint(&mut canvas, 1, 1, "\n#.\n.#\n", &[('#', INK)]);

        assert_eq!(canvas.get(1, 1), Some(INK));
        assert_eq!(canvas.get(2, 1), Some(PAPER));
        assert_eq!(canvas.get(2, 2), Some(INK));
    }

    #[test]
    fn test_size_ignores_blank_lines() {
        assert_eq!(size("\n###\n#\n\n"), (3, 2));
    }

    #[test]
    fn test_text_width() {
        // M(5) + A(3) + S(3) with two gaps
        assert_eq!(text_width("mas"), 13);
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("?"), 0);
    }

    #[test]
    fn test_paint_text_is_centred() {
        let mut canvas = PixelCanvas::new(20, 10, PAPER);
        paint_text(&mut canvas, 10, 5, "E", INK);

        // "E" is three cells wide, so it spans columns 9..=11 and rows 3..=7
        assert_eq!(canvas.get(9, 3), Some(INK));
        assert_eq!(canvas.get(11, 3), Some(INK));
        assert_eq!(canvas.get(10, 4), Some(PAPER));
        assert_eq!(canvas.get(9, 7), Some(INK));
        assert_eq!(canvas.get(8, 3), Some(PAPER));
    }
}
