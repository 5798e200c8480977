use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

use crate::constants::{palette, GRID_HEIGHT, GRID_WIDTH, PIXEL_SIZE};

/// Maps a surface coordinate onto the grid cell that contains it.
pub fn to_grid(v: f32) -> i32 {
    (v / PIXEL_SIZE).floor() as i32
}

/// Fixed-resolution grid of colored cells. Everything in the scene is drawn
/// as axis-aligned blocks of cells; writes outside the grid are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: i32,
    height: i32,
    cells: Vec<Color>,
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT, palette::BACKGROUND)
    }
}

impl PixelCanvas {
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self { width: width.max(0), height: height.max(0), cells: vec![background; len] }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.cells.fill(color);
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.cells[i])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }

    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = color;
        }
    }

    pub fn fill_block(&mut self, x: i32, y: i32, size: i32, color: Color) {
        self.fill_rect(x, y, size, size, color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.fill_rect_alpha(x, y, width, height, color, 1.0);
    }

    /// Composites `color` over the existing cells with the given opacity.
    pub fn fill_rect_alpha(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }

        let left = x.max(0);
        let top = y.max(0);
        let right = (x + width).min(self.width);
        let bottom = (y + height).min(self.height);

        for row in top..bottom {
            for col in left..right {
                let i = (row * self.width + col) as usize;
                self.cells[i] = blend(self.cells[i], color, alpha);
            }
        }
    }

    /// Color shown at a virtual pixel of a `width x height` viewport the grid
    /// has been fitted into, or `None` for letterbox space.
    fn sample(&self, x: u16, y: u16, viewport: &Viewport) -> Option<Color> {
        let (x, y) = (x.checked_sub(viewport.x)?, y.checked_sub(viewport.y)?);
        if x >= viewport.width || y >= viewport.height {
            return None;
        }
        let col = ((x as f32 / viewport.scale) as i32).min(self.width - 1);
        let row = ((y as f32 / viewport.scale) as i32).min(self.height - 1);
        self.get(col, row)
    }
}

fn blend(under: Color, over: Color, alpha: f32) -> Color {
    if alpha >= 1.0 {
        return over;
    }
    match (under, over) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * alpha).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        },
        _ if alpha >= 0.5 => over,
        _ => under,
    }
}

/// Placement of the grid inside a terminal area measured in virtual pixels
/// (one column wide, half a row tall).
#[derive(Debug, PartialEq)]
struct Viewport {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    scale: f32,
}

impl Viewport {
    fn fit(area: Rect, grid_width: i32, grid_height: i32) -> Option<Self> {
        let columns = area.width;
        let rows = area.height.saturating_mul(2);
        if columns == 0 || rows == 0 || grid_width == 0 || grid_height == 0 {
            return None;
        }

        let scale = (columns as f32 / grid_width as f32).min(rows as f32 / grid_height as f32);
        let width = ((grid_width as f32 * scale) as u16).max(1);
        let height = ((grid_height as f32 * scale) as u16).max(1);

        Some(Self { x: (columns - width.min(columns)) / 2, y: (rows - height.min(rows)) / 2, width, height, scale })
    }
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let Some(viewport) = Viewport::fit(area, self.width, self.height) else {
            return;
        };

        for row in 0..area.height {
            for col in 0..area.width {
                let upper = self.sample(col, row * 2, &viewport).unwrap_or(Color::Black);
                let lower = self.sample(col, row * 2 + 1, &viewport).unwrap_or(Color::Black);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol("▀").set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fill_block_clips_to_grid() {
        let mut canvas = PixelCanvas::new(4, 4, Color::Rgb(0, 0, 0));
        canvas.fill_block(3, 3, 2, Color::Rgb(255, 0, 0));
        canvas.fill_block(-1, -1, 2, Color::Rgb(0, 255, 0));

        assert_eq!(canvas.get(3, 3), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(canvas.get(0, 0), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(canvas.get(1, 1), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(canvas.get(4, 4), None);
    }

    #[test]
    fn test_alpha_blends_channels() {
        let mut canvas = PixelCanvas::new(1, 1, Color::Rgb(0, 0, 0));
        canvas.fill_rect_alpha(0, 0, 1, 1, Color::Rgb(200, 100, 50), 0.5);
        assert_eq!(canvas.get(0, 0), Some(Color::Rgb(100, 50, 25)));

        canvas.fill_rect_alpha(0, 0, 1, 1, Color::Rgb(255, 255, 255), 0.0);
        assert_eq!(canvas.get(0, 0), Some(Color::Rgb(100, 50, 25)));
    }

    #[test]
    fn test_to_grid_floors() {
        assert_eq!(to_grid(7.9), 1);
        assert_eq!(to_grid(8.0), 2);
        assert_eq!(to_grid(-0.5), -1);
    }

    #[test]
    fn test_render_half_blocks() {
        let mut canvas = PixelCanvas::new(2, 2, Color::Rgb(0, 0, 0));
        canvas.draw_pixel(0, 0, Color::Rgb(255, 0, 0));
        canvas.draw_pixel(0, 1, Color::Rgb(0, 0, 255));

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        (&canvas).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
        assert_eq!(buf[(1, 0)].fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_viewport_letterboxes() {
        let viewport = Viewport::fit(Rect::new(0, 0, 100, 25), 200, 150).unwrap();
        assert_eq!(viewport, Viewport { x: 17, y: 0, width: 66, height: 50, scale: 50.0 / 150.0 });
    }
}
