use super::celebration::Celebration;
use crate::{
    components::{canvas::PixelCanvas, pixel_art},
    constants::{
        palette,
        scene::{self, BANNER_HEIGHT, BANNER_OFFSET, BANNER_WIDTH},
        GRID_WIDTH, PIXEL_SIZE,
    },
};

/// Santa's sleigh crossing the sky from left to right, pulled by three
/// reindeer and, while celebrating, trailing a banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Sleigh {
    x: f32,
}

impl Default for Sleigh {
    fn default() -> Self {
        Self::new(scene::SLEIGH_START_X)
    }
}

impl Sleigh {
    pub fn new(x: f32) -> Self {
        Self { x }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn column(&self) -> i32 {
        self.x.floor() as i32
    }

    /// Surface position where a dropped gift appears.
    pub fn gift_origin(&self) -> (f32, f32) {
        ((self.column() - 4) as f32 * PIXEL_SIZE, scene::GIFT_DROP_ROW as f32 * PIXEL_SIZE)
    }

    /// Moves one step right. Returns true when the sleigh (and the banner, if
    /// one is trailing) has left the grid and was sent back to the left.
    pub fn advance(&mut self, banner_active: bool) -> bool {
        self.x += scene::SLEIGH_STEP;

        let gone = if banner_active {
            self.x - BANNER_OFFSET as f32 > GRID_WIDTH as f32
        } else {
            self.x > scene::SLEIGH_EXIT_X
        };
        if gone {
            self.x = scene::SLEIGH_RESET_X;
        }
        gone
    }

    pub fn draw(&self, canvas: &mut PixelCanvas, celebration: &Celebration) {
        let (x, y) = (self.column(), scene::SLEIGH_ROW);

        if celebration.banner_visible() {
            draw_banner(canvas, x - BANNER_OFFSET, y + 3);
        }

        pixel_art::paint(
            canvas,
            x - 17,
            y - 1,
            scene::SLEIGH_ART,
            &[('R', palette::RED), ('S', palette::SILVER), ('Y', palette::YELLOW)],
        );
        pixel_art::paint(
            canvas,
            x - 14,
            y - 9,
            scene::SANTA_ART,
            &[('W', palette::SNOW), ('R', palette::RED), ('S', palette::WHEAT), ('K', palette::BLACK)],
        );
        for offset in scene::REINDEER_OFFSETS {
            pixel_art::paint(
                canvas,
                x + offset - 1,
                y - 3,
                scene::REINDEER_ART,
                &[
                    ('D', palette::FUR_DARK),
                    ('M', palette::FUR),
                    ('L', palette::FUR_LIGHT),
                    ('K', palette::BLACK),
                    ('R', palette::RED),
                    ('Y', palette::YELLOW),
                ],
            );
        }
        for (from, to) in scene::REIN_SPANS {
            canvas.fill_rect(x + from, y + 6, to - from + 1, 1, palette::ROPE);
        }
    }
}

fn draw_banner(canvas: &mut PixelCanvas, x: i32, y: i32) {
    canvas.fill_rect(x, y, BANNER_WIDTH, BANNER_HEIGHT, palette::SNOW);

    canvas.fill_rect(x, y, BANNER_WIDTH, 1, palette::RED);
    canvas.fill_rect(x, y + BANNER_HEIGHT - 1, BANNER_WIDTH, 1, palette::RED);
    canvas.fill_rect(x, y, 1, BANNER_HEIGHT, palette::RED);
    canvas.fill_rect(x + BANNER_WIDTH - 1, y, 1, BANNER_HEIGHT, palette::RED);

    // Tow line to the back of the sleigh
    canvas.fill_rect(x + BANNER_WIDTH, y + BANNER_HEIGHT / 2, scene::BANNER_ROPE, 1, palette::ROPE);

    pixel_art::paint_text(canvas, x + BANNER_WIDTH / 2, y + BANNER_HEIGHT / 2, scene::BANNER_TEXT, palette::RED);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constants::scene::SLEIGH_RESET_X;

    fn steps_until_wrap(sleigh: &mut Sleigh, banner_active: bool) -> usize {
        (1..10_000).find(|_| sleigh.advance(banner_active)).unwrap_or(0)
    }

    #[test]
    fn test_wraps_after_leaving_grid() {
        let mut sleigh = Sleigh::new(219.5);
        assert!(!sleigh.advance(false));
        assert_eq!(sleigh.x(), 220.0);
        assert!(sleigh.advance(false));
        assert_eq!(sleigh.x(), SLEIGH_RESET_X);
    }

    #[test]
    fn test_banner_delays_wrap() {
        let mut sleigh = Sleigh::new(SLEIGH_RESET_X);
        // -50 -> 220.5 without a banner, -50 -> 280.5 with one
        assert_eq!(steps_until_wrap(&mut sleigh, false), 541);
        assert_eq!(steps_until_wrap(&mut sleigh, true), 661);
    }

    #[test]
    fn test_gift_origin_trails_sleigh() {
        assert_eq!(Sleigh::new(50.7).gift_origin(), (184.0, 120.0));
        assert_eq!(Sleigh::new(-20.0).gift_origin(), (-96.0, 120.0));
    }

    #[test]
    fn test_draw_with_and_without_banner() {
        let sleigh = Sleigh::new(120.0);
        let (x, y) = (120, scene::SLEIGH_ROW);

        let mut canvas = PixelCanvas::default();
        sleigh.draw(&mut canvas, &Celebration::default());
        // Santa's face and nose, the runner tip and the reins
        assert_eq!(canvas.get(x - 12, y - 4), Some(palette::WHEAT));
        assert_eq!(canvas.get(x - 13 + 4, y + 2 - 5), Some(palette::RED));
        assert_eq!(canvas.get(x - 10 + 9, y + 5 + 4), Some(palette::SILVER));
        assert_eq!(canvas.get(x + 16, y + 6), Some(palette::ROPE));
        // First reindeer's nose
        assert_eq!(canvas.get(x + 8 + 9, y + 1), Some(palette::RED));
        assert_eq!(canvas.get(x - 80, y + 3), Some(palette::BACKGROUND));

        let celebrating = Celebration { exploded_gifts: 5, banner_active: true, banner_cycles: 0 };
        let mut canvas = PixelCanvas::default();
        sleigh.draw(&mut canvas, &celebrating);
        assert_eq!(canvas.get(x - 80, y + 3), Some(palette::RED));
        assert_eq!(canvas.get(x - 79, y + 4), Some(palette::SNOW));
        assert_eq!(canvas.get(x - 80 + 55, y + 8), Some(palette::ROPE));
    }
}
