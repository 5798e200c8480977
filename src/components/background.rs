use rand::prelude::*;

use super::{canvas::PixelCanvas, pixel_art};
use crate::constants::{
    background::{self, HouseStyle},
    palette, GRID_HEIGHT, GRID_WIDTH, GROUND_ROW,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyStar {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

/// The far layers of the scene: sky stars, moon, ground, houses and the tree.
/// Only the star field is random, and it is sampled once.
#[derive(Debug, Clone)]
pub struct Background {
    stars: Vec<SkyStar>,
}

impl Background {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stars = (0..background::SKY_STAR_COUNT)
            .map(|_| SkyStar {
                x: rng.gen_range(0..GRID_WIDTH),
                y: rng.gen_range(0..background::SKY_STAR_MAX_ROW),
                size: if rng.gen_bool(background::SKY_STAR_LARGE_PROBABILITY) { 2 } else { 1 },
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[SkyStar] {
        &self.stars
    }

    pub fn render(&self, canvas: &mut PixelCanvas) {
        self.render_stars(canvas);
        render_moon(canvas);
        render_ground(canvas);
        for house in background::HOUSES.iter() {
            render_house(canvas, house);
        }
        render_tree(canvas);
    }

    fn render_stars(&self, canvas: &mut PixelCanvas) {
        for star in self.stars.iter() {
            canvas.fill_block(star.x, star.y, star.size, palette::STAR);
        }
    }
}

fn render_moon(canvas: &mut PixelCanvas) {
    let (cx, cy, r) = (background::MOON_X, background::MOON_Y, background::MOON_RADIUS);
    for y in -r..=r {
        for x in -r..=r {
            if x * x + y * y <= r * r {
                canvas.draw_pixel(cx + x, cy + y, palette::SNOW);
            }
        }
    }
    for (x, y) in background::MOON_CRATERS {
        canvas.draw_pixel(cx + x, cy + y, palette::CRATER);
    }
}

fn render_ground(canvas: &mut PixelCanvas) {
    canvas.fill_rect(0, GROUND_ROW, GRID_WIDTH, GRID_HEIGHT - GROUND_ROW, palette::DIRT);

    // Patchy snow cover; the modular pattern keeps it stable between frames
    for x in 0..GRID_WIDTH {
        if (x + x / 5) % 7 < 4 {
            canvas.fill_rect(x, GROUND_ROW, 1, 2, palette::SNOW);
        }
        if (x + x / 3) % 11 < 5 {
            canvas.draw_pixel(x, GROUND_ROW + 2, palette::SNOW);
        }
        if (x + x / 7) % 13 < 3 {
            canvas.draw_pixel(x, GROUND_ROW + 3, palette::SNOW);
        }
    }
}

fn render_house(canvas: &mut PixelCanvas, house: &HouseStyle) {
    let HouseStyle { x, y, roof, wall } = *house;

    canvas.fill_rect(x, y, 16, 12, wall);

    for j in 0..10 {
        let half = 10 - j;
        canvas.fill_rect(x + 8 - half, y - 1 - j, half * 2 + 1, 1, roof);
    }

    // Chimney with a snow cap
    canvas.fill_rect(x + 12, y - 10, 3, 5, palette::ROPE);
    canvas.fill_rect(x + 12, y - 11, 3, 1, palette::SNOW);
    canvas.fill_rect(x + 7, y - 10, 3, 1, palette::SNOW);

    canvas.fill_rect(x + 6, y + 5, 4, 7, palette::BROWN);
    canvas.draw_pixel(x + 8, y + 8, palette::YELLOW);

    for left in [x + 1, x + 11] {
        canvas.fill_rect(left, y + 3, 4, 4, palette::LIGHT_BLUE);
        canvas.fill_rect(left, y + 5, 4, 1, palette::WINDOW_FRAME);
        for row in [y + 3, y + 4, y + 6] {
            canvas.draw_pixel(left + 2, row, palette::WINDOW_FRAME);
        }
    }
}

fn render_tree(canvas: &mut PixelCanvas) {
    let (base_x, base_y) = (background::TREE_X, background::TREE_Y);

    canvas.fill_rect(
        base_x - background::TREE_TRUNK_HALF_WIDTH,
        base_y,
        background::TREE_TRUNK_HALF_WIDTH * 2 + 1,
        background::TREE_TRUNK_HEIGHT,
        palette::BROWN,
    );

    for tier in background::TREE_TIERS.iter() {
        let bottom = base_y - tier.lift;
        for y in 0..tier.rows {
            let half = tier.half_width * (tier.rows - y) / tier.rows;
            let green = if (y % 4 < 2) == tier.dark_first { palette::DARK_GREEN } else { palette::LIGHT_GREEN };
            canvas.fill_rect(base_x - half, bottom - y, half * 2 + 1, 1, green);
        }
    }

    pixel_art::paint(canvas, base_x - 3, base_y - 52, background::TREE_STAR, &[('*', palette::STAR)]);
}

/// Snowman standing with the bottom snowball's top row at `(x, y)`.
pub fn render_snowman(canvas: &mut PixelCanvas, x: i32, y: i32) {
    for j in 0..5i32 {
        let half = 4 - (j - 2).abs();
        canvas.fill_rect(x - half, y + j, half * 2 + 1, 1, palette::SNOW);
    }
    for j in 0..4 {
        let half = (3.0 - (j as f32 - 1.5).abs()).floor() as i32;
        canvas.fill_rect(x - half, y - 4 + j, half * 2 + 1, 1, palette::SNOW);
    }
    for j in 0..3i32 {
        let half = 2 - (j - 1).abs();
        canvas.fill_rect(x - half, y - 7 + j, half * 2 + 1, 1, palette::SNOW);
    }

    canvas.draw_pixel(x - 1, y - 6, palette::BLACK);
    canvas.draw_pixel(x + 1, y - 6, palette::BLACK);
    canvas.draw_pixel(x, y - 5, palette::ORANGE);
    for row in [y - 3, y - 1, y + 1] {
        canvas.draw_pixel(x, row, palette::BLACK);
    }

    canvas.fill_rect(x - 2, y - 8, 5, 1, palette::BLACK);
    canvas.fill_rect(x - 1, y - 10, 3, 2, palette::BLACK);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;

    use super::*;
    use crate::constants::background::{SNOWMAN_X, SNOWMAN_Y};

    fn painted() -> (Background, PixelCanvas) {
        let mut rng = StdRng::seed_from_u64(3);
        let background = Background::new(&mut rng);
        let mut canvas = PixelCanvas::default();
        background.render(&mut canvas);
        (background, canvas)
    }

    #[test]
    fn test_stars_stay_in_upper_sky() {
        let (background, _) = painted();
        assert_eq!(background.stars().len(), background::SKY_STAR_COUNT);
        for star in background.stars() {
            assert!((0..GRID_WIDTH).contains(&star.x));
            assert!((0..background::SKY_STAR_MAX_ROW).contains(&star.y));
            assert!(star.size == 1 || star.size == 2);
        }
    }

    #[test]
    fn test_ground_has_snow_patches() {
        let (_, canvas) = painted();
        assert_eq!(canvas.get(0, GROUND_ROW), Some(palette::SNOW));
        assert_eq!(canvas.get(4, GROUND_ROW), Some(palette::DIRT));
        assert_eq!(canvas.get(0, GRID_HEIGHT - 1), Some(palette::DIRT));
    }

    #[test]
    fn test_moon_and_tree_star() {
        let (_, canvas) = painted();
        assert_eq!(canvas.get(background::MOON_X, background::MOON_Y), Some(palette::SNOW));
        assert_eq!(canvas.get(background::MOON_X - 3, background::MOON_Y - 2), Some(palette::CRATER));
        assert_eq!(canvas.get(background::TREE_X, background::TREE_Y - 52), Some(palette::STAR));
        assert_eq!(canvas.get(background::TREE_X, background::TREE_Y + 5), Some(palette::BROWN));
    }

    #[test]
    fn test_house_details() {
        let (_, canvas) = painted();
        let house = &background::HOUSES[1];
        assert_eq!(canvas.get(house.x + 8, house.y + 8), Some(palette::YELLOW));
        assert_eq!(canvas.get(house.x + 13, house.y - 11), Some(palette::SNOW));
        assert_eq!(canvas.get(house.x + 8, house.y - 5), Some(house.roof));
        assert_eq!(canvas.get(house.x + 2, house.y + 3), Some(palette::LIGHT_BLUE));
    }

    #[test]
    fn test_snowman_face() {
        let mut canvas = PixelCanvas::default();
        render_snowman(&mut canvas, SNOWMAN_X, SNOWMAN_Y);
        assert_eq!(canvas.get(SNOWMAN_X, SNOWMAN_Y - 5), Some(palette::ORANGE));
        assert_eq!(canvas.get(SNOWMAN_X - 1, SNOWMAN_Y - 6), Some(palette::BLACK));
        assert_eq!(canvas.get(SNOWMAN_X + 4, SNOWMAN_Y + 2), Some(palette::SNOW));
        assert_eq!(canvas.get(SNOWMAN_X, SNOWMAN_Y - 10), Some(palette::BLACK));
    }
}
