use ratatui::style::Color;

use super::palette;

pub const SKY_STAR_COUNT: usize = 40;
/// Stars only cover the upper two thirds of the sky.
pub const SKY_STAR_MAX_ROW: i32 = 115 * 2 / 3;
pub const SKY_STAR_LARGE_PROBABILITY: f64 = 0.3;

pub const MOON_X: i32 = 20;
pub const MOON_Y: i32 = 15;
pub const MOON_RADIUS: i32 = 8;
pub const MOON_CRATERS: [(i32, i32); 9] = [(-3, -2), (-4, -2), (-3, -1), (-4, -1), (2, 3), (3, 3), (2, 2), (-1, -4), (-2, -4)];

#[derive(Debug, Clone, Copy)]
pub struct HouseStyle {
    pub x: i32,
    pub y: i32,
    pub roof: Color,
    pub wall: Color,
}

pub const HOUSES: [HouseStyle; 3] = [
    HouseStyle { x: 10, y: 106, roof: palette::RED, wall: palette::TAN },
    HouseStyle { x: 95, y: 106, roof: palette::MAROON, wall: palette::WHEAT },
    HouseStyle { x: 165, y: 106, roof: palette::DARK_GREEN, wall: palette::BURLYWOOD },
];

pub const TREE_X: i32 = 60;
pub const TREE_Y: i32 = 115;
pub const TREE_TRUNK_HEIGHT: i32 = 15;
pub const TREE_TRUNK_HALF_WIDTH: i32 = 2;

#[derive(Debug, Clone, Copy)]
pub struct TreeTier {
    /// Rows above the tree base where this tier starts.
    pub lift: i32,
    pub rows: i32,
    pub half_width: i32,
    /// Whether the first two rows of each stripe use the dark green.
    pub dark_first: bool,
}

pub const TREE_TIERS: [TreeTier; 3] = [
    TreeTier { lift: 0, rows: 25, half_width: 25, dark_first: true },
    TreeTier { lift: 18, rows: 20, half_width: 20, dark_first: false },
    TreeTier { lift: 33, rows: 16, half_width: 15, dark_first: true },
];

/// Tree-top star, anchored at `(TREE_X - 3, TREE_Y - 52)`.
pub const TREE_STAR: &str = r#"
...*..
..**..
******
.****.
..***.
...*..
"#;

pub const SNOWMAN_X: i32 = 150;
pub const SNOWMAN_Y: i32 = 113;

/// Grid positions of the tree lights.
pub const LIGHT_POSITIONS: [(i32, i32); 21] = [
    // lower tier
    (50, 112),
    (48, 104),
    (45, 96),
    (70, 112),
    (72, 104),
    (80, 96),
    (60, 114),
    (58, 106),
    (62, 98),
    // middle tier
    (52, 94),
    (55, 86),
    (68, 94),
    (65, 86),
    (60, 92),
    (60, 84),
    // upper tier
    (55, 78),
    (57, 72),
    (65, 78),
    (63, 72),
    (60, 76),
    (60, 71),
];
