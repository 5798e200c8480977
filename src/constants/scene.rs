use std::time::Duration;

use ratatui::style::Color;

use super::palette;

pub const SNOWFLAKE_COUNT: usize = 50;
pub const SNOWFLAKE_RESET_Y: f32 = -10.0;
pub const SNOWFLAKE_MIN_SPEED: f32 = 1.0;
pub const SNOWFLAKE_MAX_SPEED: f32 = 3.0;
pub const SNOWFLAKE_SWAY_PERIOD: f32 = 30.0;
pub const SNOWFLAKE_SWAY_AMPLITUDE: f32 = 0.5;

pub const LIGHT_MIN_BRIGHTNESS: f32 = 0.2;
pub const LIGHT_MAX_BRIGHTNESS: f32 = 1.0;
pub const LIGHT_COLORS: [Color; 2] = [palette::RED, palette::YELLOW];
pub const LIGHT_SIZE: i32 = 2;

pub const GIFT_SPEED: f32 = 2.0;
pub const GIFT_DROP_ROW: i32 = 30;
/// Explosion threshold band, in grid rows: `[GROUND_ROW, GROUND_ROW + GIFT_EXPLODE_DEPTH)`.
pub const GIFT_EXPLODE_DEPTH: f32 = 12.0;
pub const GIFT_MAX_ROTATION_SPEED: f32 = 0.05;
pub const GIFT_COLORS: [Color; 4] = [palette::RED, palette::DARK_GREEN, palette::LIGHT_BLUE, palette::PINK];
/// Offset from a gift's corner to its centre, in grid cells.
pub const GIFT_CENTER: f32 = 3.0;
pub const GIFT_DROP_PARTICLES: (usize, usize) = (6, 8);
pub const GIFT_BURST_PARTICLES: (usize, usize) = (12, 15);
pub const GIFT_ART: &str = r#"
..##..
.#..#.
BB##BB
BB##BB
######
######
BB##BB
BB##BB
"#;

pub const PARTICLE_MIN_SPEED: f32 = 1.0;
pub const PARTICLE_MAX_SPEED: f32 = 4.0;
pub const PARTICLE_LIFT: f32 = 2.0;
pub const PARTICLE_GRAVITY: f32 = 0.15;
pub const PARTICLE_FADE: f32 = 0.02;
pub const PARTICLE_COLORS: [Color; 5] = [palette::RED, palette::YELLOW, palette::SNOW, palette::STAR, palette::ORANGE];

pub const FIREWORK_SPEED: f32 = 3.0;
pub const FIREWORK_MIN_COLUMN: f32 = 25.0;
pub const FIREWORK_COLUMN_SPAN: f32 = 150.0;
pub const FIREWORK_MIN_APEX_ROW: f32 = 20.0;
pub const FIREWORK_APEX_SPAN: f32 = 40.0;
pub const FIREWORK_TRAIL_ALPHA: f32 = 0.5;
pub const FIREWORK_COLOR_SETS: [[Color; 2]; 5] = [
    [palette::RED, palette::YELLOW],
    [palette::LIGHT_BLUE, palette::SNOW],
    [palette::STAR, palette::YELLOW],
    [palette::PINK, palette::SNOW],
    [palette::DARK_GREEN, palette::LIGHT_GREEN],
];
pub const FIREWORK_INTERVAL: Duration = Duration::from_millis(1000);
pub const FIREWORK_LAUNCH_PROBABILITY: f64 = 0.8;
pub const FIREWORK_PAIR_PROBABILITY: f64 = 0.5;

pub const SPARK_MIN_SPEED: f32 = 2.0;
pub const SPARK_MAX_SPEED: f32 = 5.0;
pub const SPARK_GRAVITY: f32 = 0.08;
pub const SPARK_FADE: f32 = 0.012;
pub const SPARK_DRAG: f32 = 0.98;
pub const SPARK_LARGE_PROBABILITY: f64 = 0.3;
pub const SPARK_COUNT: (usize, usize) = (50, 70);

pub const CLICK_COOLDOWN: Duration = Duration::from_millis(500);

pub const CELEBRATION_GIFT_STEP: u32 = 5;
pub const CELEBRATION_CYCLES: u32 = 6;

pub const SLEIGH_START_X: f32 = -20.0;
pub const SLEIGH_RESET_X: f32 = -50.0;
pub const SLEIGH_STEP: f32 = 0.5;
pub const SLEIGH_ROW: i32 = 30;
/// Sleigh x past which it wraps when no banner trails it.
pub const SLEIGH_EXIT_X: f32 = 220.0;

pub const BANNER_OFFSET: i32 = 80;
pub const BANNER_WIDTH: i32 = 55;
pub const BANNER_HEIGHT: i32 = 10;
pub const BANNER_ROPE: i32 = 8;
pub const BANNER_TEXT: &str = "MERRY XMAS";

pub const REINDEER_OFFSETS: [i32; 3] = [8, 20, 32];
pub const REIN_SPANS: [(i32, i32); 3] = [(-2, 7), (15, 19), (27, 31)];

/// Anchored at `(x - 7, y - 6)` relative to the sleigh origin.
pub const SLEIGH_ART: &str = r#"
.RR..............
.RR..............
.RR..............
.RR..............
.RR..............
.RYYYYYYYYYYYYY..
.RRRRRRRRRRRRRR..
.RRRRRRRRRRRRRR..
.RRRRRRRRRRRRR...
SSSSSSSSSSSSSSS..
SSSSSSSSSSSSSSSSS
"#;

/// Anchored at `(x - 1, y - 11)`.
pub const SANTA_ART: &str = r#"
..WRRR....
...RRRRR..
..RRRRRRR.
..WWWWWWW.
..WWWWWWW.
.WSKSSSKSW
.WSSSRSSSW
.WWWWWWWWW
..WWWWWWW.
...WWWWW..
..RRRRRR..
.RRRRRRRR.
WWWWWWWWWW
"#;

/// Anchored at `(x - 1, y - 3)`.
pub const REINDEER_ART: &str = r#"
....D......
....DD.....
.....DMM...
.....MMMM..
....MMMKMMR
.....MMMMM.
.....MMMM..
.....RRR...
..MMMMMMY..
.MMLMMMM...
MMLMMMMM...
.MMM..MM...
.DD...DD...
"#;

pub const GLYPH_HEIGHT: i32 = 5;
pub const GLYPH_SPACING: i32 = 1;
pub const GLYPHS: [(char, &str); 8] = [
    (' ', "..\n..\n..\n..\n.."),
    ('A', ".#.\n#.#\n###\n#.#\n#.#"),
    ('E', "###\n#..\n##.\n#..\n###"),
    ('M', "#...#\n##.##\n#.#.#\n#...#\n#...#"),
    ('R', "##.\n#.#\n##.\n#.#\n#.#"),
    ('S', ".##\n#..\n.#.\n..#\n##."),
    ('X', "#.#\n#.#\n.#.\n#.#\n#.#"),
    ('Y', "#.#\n#.#\n.#.\n.#.\n.#."),
];
