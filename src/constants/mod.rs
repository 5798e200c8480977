pub mod background;
pub mod palette;
pub mod scene;

/// Side of one grid cell in surface pixels.
pub const PIXEL_SIZE: f32 = 4.0;

pub const GRID_WIDTH: i32 = 200;
pub const GRID_HEIGHT: i32 = 150;

pub const SURFACE_WIDTH: f32 = GRID_WIDTH as f32 * PIXEL_SIZE;
pub const SURFACE_HEIGHT: f32 = GRID_HEIGHT as f32 * PIXEL_SIZE;

/// First grid row covered by the ground.
pub const GROUND_ROW: i32 = 118;

pub const TICK_RATE: f64 = 60.0;
pub const FRAME_RATE: f64 = 60.0;
