use rand::Rng;

use super::sprite::{Sprite, Status};
use crate::{
    components::canvas::{to_grid, PixelCanvas},
    constants::{palette, scene, SURFACE_HEIGHT, SURFACE_WIDTH},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    x: f32,
    y: f32,
    speed: f32,
    size: i32,
}

impl Snowflake {
    pub fn new(x: f32, y: f32, speed: f32, size: i32) -> Self {
        Self { x, y, speed, size }
    }

    /// A flake placed at the top edge with random column, speed and size.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut flake = Self::new(0.0, 0.0, 0.0, 1);
        flake.reset(rng);
        flake
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.x = rng.gen_range(0.0..SURFACE_WIDTH);
        self.y = scene::SNOWFLAKE_RESET_Y;
        self.speed = rng.gen_range(scene::SNOWFLAKE_MIN_SPEED..scene::SNOWFLAKE_MAX_SPEED);
        self.size = rng.gen_range(1..=2);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn size(&self) -> i32 {
        self.size
    }
}

impl Sprite for Snowflake {
    fn get_pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Status {
        self.y += self.speed;
        self.x += (self.y / scene::SNOWFLAKE_SWAY_PERIOD).sin() * scene::SNOWFLAKE_SWAY_AMPLITUDE;

        if self.y > SURFACE_HEIGHT {
            self.reset(rng);
        }
        Status::Active
    }

    fn draw(&self, canvas: &mut PixelCanvas) {
        canvas.fill_block(to_grid(self.x), to_grid(self.y), self.size, palette::SNOW);
    }
}
