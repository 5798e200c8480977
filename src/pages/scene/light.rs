use rand::{seq::SliceRandom, Rng};
use ratatui::style::Color;

use super::sprite::{Sprite, Status};
use crate::{
    components::canvas::{to_grid, PixelCanvas},
    constants::{background::LIGHT_POSITIONS, scene, PIXEL_SIZE},
};

/// A tree light whose brightness bounces between the two brightness limits.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    x: f32,
    y: f32,
    color: Color,
    brightness: f32,
    rate: f32,
}

impl Light {
    pub fn new(x: f32, y: f32, color: Color, brightness: f32, rate: f32) -> Self {
        Self { x, y, color, brightness, rate }
    }

    /// A light at grid cell `(column, row)` with random color, phase and speed.
    pub fn spawn<R: Rng + ?Sized>(column: i32, row: i32, rng: &mut R) -> Self {
        let color = *scene::LIGHT_COLORS.choose(rng).unwrap_or(&scene::LIGHT_COLORS[0]);
        Self::new(
            column as f32 * PIXEL_SIZE,
            row as f32 * PIXEL_SIZE,
            color,
            rng.gen_range(0.3..0.9),
            rng.gen_range(0.005..0.015),
        )
    }

    /// One light per configured tree position.
    pub fn string_of_lights<R: Rng + ?Sized>(rng: &mut R) -> Vec<Self> {
        LIGHT_POSITIONS.iter().map(|&(column, row)| Self::spawn(column, row, rng)).collect()
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }
}

impl Sprite for Light {
    fn get_pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn update<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Status {
        self.brightness += self.rate;
        if self.brightness > scene::LIGHT_MAX_BRIGHTNESS {
            self.brightness = scene::LIGHT_MAX_BRIGHTNESS;
            self.rate = -self.rate;
        } else if self.brightness < scene::LIGHT_MIN_BRIGHTNESS {
            self.brightness = scene::LIGHT_MIN_BRIGHTNESS;
            self.rate = -self.rate;
        }
        Status::Active
    }

    fn draw(&self, canvas: &mut PixelCanvas) {
        let alpha = self.brightness.clamp(scene::LIGHT_MIN_BRIGHTNESS, scene::LIGHT_MAX_BRIGHTNESS);
        canvas.fill_rect_alpha(
            to_grid(self.x),
            to_grid(self.y),
            scene::LIGHT_SIZE,
            scene::LIGHT_SIZE,
            self.color,
            alpha,
        );
    }
}
