use rand::{seq::SliceRandom, Rng};
use ratatui::style::Color;

use super::{
    particle::Particle,
    sprite::{Sprite, Status},
};
use crate::{
    components::{
        canvas::{to_grid, PixelCanvas},
        pixel_art,
    },
    constants::{palette, scene, GROUND_ROW, PIXEL_SIZE},
};

/// A present dropped from the sleigh. It falls straight down and bursts once
/// it sinks to its randomly chosen depth near the ground line.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingGift {
    x: f32,
    y: f32,
    speed: f32,
    color: Color,
    rotation: f32,
    rotation_speed: f32,
    explode_y: f32,
    exploded: bool,
}

impl FallingGift {
    pub fn new(x: f32, y: f32, color: Color, rotation_speed: f32, explode_y: f32) -> Self {
        Self { x, y, speed: scene::GIFT_SPEED, color, rotation: 0.0, rotation_speed, explode_y, exploded: false }
    }

    pub fn spawn<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        let color = *scene::GIFT_COLORS.choose(rng).unwrap_or(&palette::RED);
        let rotation_speed = rng.gen_range(-scene::GIFT_MAX_ROTATION_SPEED..scene::GIFT_MAX_ROTATION_SPEED);
        let explode_row = GROUND_ROW as f32 + rng.gen_range(0.0..scene::GIFT_EXPLODE_DEPTH);
        Self::new(x, y, color, rotation_speed, explode_row * PIXEL_SIZE)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + scene::GIFT_CENTER * PIXEL_SIZE, self.y + scene::GIFT_CENTER * PIXEL_SIZE)
    }

    pub fn explode_y(&self) -> f32 {
        self.explode_y
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Particles thrown out when the gift bursts.
    pub fn burst<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Particle> {
        let (low, high) = scene::GIFT_BURST_PARTICLES;
        let (x, y) = self.center();
        (0..rng.gen_range(low..=high)).map(|_| Particle::spawn(x, y, rng)).collect()
    }
}

impl Sprite for FallingGift {
    fn get_pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn update<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Status {
        if self.exploded {
            return Status::Remove;
        }

        self.y += self.speed;
        self.rotation += self.rotation_speed;

        if self.y >= self.explode_y {
            self.exploded = true;
            Status::Explode
        } else {
            Status::Active
        }
    }

    fn draw(&self, canvas: &mut PixelCanvas) {
        // The art includes the two-row bow above the box
        pixel_art::paint(
            canvas,
            to_grid(self.x),
            to_grid(self.y) - 2,
            scene::GIFT_ART,
            &[('B', self.color), ('#', palette::YELLOW)],
        );
    }
}
