use rand::{seq::SliceRandom, Rng};
use ratatui::style::Color;

use super::{
    particle::FireworkParticle,
    sprite::{Sprite, Status},
};
use crate::{
    components::canvas::{to_grid, PixelCanvas},
    constants::{palette, scene, GROUND_ROW, PIXEL_SIZE},
};

/// A rocket climbing from the ground line to its apex, where it bursts.
#[derive(Debug, Clone, PartialEq)]
pub struct Firework {
    x: f32,
    y: f32,
    target_y: f32,
    speed: f32,
    exploded: bool,
    colors: [Color; 2],
}

impl Firework {
    pub fn new(x: f32, y: f32, target_y: f32, colors: [Color; 2]) -> Self {
        Self { x, y, target_y, speed: scene::FIREWORK_SPEED, exploded: false, colors }
    }

    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let column = rng.gen_range(0.0..scene::FIREWORK_COLUMN_SPAN) + scene::FIREWORK_MIN_COLUMN;
        let apex = rng.gen_range(0.0..scene::FIREWORK_APEX_SPAN) + scene::FIREWORK_MIN_APEX_ROW;
        let colors = *scene::FIREWORK_COLOR_SETS.choose(rng).unwrap_or(&scene::FIREWORK_COLOR_SETS[0]);
        Self::new(column * PIXEL_SIZE, GROUND_ROW as f32 * PIXEL_SIZE, apex * PIXEL_SIZE, colors)
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn target_y(&self) -> f32 {
        self.target_y
    }

    pub fn colors(&self) -> [Color; 2] {
        self.colors
    }

    /// Sparks thrown out from the current position, each in one of the two
    /// colors of this rocket.
    pub fn burst<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<FireworkParticle> {
        let (low, high) = scene::SPARK_COUNT;
        (0..rng.gen_range(low..=high))
            .map(|_| {
                let color = *self.colors.choose(rng).unwrap_or(&self.colors[0]);
                FireworkParticle::spawn(self.x, self.y, color, rng)
            })
            .collect()
    }
}

impl Sprite for Firework {
    fn get_pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn update<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Status {
        if self.exploded {
            return Status::Remove;
        }

        self.y -= self.speed;
        if self.y <= self.target_y {
            self.exploded = true;
            return Status::Explode;
        }
        Status::Active
    }

    fn draw(&self, canvas: &mut PixelCanvas) {
        if self.exploded {
            return;
        }
        let (column, row) = (to_grid(self.x), to_grid(self.y));
        canvas.fill_rect(column, row, 1, 2, palette::YELLOW);
        canvas.fill_rect_alpha(
            column,
            to_grid(self.y + 2.0 * PIXEL_SIZE),
            1,
            1,
            palette::YELLOW,
            scene::FIREWORK_TRAIL_ALPHA,
        );
    }
}
