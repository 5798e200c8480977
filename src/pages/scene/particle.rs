use std::f32::consts::TAU;

use rand::{seq::SliceRandom, Rng};
use ratatui::style::Color;

use super::sprite::{Sprite, Status};
use crate::{
    components::canvas::{to_grid, PixelCanvas},
    constants::{palette, scene},
};

fn draw_fading(canvas: &mut PixelCanvas, (x, y): (f32, f32), size: i32, color: Color, life: f32) {
    canvas.fill_rect_alpha(to_grid(x), to_grid(y), size, size, color, life.clamp(0.0, 1.0));
}

fn random_heading<R: Rng + ?Sized>(rng: &mut R, min_speed: f32, max_speed: f32) -> (f32, f32) {
    let angle = rng.gen_range(0.0..TAU);
    let speed = rng.gen_range(min_speed..max_speed);
    (angle.cos() * speed, angle.sin() * speed)
}

/// Confetti thrown up when a gift is dropped or bursts on the ground.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    gravity: f32,
    life: f32,
    fade: f32,
    color: Color,
    size: i32,
}

impl Particle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, color: Color, size: i32) -> Self {
        Self { x, y, vx, vy, gravity: scene::PARTICLE_GRAVITY, life: 1.0, fade: scene::PARTICLE_FADE, color, size }
    }

    /// A particle flung in a random direction, biased upwards.
    pub fn spawn<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        let (vx, vy) = random_heading(rng, scene::PARTICLE_MIN_SPEED, scene::PARTICLE_MAX_SPEED);
        let color = *scene::PARTICLE_COLORS.choose(rng).unwrap_or(&palette::SNOW);
        let size = if rng.gen_bool(0.5) { 1 } else { 2 };
        Self::new(x, y, vx, vy - scene::PARTICLE_LIFT, color, size)
    }

    pub fn life(&self) -> f32 {
        self.life
    }
}

impl Sprite for Particle {
    fn get_pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn update<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Status {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += self.gravity;
        self.life -= self.fade;

        if self.life <= 0.0 {
            Status::Remove
        } else {
            Status::Active
        }
    }

    fn draw(&self, canvas: &mut PixelCanvas) {
        draw_fading(canvas, self.get_pos(), self.size, self.color, self.life);
    }
}

/// Spark of an exploded firework: lighter and longer-lived than a
/// [`Particle`], and slowed sideways by air drag.
#[derive(Debug, Clone, PartialEq)]
pub struct FireworkParticle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    gravity: f32,
    drag: f32,
    life: f32,
    fade: f32,
    color: Color,
    size: i32,
}

impl FireworkParticle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, color: Color, size: i32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            gravity: scene::SPARK_GRAVITY,
            drag: scene::SPARK_DRAG,
            life: 1.0,
            fade: scene::SPARK_FADE,
            color,
            size,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(x: f32, y: f32, color: Color, rng: &mut R) -> Self {
        let (vx, vy) = random_heading(rng, scene::SPARK_MIN_SPEED, scene::SPARK_MAX_SPEED);
        let size = if rng.gen_bool(scene::SPARK_LARGE_PROBABILITY) { 2 } else { 1 };
        Self::new(x, y, vx, vy, color, size)
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Sprite for FireworkParticle {
    fn get_pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn update<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Status {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += self.gravity;
        self.vx *= self.drag;
        self.life -= self.fade;

        if self.life <= 0.0 {
            Status::Remove
        } else {
            Status::Active
        }
    }

    fn draw(&self, canvas: &mut PixelCanvas) {
        draw_fading(canvas, self.get_pos(), self.size, self.color, self.life);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    /// Steps a sprite until removal, checking that life never grows and that
    /// removal happens exactly when life first drops to zero.
    fn ticks_until_removed<T: Sprite>(sprite: &mut T, life: impl Fn(&T) -> f32) -> usize {
        let mut rng = StdRng::seed_from_u64(0);
        let mut ticks = 0;
        loop {
            let before = life(sprite);
            let status = sprite.update(&mut rng);
            ticks += 1;
            let after = life(sprite);
            assert!(after <= before);
            if status == Status::Remove {
                assert!(before > 0.0);
                assert!(after <= 0.0);
                return ticks;
            }
            assert!(after > 0.0);
        }
    }

    #[test]
    fn test_particle_integrates_then_applies_gravity() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut particle = Particle::new(10.0, 10.0, 1.0, -2.0, palette::RED, 1);

        particle.update(&mut rng);
        assert_eq!(particle.get_pos(), (11.0, 8.0));
        particle.update(&mut rng);
        let (x, y) = particle.get_pos();
        assert_eq!(x, 12.0);
        assert!((y - 6.15).abs() < 1e-5);
    }

    #[test]
    fn test_particle_removed_when_life_runs_out() {
        let mut particle = Particle::new(0.0, 0.0, 0.0, 0.0, palette::RED, 1);
        let ticks = ticks_until_removed(&mut particle, Particle::life);
        assert!((50..=51).contains(&ticks), "{ticks}");
    }

    #[test]
    fn test_spark_drag_slows_horizontal_motion() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut spark = FireworkParticle::new(0.0, 0.0, 4.0, 0.0, palette::PINK, 1);

        spark.update(&mut rng);
        assert_eq!(spark.get_pos(), (4.0, 0.0));
        let (vx, vy) = spark.velocity();
        assert!((vx - 3.92).abs() < 1e-6);
        assert!((vy - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_spark_outlives_particle() {
        let mut spark = FireworkParticle::new(0.0, 0.0, 0.0, 0.0, palette::PINK, 1);
        let ticks = ticks_until_removed(&mut spark, FireworkParticle::life);
        assert!((83..=84).contains(&ticks), "{ticks}");
    }

    #[test]
    fn test_spawned_particles_are_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let particle = Particle::spawn(0.0, 0.0, &mut rng);
            assert!(particle.size == 1 || particle.size == 2);
            let speed = (particle.vx.powi(2) + (particle.vy + scene::PARTICLE_LIFT).powi(2)).sqrt();
            assert!((0.99..4.01).contains(&speed), "{speed}");

            let spark = FireworkParticle::spawn(0.0, 0.0, palette::PINK, &mut rng);
            let speed = (spark.vx.powi(2) + spark.vy.powi(2)).sqrt();
            assert!((1.99..5.01).contains(&speed), "{speed}");
            assert_eq!(spark.color(), palette::PINK);
        }
    }

    #[test]
    fn test_faded_particle_blends_into_background() {
        let mut canvas = PixelCanvas::new(2, 2, Color::Rgb(0, 0, 0));
        let mut particle = Particle::new(0.0, 0.0, 0.0, 0.0, Color::Rgb(200, 200, 200), 1);
        particle.life = 0.5;
        particle.draw(&mut canvas);
        assert_eq!(canvas.get(0, 0), Some(Color::Rgb(100, 100, 100)));
    }
}
