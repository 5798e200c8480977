use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::{
    celebration::{Celebration, CelebrationEvent},
    clock::Throttle,
    firework::Firework,
    gift::FallingGift,
    light::Light,
    particle::{FireworkParticle, Particle},
    sleigh::Sleigh,
    snowflake::Snowflake,
    sprite::sweep,
};
use crate::{
    components::{
        background::{render_snowman, Background},
        canvas::PixelCanvas,
    },
    constants::{
        background::{SNOWMAN_X, SNOWMAN_Y},
        palette,
        scene::{self, CLICK_COOLDOWN, FIREWORK_INTERVAL},
    },
};

/// Owns every entity of the animation and advances them one frame at a time.
#[derive(Debug, Clone)]
pub struct Scene {
    rng: StdRng,
    background: Background,
    lights: Vec<Light>,
    snowflakes: Vec<Snowflake>,
    gifts: Vec<FallingGift>,
    particles: Vec<Particle>,
    fireworks: Vec<Firework>,
    sparks: Vec<FireworkParticle>,
    sleigh: Sleigh,
    celebration: Celebration,
    click_throttle: Throttle,
    firework_throttle: Throttle,
}

impl Default for Scene {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Scene {
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(mut rng: StdRng) -> Self {
        let background = Background::new(&mut rng);
        let lights = Light::string_of_lights(&mut rng);
        let snowflakes = (0..scene::SNOWFLAKE_COUNT).map(|_| Snowflake::spawn(&mut rng)).collect();

        Self {
            rng,
            background,
            lights,
            snowflakes,
            gifts: Vec::new(),
            particles: Vec::new(),
            fireworks: Vec::new(),
            sparks: Vec::new(),
            sleigh: Sleigh::default(),
            celebration: Celebration::default(),
            click_throttle: Throttle::new(CLICK_COOLDOWN),
            firework_throttle: Throttle::new(FIREWORK_INTERVAL),
        }
    }

    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    pub fn sleigh(&self) -> &Sleigh {
        &self.sleigh
    }

    pub fn gifts(&self) -> &[FallingGift] {
        &self.gifts
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn sparks(&self) -> &[FireworkParticle] {
        &self.sparks
    }

    /// Drops a gift from behind the sleigh unless the previous drop happened
    /// less than the click cooldown ago. Returns whether a gift was dropped.
    pub fn drop_gift(&mut self, now: Duration) -> bool {
        if !self.click_throttle.try_fire(now) {
            debug!("Gift drop ignored, cooling down");
            return false;
        }

        let (x, y) = self.sleigh.gift_origin();
        let gift = FallingGift::spawn(x, y, &mut self.rng);

        let (cx, cy) = gift.center();
        let (low, high) = scene::GIFT_DROP_PARTICLES;
        let count = self.rng.gen_range(low..=high);
        self.particles.extend((0..count).map(|_| Particle::spawn(cx, cy, &mut self.rng)));

        debug!(x, y, "Gift dropped");
        self.gifts.push(gift);
        true
    }

    /// Advances the whole scene by one frame and paints it into `canvas`.
    pub fn frame(&mut self, now: Duration, canvas: &mut PixelCanvas) {
        canvas.clear(palette::BACKGROUND);
        self.background.render(canvas);

        sweep(&mut self.lights, &mut self.rng, canvas, |_| {});
        render_snowman(canvas, SNOWMAN_X, SNOWMAN_Y);

        if self.sleigh.advance(self.celebration.banner_active) {
            self.apply(CelebrationEvent::SleighWrapped);
        }
        self.sleigh.draw(canvas, &self.celebration);

        sweep(&mut self.snowflakes, &mut self.rng, canvas, |_| {});

        let mut landed = Vec::new();
        sweep(&mut self.gifts, &mut self.rng, canvas, |gift| landed.push(gift.clone()));
        for gift in landed {
            let burst = gift.burst(&mut self.rng);
            debug!(particles = burst.len(), "Gift exploded");
            self.particles.extend(burst);
            self.apply(CelebrationEvent::GiftExploded);
        }

        sweep(&mut self.particles, &mut self.rng, canvas, |_| {});

        let mut bursting = Vec::new();
        sweep(&mut self.fireworks, &mut self.rng, canvas, |firework| bursting.push(firework.clone()));
        for firework in bursting {
            let burst = firework.burst(&mut self.rng);
            self.sparks.extend(burst);
        }

        sweep(&mut self.sparks, &mut self.rng, canvas, |_| {});

        if self.celebration.is_celebrating() {
            self.launch_fireworks(now);
        }
    }

    fn launch_fireworks(&mut self, now: Duration) {
        if !self.firework_throttle.try_fire(now) {
            return;
        }
        if !self.rng.gen_bool(scene::FIREWORK_LAUNCH_PROBABILITY) {
            trace!("Firework launch skipped");
            return;
        }

        let count = if self.rng.gen_bool(scene::FIREWORK_PAIR_PROBABILITY) { 2 } else { 1 };
        for _ in 0..count {
            let firework = Firework::spawn(&mut self.rng);
            self.fireworks.push(firework);
        }
        trace!(count, "Fireworks launched");
    }

    fn apply(&mut self, event: CelebrationEvent) {
        let next = self.celebration.transition(event);
        match (self.celebration.banner_active, next.banner_active) {
            (false, true) => info!(gifts = next.exploded_gifts, "Celebration started"),
            (true, false) => info!(cycles = next.banner_cycles, "Celebration finished"),
            _ => trace!(%event, ?next, "Celebration updated"),
        }
        self.celebration = next;
    }
}
