use rand::Rng;

use crate::components::canvas::PixelCanvas;

/// What a sprite asks of its owner after one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    /// Burst into particles this tick, then leave the scene.
    Explode,
    Remove,
}

pub trait Sprite {
    fn get_pos(&self) -> (f32, f32);

    /// Advances the sprite by one frame.
    fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Status;

    fn draw(&self, canvas: &mut PixelCanvas);
}

/// Runs one frame over a collection: updates every sprite, draws the ones
/// still active and drops the rest. Exploding sprites are passed to
/// `on_explode` before they are dropped.
pub fn sweep<T, R>(sprites: &mut Vec<T>, rng: &mut R, canvas: &mut PixelCanvas, mut on_explode: impl FnMut(&T))
where
    T: Sprite,
    R: Rng + ?Sized,
{
    sprites.retain_mut(|sprite| match sprite.update(rng) {
        Status::Active => {
            sprite.draw(canvas);
            true
        },
        Status::Explode => {
            on_explode(sprite);
            false
        },
        Status::Remove => false,
    });
}
