use hecs::World;

use crate::{Paddle, PointerControlled, Surface};

/// Place pointer-driven paddles so they are centered on `raw_y`.
///
/// `raw_y` is already in surface-local space; the paddle is clamped onto the
/// surface with the same rule the AI paddle uses.
pub fn apply_pointer(world: &mut World, surface: &Surface, raw_y: f32) {
    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &PointerControlled)>() {
        paddle.y = surface.clamp_paddle_y(raw_y - paddle.height / 2.0, paddle.height);
    }
}
