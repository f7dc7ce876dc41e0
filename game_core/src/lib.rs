//! Deterministic simulation for Paddle Duel
//!
//! One call to [`step`] advances the world by exactly one frame. There is no
//! delta time: the host decides how often to call it.

pub mod components;
pub mod config;
pub mod driver;
pub mod params;
pub mod resources;
pub mod session;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use surface::*;

use hecs::World;
use systems::*;

/// Run one frame of the Paddle Duel simulation
pub fn step(
    world: &mut World,
    surface: &Surface,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Bounce off top/bottom walls
    check_wall_bounce(world, surface, events);

    // 3. Bounce off paddles (left, then right)
    check_paddle_collisions(world, config, events);

    // 4. Check scoring (ball left the surface), serving a fresh ball
    check_scoring(world, surface, config, score, events, rng);

    // 5. AI paddles track the ball
    move_ai_paddles(world, surface);
}

/// Helper to create the pointer-driven paddle for `side`
pub fn create_player_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    world.spawn((paddle_for(config, side), PointerControlled))
}

/// Helper to create an AI-driven paddle for `side`
pub fn create_ai_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    world.spawn((
        paddle_for(config, side),
        AiController::new(config.ai_speed, config.ai_deadzone),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    radius: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}

fn paddle_for(config: &Config, side: Side) -> Paddle {
    Paddle::new(
        side,
        config.paddle_x(side),
        config.initial_paddle_y(),
        config.paddle_width,
        config.paddle_height,
    )
}
