use crate::{Ball, Config, Events, Paddle, Side, Surface};
use hecs::World;

/// Box-vs-box overlap between the ball's bounding square and a paddle.
///
/// The ball is treated as a square of half-extent `radius`, so hits near a
/// paddle's corners are approximate.
pub fn collides(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bounds().overlaps(&paddle.bounds())
}

/// Invert vertical velocity when the ball pokes past the top or bottom edge.
///
/// Position is not clamped: a ball that overshoots stays out for a frame and
/// is tested again from its new position next step.
pub fn check_wall_bounce(world: &mut World, surface: &Surface, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > surface.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Send the ball away from any paddle it overlaps and add spin.
///
/// Paddles are resolved left then right. Horizontal direction is forced
/// rather than flipped, so a ball already moving away keeps moving away.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if collides(ball, paddle) {
                deflect(ball, paddle, config.spin_factor);
                events.ball_hit_paddle = true;
                log::trace!("ball hit {:?} paddle at y={:.1}", paddle.side, ball.pos.y);
            }
        }
    }
}

fn deflect(ball: &mut Ball, paddle: &Paddle, spin_factor: f32) {
    ball.vel.x = match paddle.side {
        Side::Left => ball.vel.x.abs(),
        Side::Right => -ball.vel.x.abs(),
    };
    // Off-center hits steepen the trajectory; never damped until the next serve
    ball.vel.y += (ball.pos.y - paddle.center_y()) * spin_factor;
}
