use crate::{AiController, Ball, Paddle, Surface};
use hecs::World;

/// Step AI paddles toward the ball's height.
///
/// Stateless tracking: move a fixed `speed` toward the ball unless the paddle
/// center is already within `deadzone` of it, then clamp onto the surface.
/// Follows the first ball in the world and holds still if there is none.
pub fn move_ai_paddles(world: &mut World, surface: &Surface) {
    let target_y = {
        let mut balls = world.query::<&Ball>();
        balls.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let Some(target_y) = target_y else {
        return;
    };

    for (_entity, (paddle, ai)) in world.query_mut::<(&mut Paddle, &AiController)>() {
        let center = paddle.center_y();
        if center < target_y - ai.deadzone {
            paddle.y += ai.speed;
        } else if center > target_y + ai.deadzone {
            paddle.y -= ai.speed;
        }
        paddle.y = surface.clamp_paddle_y(paddle.y, paddle.height);
    }
}
