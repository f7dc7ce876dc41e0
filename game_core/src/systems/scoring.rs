use crate::{Ball, Config, Events, GameRng, Score, Side, Surface};
use hecs::World;

/// Check if ball left the surface (scoring)
///
/// The left edge is tested first, so a ball somehow past both edges in the
/// same frame counts as a point for the right player. At most one point per
/// ball per frame.
pub fn check_scoring(
    world: &mut World,
    surface: &Surface,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x - ball.radius < 0.0 {
            Side::Right
        } else if ball.pos.x + ball.radius > surface.width {
            Side::Left
        } else {
            continue;
        };

        score.award(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }

        ball.serve(surface.center(), scorer, config.ball_base_speed, rng);

        log::debug!(
            "{:?} player scored past {:?} paddle ({} to {})",
            scorer,
            scorer.opponent(),
            score.get(scorer),
            score.get(scorer.opponent())
        );
    }
}
