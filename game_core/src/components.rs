use glam::Vec2;
use rand::Rng;

use crate::surface::Aabb;

/// Which half of the surface a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - a rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32, // top edge, clamped to the surface
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // units per frame
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Bounding square used for every collision test
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extent(self.pos, self.radius)
    }

    /// Re-center the ball after `scorer` won the point.
    ///
    /// Horizontal direction is fixed by the scorer (a right-side point serves
    /// leftward, a left-side point serves rightward); the vertical sign is a
    /// coin flip. Both components snap back to `base_speed`, discarding any
    /// accumulated spin.
    pub fn serve(&mut self, center: Vec2, scorer: Side, base_speed: f32, rng: &mut crate::GameRng) {
        self.pos = center;

        let dy = if rng.0.gen_bool(0.5) {
            base_speed
        } else {
            -base_speed
        };
        let dx = match scorer {
            Side::Right => -base_speed,
            Side::Left => base_speed,
        };

        self.vel = Vec2::new(dx, dy);
    }
}

/// Marks a paddle whose position follows the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerControlled;

/// Tracking controller for a computer-driven paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiController {
    pub speed: f32,    // units per frame
    pub deadzone: f32, // half-width of the hold band around the ball
}

impl AiController {
    pub fn new(speed: f32, deadzone: f32) -> Self {
        Self { speed, deadzone }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_paddle_center_y() {
        let paddle = Paddle::new(Side::Left, 10.0, 150.0, 10.0, 100.0);
        assert_eq!(paddle.center_y(), 200.0);
    }

    #[test]
    fn test_serve_after_right_point_moves_left() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-3.0, 50.0), Vec2::new(-9.0, 14.5), 12.0);

        ball.serve(Vec2::new(400.0, 200.0), Side::Right, 6.0, &mut rng);

        assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(ball.vel.x, -6.0);
        assert_eq!(ball.vel.y.abs(), 6.0);
    }

    #[test]
    fn test_serve_after_left_point_moves_right() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(803.0, 50.0), Vec2::new(9.0, -2.0), 12.0);

        ball.serve(Vec2::new(400.0, 200.0), Side::Left, 6.0, &mut rng);

        assert_eq!(ball.vel.x, 6.0);
        assert_eq!(ball.vel.y.abs(), 6.0);
    }

    #[test]
    fn test_serve_vertical_sign_varies() {
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 12.0);
        let mut saw_up = false;
        let mut saw_down = false;

        for _ in 0..64 {
            ball.serve(Vec2::ZERO, Side::Left, 6.0, &mut rng);
            if ball.vel.y > 0.0 {
                saw_down = true;
            } else {
                saw_up = true;
            }
        }

        assert!(saw_up && saw_down, "Serve should go both up and down");
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }
}
