//! Draw list for one frame
//!
//! Built as plain data from a [`Snapshot`] so layout can be checked without a
//! browser; the canvas renderer just replays it.

use game_core::{Side, Snapshot};

pub const DIVIDER_COLOR: &str = "#bbb";
pub const DIVIDER_DASH: [f64; 2] = [10.0, 15.0];
pub const LEFT_PADDLE_COLOR: &str = "#4CAF50";
pub const RIGHT_PADDLE_COLOR: &str = "#F44336";
pub const BALL_COLOR: &str = "#FFD600";
pub const SCORE_COLOR: &str = "#eee";
pub const SCORE_FONT: &str = "32px Arial";

/// Score labels sit either side of the divider
const LEFT_SCORE_OFFSET: f64 = -60.0;
const RIGHT_SCORE_OFFSET: f64 = 30.0;
const SCORE_BASELINE: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    DashedLine {
        from: (f64, f64),
        to: (f64, f64),
        dash: [f64; 2],
        color: &'static str,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: &'static str,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font: &'static str,
        color: &'static str,
    },
}

pub fn paddle_color(side: Side) -> &'static str {
    match side {
        Side::Left => LEFT_PADDLE_COLOR,
        Side::Right => RIGHT_PADDLE_COLOR,
    }
}

/// Build the frame: clear, divider, paddles, ball(s), scores
pub fn build_scene(snapshot: &Snapshot) -> Vec<DrawCommand> {
    let width = snapshot.surface.width as f64;
    let height = snapshot.surface.height as f64;
    let mid_x = width / 2.0;

    let mut commands = Vec::with_capacity(4 + snapshot.paddles.len() + snapshot.balls.len());
    commands.push(DrawCommand::Clear { width, height });
    commands.push(DrawCommand::DashedLine {
        from: (mid_x, 0.0),
        to: (mid_x, height),
        dash: DIVIDER_DASH,
        color: DIVIDER_COLOR,
    });

    for paddle in &snapshot.paddles {
        commands.push(DrawCommand::Rect {
            x: paddle.x as f64,
            y: paddle.y as f64,
            width: paddle.width as f64,
            height: paddle.height as f64,
            color: paddle_color(paddle.side),
        });
    }

    for ball in &snapshot.balls {
        commands.push(DrawCommand::Circle {
            x: ball.pos.x as f64,
            y: ball.pos.y as f64,
            radius: ball.radius as f64,
            color: BALL_COLOR,
        });
    }

    commands.push(DrawCommand::Text {
        text: snapshot.score.left.to_string(),
        x: mid_x + LEFT_SCORE_OFFSET,
        y: SCORE_BASELINE,
        font: SCORE_FONT,
        color: SCORE_COLOR,
    });
    commands.push(DrawCommand::Text {
        text: snapshot.score.right.to_string(),
        x: mid_x + RIGHT_SCORE_OFFSET,
        y: SCORE_BASELINE,
        font: SCORE_FONT,
        color: SCORE_COLOR,
    });

    commands
}
