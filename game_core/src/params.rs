/// Game tuning parameters for Paddle Duel
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side edge

    // AI paddle
    pub const AI_SPEED: f32 = 5.0; // units per frame
    pub const AI_DEADZONE: f32 = 10.0; // no movement inside this band

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_BASE_SPEED: f32 = 6.0; // units per frame, per axis
    pub const SPIN_FACTOR: f32 = 0.1; // dy gained per unit of off-center hit
}
