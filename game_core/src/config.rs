use std::fmt;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ai_speed: f32,
    pub ai_deadzone: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub spin_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ai_speed: Params::AI_SPEED,
            ai_deadzone: Params::AI_DEADZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            spin_factor: Params::SPIN_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config sized to a given surface, everything else at reference values
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.surface_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Y position that vertically centers a paddle
    pub fn initial_paddle_y(&self) -> f32 {
        self.surface_height / 2.0 - self.paddle_height / 2.0
    }

    /// Reject configurations the simulation cannot hold its invariants under
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("surface_width", self.surface_width)?;
        positive("surface_height", self.surface_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_base_speed", self.ball_base_speed)?;
        positive("ai_speed", self.ai_speed)?;
        non_negative("ai_deadzone", self.ai_deadzone)?;
        non_negative("spin_factor", self.spin_factor)?;
        non_negative("paddle_margin", self.paddle_margin)?;

        if self.paddle_height > self.surface_height {
            return Err(ConfigError::PaddleTallerThanSurface {
                paddle_height: self.paddle_height,
                surface_height: self.surface_height,
            });
        }

        let required = 2.0 * (self.paddle_margin + self.paddle_width);
        if required > self.surface_width {
            return Err(ConfigError::PaddlesDoNotFit {
                required,
                surface_width: self.surface_width,
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Why a [`Config`] was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotPositive { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
    PaddleTallerThanSurface { paddle_height: f32, surface_height: f32 },
    PaddlesDoNotFit { required: f32, surface_width: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "{field} must be a positive finite number, got {value}")
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{field} must be a non-negative finite number, got {value}")
            }
            ConfigError::PaddleTallerThanSurface {
                paddle_height,
                surface_height,
            } => write!(
                f,
                "paddle height {paddle_height} exceeds surface height {surface_height}"
            ),
            ConfigError::PaddlesDoNotFit {
                required,
                surface_width,
            } => write!(
                f,
                "paddles need {required} units of width but the surface is {surface_width}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
