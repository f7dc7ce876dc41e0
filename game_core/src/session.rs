use glam::Vec2;
use hecs::World;

use crate::systems::apply_pointer;
use crate::{
    create_ai_paddle, create_ball, create_player_paddle, step, Ball, Config, ConfigError, Events,
    FrameClock, GameRng, Paddle, Score, Side, Surface,
};

/// Everything a renderer needs for one frame, copied out of the world
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub frame: u64,
    pub surface: Surface,
    pub paddles: Vec<Paddle>, // sorted left to right
    pub balls: Vec<Ball>,
    pub score: Score,
}

impl Snapshot {
    pub fn paddle(&self, side: Side) -> Option<&Paddle> {
        self.paddles.iter().find(|paddle| paddle.side == side)
    }
}

/// A single game: player paddle on the left, AI paddle on the right, one ball
pub struct Session {
    pub world: World,
    pub surface: Surface,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub clock: FrameClock,
}

impl Session {
    /// Start a session with the reference configuration
    pub fn new(seed: u64) -> Self {
        Self::build(Config::default(), seed)
    }

    /// Start a session with a custom configuration
    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: Config, seed: u64) -> Self {
        let surface = Surface::from_config(&config);
        let mut world = World::new();

        create_player_paddle(&mut world, &config, Side::Left);
        create_ai_paddle(&mut world, &config, Side::Right);

        // Opening ball heads down and to the right at base speed
        let speed = config.ball_base_speed;
        create_ball(
            &mut world,
            surface.center(),
            Vec2::new(speed, speed),
            config.ball_radius,
        );

        log::info!(
            "session started on {}x{} surface (seed {})",
            surface.width,
            surface.height,
            seed
        );

        Self {
            world,
            surface,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            clock: FrameClock::new(),
        }
    }

    /// Advance the game by one frame
    pub fn update(&mut self) {
        step(
            &mut self.world,
            &self.surface,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.clock.advance();
    }

    /// Move the player paddle to a surface-local pointer height
    pub fn set_pointer_y(&mut self, raw_y: f32) {
        apply_pointer(&mut self.world, &self.surface, raw_y);
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.side == side)
    }

    /// The first ball in the world
    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn frame(&self) -> u64 {
        self.clock.frame
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut paddles: Vec<Paddle> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .collect();
        paddles.sort_by_key(|paddle| paddle.side);

        let balls = self
            .world
            .query::<&Ball>()
            .iter()
            .map(|(_e, ball)| *ball)
            .collect();

        Snapshot {
            frame: self.clock.frame,
            surface: self.surface,
            paddles,
            balls,
            score: self.score,
        }
    }
}
