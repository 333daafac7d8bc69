//! Pong Core - a deterministic two-player Pong simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `config`: Match tuning, validated once at construction
//!
//! The crate owns no scheduler, renderer, or input device. A front end of any
//! kind (canvas, terminal, headless harness) drives the match by calling
//! [`sim::tick()`] at a fixed cadence, feeding it intents from
//! [`sim::InputState`], and reading positions, score, and [`sim::MatchEvent`]s
//! back out to paint or announce.

pub mod config;
pub mod sim;

pub use config::{ConfigError, MatchConfig};

/// Default match tuning, matching the classic 20 ms/tick build
pub mod consts {
    /// Nominal wall-clock duration of one simulation tick, in milliseconds.
    /// The core never sleeps; this is the cadence a scheduler should target.
    pub const TICK_MS: u64 = 20;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Distance a paddle moves per tick while a movement intent is held
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball edge length (the ball is square)
    pub const BALL_SIZE: f32 = 10.0;
    /// Horizontal ball speed per tick; also caps vertical rebound speed
    pub const BALL_SPEED: f32 = 6.0;

    /// First side to reach this score wins the match
    pub const WIN_SCORE: u32 = 11;
    /// Ticks between a point and the next serve (500 ms at [`TICK_MS`])
    pub const SERVE_DELAY_TICKS: u32 = 25;
}
