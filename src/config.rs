//! Match configuration
//!
//! All tuning for a match lives here instead of free-standing globals, so a
//! front end can run matches on any board it likes. Validated once when a
//! match is created, never per tick.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Reasons a [`MatchConfig`] is rejected at match creation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidBoard { width: f32, height: f32 },
    #[error("{entity} dimensions must be positive, got {width}x{height}")]
    InvalidEntity {
        entity: &'static str,
        width: f32,
        height: f32,
    },
    #[error("{name} must be positive, got {value}")]
    InvalidSpeed { name: &'static str, value: f32 },
    #[error("win score must be at least 1")]
    InvalidWinScore,
}

/// Match tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub board_width: f32,
    pub board_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle travel per tick while a movement intent is held
    pub paddle_speed: f32,
    /// Ball edge length (width and height)
    pub ball_size: f32,
    /// Horizontal ball speed per tick; vertical rebound speed never exceeds it
    pub ball_speed: f32,
    /// First side to reach this score wins
    pub win_score: u32,
    /// Ticks between a point and the ball launching for the next rally.
    /// Zero launches on the next tick.
    pub serve_delay_ticks: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_width: consts::BOARD_WIDTH,
            board_height: consts::BOARD_HEIGHT,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            paddle_speed: consts::PADDLE_SPEED,
            ball_size: consts::BALL_SIZE,
            ball_speed: consts::BALL_SPEED,
            win_score: consts::WIN_SCORE,
            serve_delay_ticks: consts::SERVE_DELAY_TICKS,
        }
    }
}

impl MatchConfig {
    /// Check every dimension and speed once, before any simulation runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width <= 0.0 || self.board_height <= 0.0 {
            return Err(ConfigError::InvalidBoard {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(ConfigError::InvalidEntity {
                entity: "paddle",
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.ball_size <= 0.0 {
            return Err(ConfigError::InvalidEntity {
                entity: "ball",
                width: self.ball_size,
                height: self.ball_size,
            });
        }
        if self.ball_speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed {
                name: "ball_speed",
                value: self.ball_speed,
            });
        }
        if self.paddle_speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed {
                name: "paddle_speed",
                value: self.paddle_speed,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::InvalidWinScore);
        }
        Ok(())
    }

    /// Highest y a paddle's top edge may reach
    pub fn paddle_max_y(&self) -> f32 {
        self.board_height - self.paddle_height
    }

    /// Highest y the ball's top edge may reach
    pub fn ball_max_y(&self) -> f32 {
        self.board_height - self.ball_size
    }
}
