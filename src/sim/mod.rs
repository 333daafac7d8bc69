//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (a single draw for the opening server)
//! - No rendering, scheduling, or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Aabb, impact_offset};
pub use input::{InputAction, InputState, PaddleMove, TickInput};
pub use state::{Ball, MatchEvent, MatchPhase, MatchState, Paddle, Score, Side};
pub use tick::tick;
