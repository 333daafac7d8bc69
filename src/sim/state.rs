//! Match state and core simulation types
//!
//! Everything that must be snapshotted for determinism lives here. Front ends
//! read positions, score, and events to paint; all mutation goes through
//! [`tick`](super::tick::tick) and the input intents it consumes.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::{ConfigError, MatchConfig};

/// Which half of the board a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Paddles and ball repositioned, serve countdown running
    Serving,
    /// Ball in play
    Rallying,
    /// A side reached the win score; terminal
    GameOver,
}

/// Points per side. Non-decreasing within a match; reset only at match start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn add_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// One player's paddle. `x` is pinned to the board edge for its side;
/// only `y` ever changes, and it is clamped to the board every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    /// Vertical travel applied last tick (distance per tick, signed)
    pub vel_y: f32,
}

impl Paddle {
    pub(crate) fn new(side: Side, config: &MatchConfig) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => config.board_width - config.paddle_width,
        };
        Self {
            side,
            x,
            y: (config.board_height - config.paddle_height) / 2.0,
            vel_y: 0.0,
        }
    }

    /// Recenter vertically and stop, ready for a serve
    pub(crate) fn reset(&mut self, config: &MatchConfig) {
        self.y = (config.board_height - config.paddle_height) / 2.0;
        self.vel_y = 0.0;
    }

    pub fn aabb(&self, config: &MatchConfig) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }

    /// Vertical center of the paddle face
    pub fn middle_y(&self, config: &MatchConfig) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// The ball. Positioned by its top-left corner, like the paddles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Distance per tick, signed
    pub vel: Vec2,
}

impl Ball {
    pub fn aabb(&self, config: &MatchConfig) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(config.ball_size))
    }

    pub fn middle_y(&self, config: &MatchConfig) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }
}

/// Observable things that happened during the most recent tick.
///
/// The event list is cleared at the start of every tick, so each event is
/// seen exactly once by a caller that reads after each `tick()`. Front ends
/// hook sounds and announcements here instead of polling for state diffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Ball reflected off the ceiling or floor
    WallBounce,
    /// Ball rebounded off a paddle
    PaddleBounce { side: Side },
    /// A side won the rally
    PointScored { side: Side },
    /// Rally reset; serve countdown armed
    ServeScheduled { server: Side },
    /// Serve countdown expired, ball launched toward the receiver
    BallServed { server: Side },
    /// Match is over
    MatchOver { winner: Side },
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Match seed, for a reproducible opening-server draw
    pub seed: u64,
    config: MatchConfig,
    /// Simulation tick counter; does not advance while paused
    pub time_ticks: u64,
    pub phase: MatchPhase,
    /// Orthogonal suspension flag: freezes `Serving` or `Rallying` in place
    pub(crate) paused: bool,
    /// Side serving the current or next rally
    pub(crate) server: Side,
    /// Ticks until the armed serve launches (meaningful only while `Serving`)
    pub(crate) serve_delay: u32,
    pub paddle_left: Paddle,
    pub paddle_right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub(crate) winner: Option<Side>,
    /// Events from the most recent tick (transient, not part of the snapshot)
    #[serde(skip)]
    events: Vec<MatchEvent>,
}

impl MatchState {
    /// Create a match on a validated board. The opening server is drawn
    /// 50/50 from the seed; everything after that is fully determined by
    /// input.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let server = if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };

        let paddle_left = Paddle::new(Side::Left, &config);
        let paddle_right = Paddle::new(Side::Right, &config);
        let mut state = Self {
            seed,
            config,
            time_ticks: 0,
            phase: MatchPhase::Serving,
            paused: false,
            server,
            serve_delay: 0,
            paddle_left,
            paddle_right,
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            score: Score::default(),
            winner: None,
            events: Vec::new(),
        };
        state.enter_serving(server);
        Ok(state)
    }

    /// Full match reset: zero the score and open a fresh serve. The only way
    /// back in from `GameOver`.
    pub fn reset(&mut self, seed: u64) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let server = if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };

        self.seed = seed;
        self.time_ticks = 0;
        self.paused = false;
        self.score = Score::default();
        self.winner = None;
        self.clear_events();
        self.enter_serving(server);
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Explicit pause flag, so a free-running scheduler can skip ticks
    /// instead of stopping its timer. `tick()` is also a no-op while paused,
    /// so either discipline works.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Winner of the match, once `GameOver`
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Side serving the current or next rally
    pub fn server(&self) -> Side {
        self.server
    }

    /// Ticks remaining on the serve countdown
    pub fn serve_delay(&self) -> u32 {
        self.serve_delay
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.paddle_left,
            Side::Right => &self.paddle_right,
        }
    }

    /// Events emitted by the most recent tick
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub(crate) fn push_event(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Reposition for a new rally and arm the serve countdown. Leaves the
    /// score untouched.
    pub(crate) fn enter_serving(&mut self, server: Side) {
        self.phase = MatchPhase::Serving;
        self.server = server;
        self.serve_delay = self.config.serve_delay_ticks;

        self.paddle_left.reset(&self.config);
        self.paddle_right.reset(&self.config);

        // Ball waits beside the server's paddle until the countdown expires
        let ball_x = match server {
            Side::Left => self.config.paddle_width,
            Side::Right => {
                self.config.board_width - self.config.paddle_width - self.config.ball_size
            }
        };
        self.ball.pos = Vec2::new(ball_x, self.config.board_height / 2.0);
        self.ball.vel = Vec2::ZERO;

        self.push_event(MatchEvent::ServeScheduled { server });
        log::debug!("{} is serving", server.as_str());
    }

    /// Launch the armed serve toward the receiver: full horizontal speed,
    /// no vertical component.
    pub(crate) fn launch_serve(&mut self) {
        let dir = match self.server {
            Side::Left => 1.0,
            Side::Right => -1.0,
        };
        self.ball.vel = Vec2::new(dir * self.config.ball_speed, 0.0);
        self.phase = MatchPhase::Rallying;
        self.push_event(MatchEvent::BallServed {
            server: self.server,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(seed: u64) -> MatchState {
        MatchState::new(MatchConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_opposite_side() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn test_new_match_starts_serving() {
        let state = test_state(7);
        assert_eq!(state.phase, MatchPhase::Serving);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.winner(), None);
        assert_eq!(
            state.events(),
            &[MatchEvent::ServeScheduled {
                server: state.server()
            }]
        );
    }

    #[test]
    fn test_same_seed_same_server() {
        for seed in 0..32 {
            assert_eq!(test_state(seed).server(), test_state(seed).server());
        }
    }

    #[test]
    fn test_server_draw_covers_both_sides() {
        let servers: Vec<Side> = (0..64).map(|seed| test_state(seed).server()).collect();
        assert!(servers.contains(&Side::Left));
        assert!(servers.contains(&Side::Right));
    }

    #[test]
    fn test_serve_placement_left() {
        let mut state = test_state(1);
        state.enter_serving(Side::Left);
        let config = state.config().clone();

        // Paddles centered and stopped
        assert_eq!(
            state.paddle_left.y,
            (config.board_height - config.paddle_height) / 2.0
        );
        assert_eq!(state.paddle_right.y, state.paddle_left.y);
        assert_eq!(state.paddle_left.vel_y, 0.0);

        // Ball waiting just off the server's paddle face
        assert_eq!(state.ball.pos.x, config.paddle_width);
        assert_eq!(state.ball.pos.y, config.board_height / 2.0);
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_serve_placement_right() {
        let mut state = test_state(1);
        state.enter_serving(Side::Right);
        let config = state.config().clone();

        assert_eq!(
            state.ball.pos.x,
            config.board_width - config.paddle_width - config.ball_size
        );
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_launch_serve_direction_and_speed() {
        for (side, dir) in [(Side::Left, 1.0), (Side::Right, -1.0)] {
            let mut state = test_state(1);
            state.enter_serving(side);
            state.launch_serve();

            assert_eq!(state.phase, MatchPhase::Rallying);
            assert_eq!(
                state.ball.vel,
                Vec2::new(dir * state.config().ball_speed, 0.0)
            );
        }
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = MatchConfig {
            ball_speed: 0.0,
            ..MatchConfig::default()
        };
        assert!(MatchState::new(config, 0).is_err());
    }

    #[test]
    fn test_reset_clears_score_and_winner() {
        let mut state = test_state(3);
        state.score.add_point(Side::Left);
        state.winner = Some(Side::Left);
        state.phase = MatchPhase::GameOver;

        state.reset(9);
        assert_eq!(state.phase, MatchPhase::Serving);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.winner(), None);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = test_state(42);
        let json = serde_json::to_string(&state).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ball, state.ball);
        assert_eq!(back.score, state.score);
        assert_eq!(back.phase, state.phase);
        assert_eq!(back.server(), state.server());
    }
}
