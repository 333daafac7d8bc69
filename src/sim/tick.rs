//! Fixed timestep simulation tick
//!
//! Advances a match one deterministic step. The order of operations within a
//! tick is fixed and observable: paddles move and clamp, the ball moves, wall
//! bounce, paddle bounce (left paddle tested first), then scoring (left exit
//! tested first).

use glam::Vec2;

use super::collision::impact_offset;
use super::input::{PaddleMove, TickInput};
use super::state::{MatchEvent, MatchPhase, MatchState, Side};
use crate::config::MatchConfig;

/// Advance the match by one fixed timestep.
///
/// A pause toggle consumes its whole tick: nothing moves on the tick that
/// pauses or resumes, so a pause/resume pair restores the exact pre-pause
/// state. While paused or after `GameOver` this is a no-op; the caller may
/// equally skip ticks based on [`MatchState::is_paused`].
pub fn tick(state: &mut MatchState, input: &TickInput) {
    state.clear_events();

    if state.phase == MatchPhase::GameOver {
        return;
    }

    if input.pause {
        state.paused = !state.paused;
        log::debug!("{}", if state.paused { "paused" } else { "resumed" });
        return;
    }
    if state.paused {
        return;
    }

    state.time_ticks += 1;
    let config = state.config().clone();

    match state.phase {
        MatchPhase::Serving => {
            // Movement input is ignored while the serve countdown runs
            if state.serve_delay > 0 {
                state.serve_delay -= 1;
            }
            if state.serve_delay == 0 {
                state.launch_serve();
            }
        }
        MatchPhase::Rallying => {
            move_paddles(state, input, &config);
            state.ball.pos += state.ball.vel;
            bounce_off_walls(state, &config);
            bounce_off_paddles(state, &config);
            check_scoring(state, &config);
        }
        MatchPhase::GameOver => {}
    }
}

fn move_paddles(state: &mut MatchState, input: &TickInput, config: &MatchConfig) {
    let pairs = [
        (&mut state.paddle_left, input.left),
        (&mut state.paddle_right, input.right),
    ];
    for (paddle, held) in pairs {
        paddle.vel_y = match held {
            Some(PaddleMove::Up) => -config.paddle_speed,
            Some(PaddleMove::Down) => config.paddle_speed,
            None => 0.0,
        };
        paddle.y = (paddle.y + paddle.vel_y).clamp(0.0, config.paddle_max_y());
    }
}

fn bounce_off_walls(state: &mut MatchState, config: &MatchConfig) {
    // Boundary ties count as contact
    let max_y = config.ball_max_y();
    if state.ball.pos.y <= 0.0 {
        state.ball.pos.y = 0.0;
        state.ball.vel.y = -state.ball.vel.y;
        state.push_event(MatchEvent::WallBounce);
    } else if state.ball.pos.y >= max_y {
        state.ball.pos.y = max_y;
        state.ball.vel.y = -state.ball.vel.y;
        state.push_event(MatchEvent::WallBounce);
    }
}

fn bounce_off_paddles(state: &mut MatchState, config: &MatchConfig) {
    let ball_box = state.ball.aabb(config);

    // Left paddle is tested first; a ball somehow overlapping both in the
    // same tick resolves against the left.
    let side = if ball_box.overlaps(&state.paddle_left.aabb(config)) {
        Side::Left
    } else if ball_box.overlaps(&state.paddle_right.aabb(config)) {
        Side::Right
    } else {
        return;
    };

    let paddle_mid = state.paddle(side).middle_y(config);
    let offset = impact_offset(
        state.ball.middle_y(config),
        paddle_mid,
        config.paddle_height,
    );

    // Rebound away from the struck paddle at full horizontal speed; the
    // vertical component comes from where on the face the ball landed.
    // The ball is not repositioned, so a fast enough ball can tunnel
    // straight through a paddle within one tick.
    let dir = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    state.ball.vel = Vec2::new(dir * config.ball_speed, config.ball_speed * offset);
    state.push_event(MatchEvent::PaddleBounce { side });
}

fn check_scoring(state: &mut MatchState, config: &MatchConfig) {
    // Left exit is tested first, so at most one side scores per tick even on
    // a degenerate board.
    let scorer = if state.ball.pos.x < 0.0 {
        Side::Right
    } else if state.ball.pos.x > config.board_width - config.ball_size {
        Side::Left
    } else {
        return;
    };

    state.score.add_point(scorer);
    state.push_event(MatchEvent::PointScored { side: scorer });
    log::info!(
        "{} scores ({} : {})",
        scorer.as_str(),
        state.score.left,
        state.score.right
    );

    if state.score.of(scorer) >= config.win_score {
        state.phase = MatchPhase::GameOver;
        state.winner = Some(scorer);
        state.push_event(MatchEvent::MatchOver { winner: scorer });
        log::info!("{} wins the match", scorer.as_str());
    } else {
        // Winner of the rally serves the next one
        state.enter_serving(scorer);
    }
}
