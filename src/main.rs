//! Headless demo driver
//!
//! Owns the two things the simulation core deliberately does not: a fixed
//! cadence scheduler and an input source. Runs a scripted match to
//! completion, announcing events as they happen, then dumps the final state
//! as JSON. Pass a seed as the first argument for a different opening serve.

use pong_core::MatchConfig;
use pong_core::sim::{
    InputAction, InputState, MatchEvent, MatchPhase, MatchState, tick,
};

/// Safety cap so a perfectly matched rally cannot spin forever
const MAX_TICKS: u64 = 200_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let config = MatchConfig::default();
    let mut state = match MatchState::new(config, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid match configuration: {err}");
            std::process::exit(1);
        }
    };
    log::info!("match started with seed {seed}");

    let mut input = InputState::default();
    announce(state.events());

    while state.phase != MatchPhase::GameOver && state.time_ticks < MAX_TICKS {
        steer(&mut input, &state);
        let snapshot = input.tick_input();
        tick(&mut state, &snapshot);
        announce(state.events());
    }

    if state.phase != MatchPhase::GameOver {
        log::warn!("match hit the tick cap without a winner");
    }

    println!(
        "final score  left {} : {} right",
        state.score.left, state.score.right
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&state).expect("state serializes")
    );
}

/// The demo's stand-in for a UI: print what a front end would announce
fn announce(events: &[MatchEvent]) {
    for event in events {
        match event {
            MatchEvent::ServeScheduled { server } => {
                println!("{} is serving", server.as_str());
            }
            MatchEvent::PointScored { side } => {
                println!("point to {}", side.as_str());
            }
            MatchEvent::MatchOver { winner } => {
                println!("{} wins!", winner.as_str());
            }
            MatchEvent::WallBounce
            | MatchEvent::PaddleBounce { .. }
            | MatchEvent::BallServed { .. } => {}
        }
    }
}

/// Scripted input source: each side chases the ball, aiming deliberately
/// off-center so rebounds pick up angle and rallies eventually end.
fn steer(input: &mut InputState, state: &MatchState) {
    let config = state.config();
    let ball_mid = state.ball.middle_y(config);

    let targets = [
        (
            state.paddle_left.middle_y(config),
            ball_mid + 30.0,
            InputAction::LeftUp,
            InputAction::LeftDown,
        ),
        (
            state.paddle_right.middle_y(config),
            ball_mid - 25.0,
            InputAction::RightUp,
            InputAction::RightDown,
        ),
    ];

    for (paddle_mid, target, up, down) in targets {
        input.release(up);
        input.release(down);
        if target < paddle_mid - config.paddle_speed {
            input.press(up);
        } else if target > paddle_mid + config.paddle_speed {
            input.press(down);
        }
    }
}
