//! Simulation tick
//!
//! One call advances the world by exactly one frame. A run never truly ends:
//! game over resets the world in place and is reported to the caller.

use serde::{Deserialize, Serialize};

use super::collision::{self, GameOverCause};
use super::state::GameState;
use super::{physics, spawn};

/// Final numbers of a run that just ended
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameOverEvent {
    pub cause: GameOverCause,
    pub score: u64,
    /// Distance floored to whole units
    pub distance: u64,
    /// Tick on which the run ended
    pub tick: u64,
}

impl GameOverEvent {
    fn capture(state: &GameState, cause: GameOverCause) -> Self {
        Self {
            cause,
            score: state.player.score,
            distance: state.player.distance.floor() as u64,
            tick: state.time_ticks,
        }
    }

    /// Player-facing notification text
    pub fn message(&self) -> String {
        match self.cause {
            GameOverCause::Fell => format!(
                "Game Over! Score: {}, Distance: {}",
                self.score, self.distance
            ),
            GameOverCause::Spike => format!(
                "Game Over! You landed on spikes. Score: {}, Distance: {}",
                self.score, self.distance
            ),
        }
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Normal frame
    Running,
    /// The run ended this tick; the world has already been reset
    GameOver(GameOverEvent),
}

impl TickOutcome {
    pub fn game_over(&self) -> Option<&GameOverEvent> {
        match self {
            TickOutcome::Running => None,
            TickOutcome::GameOver(event) => Some(event),
        }
    }
}

/// Capture the run's result, then start a fresh life
fn end_run(state: &mut GameState, cause: GameOverCause) -> TickOutcome {
    let event = GameOverEvent::capture(state, cause);
    log::info!("{} ({:?}, tick {})", event.message(), cause, event.tick);
    state.reset();
    TickOutcome::GameOver(event)
}

/// Advance the world by one frame.
///
/// Order: player motion, floor check, platform and coin contacts, platform
/// scroll and recycle, coin scroll. Game over skips everything after it.
pub fn tick(state: &mut GameState) -> TickOutcome {
    state.time_ticks += 1;

    physics::advance(&mut state.player, &state.config);

    if collision::fell_through_floor(&state.player, &state.config) {
        return end_run(state, GameOverCause::Fell);
    }

    if let Some(cause) = collision::resolve(
        &mut state.player,
        &state.platforms,
        &mut state.coins,
        &state.config,
        &mut state.rng,
    ) {
        return end_run(state, cause);
    }

    spawn::scroll_platforms(
        &mut state.platforms,
        &mut state.coins,
        &state.config,
        &mut state.rng,
    );
    spawn::scroll_coins(&mut state.coins, &state.config);

    TickOutcome::Running
}
