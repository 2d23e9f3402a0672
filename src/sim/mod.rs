//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform concerns:
//! - One tick per frame, fixed order
//! - Seeded RNG only, so a seed plus an input sequence replays exactly
//! - Game over is a returned outcome, never an error

pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{GameOverCause, boxes_overlap, fell_through_floor, lands_on};
pub use state::{Bounds, Coin, GameState, Platform, PlatformKind, Player};
pub use tick::{GameOverEvent, TickOutcome, tick};
