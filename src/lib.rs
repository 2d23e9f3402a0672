//! Jet Hop - an endless vertical platformer
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, spawning, game state)
//! - `config`: World constants, loadable from JSON
//! - `input`: Key to move-intent mapping
//! - `snapshot`: Read-only views for renderers and scoreboards
//! - `autopilot`: Demo-mode steering

pub mod autopilot;
pub mod config;
pub mod input;
pub mod sim;
pub mod snapshot;

pub use config::{ConfigError, WorldConfig};
pub use input::MoveIntent;
pub use snapshot::{RenderSnapshot, Scoreboard};

/// World configuration constants (defaults for [`WorldConfig`])
pub mod consts {
    /// World dimensions (origin top-left, y grows downward)
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.1;
    /// Velocity set on landing a normal platform (negative = up)
    pub const JUMP_VELOCITY: f32 = -5.0;
    /// Velocity held while the jetpack fires
    pub const JETPACK_THRUST: f32 = -10.0;
    /// Fuel burned per tick of thrust
    pub const FUEL_DRAIN: f32 = 0.5;

    /// Platform pool
    pub const PLATFORM_COUNT: usize = 6;
    pub const PLATFORM_SPACING: f32 = 100.0;
    pub const PLATFORM_WIDTH: f32 = 70.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    pub const SPIKE_CHANCE: f64 = 0.2;

    /// Coins
    pub const COIN_CHANCE: f64 = 0.3;
    pub const COIN_SIZE: f32 = 20.0;
    pub const REFUEL_CHANCE: f64 = 0.1;
    pub const REFUEL_AMOUNT: f32 = 100.0;

    /// Player
    pub const PLAYER_WIDTH: f32 = 5.0;
    pub const PLAYER_HEIGHT: f32 = 5.0;
    pub const MOVE_STEP: f32 = 20.0;

    /// World scroll per tick (platforms and coins)
    pub const SCROLL_SPEED: f32 = 1.0;

    /// Score awards
    pub const PLATFORM_SCORE: u64 = 10;
    pub const COIN_SCORE: u64 = 50;
}
