//! World configuration
//!
//! Every tunable constant of the simulation lives here. Defaults mirror
//! [`crate::consts`]; a JSON file can override any subset of fields.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a [`WorldConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON for this schema
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// World constants for one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    /// Platforms and coins move down this much per tick
    pub scroll_speed: f32,

    // === Physics ===
    pub gravity: f32,
    pub jump_velocity: f32,
    pub jetpack_thrust: f32,
    pub fuel_drain: f32,

    // === Platforms ===
    pub platform_count: usize,
    pub platform_spacing: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub spike_chance: f64,

    // === Coins ===
    pub coin_chance: f64,
    pub coin_width: f32,
    pub coin_height: f32,
    pub refuel_chance: f64,
    pub refuel_amount: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub move_step: f32,
    /// Jetpack state for the very first life (resets always start without one)
    pub initial_jetpack: bool,
    pub initial_fuel: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            scroll_speed: SCROLL_SPEED,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            jetpack_thrust: JETPACK_THRUST,
            fuel_drain: FUEL_DRAIN,

            platform_count: PLATFORM_COUNT,
            platform_spacing: PLATFORM_SPACING,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            spike_chance: SPIKE_CHANCE,

            coin_chance: COIN_CHANCE,
            coin_width: COIN_SIZE,
            coin_height: COIN_SIZE,
            refuel_chance: REFUEL_CHANCE,
            refuel_amount: REFUEL_AMOUNT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            move_step: MOVE_STEP,
            initial_jetpack: true,
            initial_fuel: REFUEL_AMOUNT,
        }
    }
}

impl WorldConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load a JSON config file, falling back to defaults if it is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded world config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reals = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("scroll_speed", self.scroll_speed),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("jetpack_thrust", self.jetpack_thrust),
            ("fuel_drain", self.fuel_drain),
            ("platform_spacing", self.platform_spacing),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("coin_width", self.coin_width),
            ("coin_height", self.coin_height),
            ("refuel_amount", self.refuel_amount),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("move_step", self.move_step),
            ("initial_fuel", self.initial_fuel),
        ];
        if let Some((name, _)) = reals.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be finite")));
        }

        let sizes = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("coin_width", self.coin_width),
            ("coin_height", self.coin_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        if let Some((name, _)) = sizes.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::Invalid(format!("{name} must be positive")));
        }

        // Uniform x placement needs a non-empty range
        if self.platform_width >= self.world_width {
            return Err(ConfigError::Invalid(
                "platform_width must be smaller than world_width".to_string(),
            ));
        }
        if self.player_width > self.world_width {
            return Err(ConfigError::Invalid(
                "player_width must fit inside world_width".to_string(),
            ));
        }
        if self.fuel_drain <= 0.0 {
            return Err(ConfigError::Invalid("fuel_drain must be positive".to_string()));
        }
        if self.initial_fuel < 0.0 || self.refuel_amount < 0.0 {
            return Err(ConfigError::Invalid("fuel amounts must be non-negative".to_string()));
        }

        let chances = [
            ("spike_chance", self.spike_chance),
            ("coin_chance", self.coin_chance),
            ("refuel_chance", self.refuel_chance),
        ];
        if let Some((name, _)) = chances.iter().find(|(_, p)| !(0.0..=1.0).contains(p)) {
            return Err(ConfigError::Invalid(format!("{name} must be within [0, 1]")));
        }

        Ok(())
    }

    /// Where the player appears at the start of every life
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.world_width / 2.0 - 20.0, self.world_height - 100.0)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    pub fn platform_size(&self) -> Vec2 {
        Vec2::new(self.platform_width, self.platform_height)
    }

    pub fn coin_size(&self) -> Vec2 {
        Vec2::new(self.coin_width, self.coin_height)
    }

    /// Largest x a platform may take and still fit in the world
    pub fn platform_max_x(&self) -> f32 {
        self.world_width - self.platform_width
    }

    /// Largest x the player may take and still fit in the world
    pub fn player_max_x(&self) -> f32 {
        self.world_width - self.player_width
    }
}
