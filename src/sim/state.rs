//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::config::{ConfigError, WorldConfig};
use crate::input::MoveIntent;

/// Axis-aligned rectangle helpers shared by every entity
pub trait Bounds {
    /// Top-left corner
    fn pos(&self) -> Vec2;
    fn size(&self) -> Vec2;

    fn left(&self) -> f32 {
        self.pos().x
    }

    fn right(&self) -> f32 {
        self.pos().x + self.size().x
    }

    fn top(&self) -> f32 {
        self.pos().y
    }

    fn bottom(&self) -> f32 {
        self.pos().y + self.size().y
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = falling)
    pub vy: f32,
    pub score: u64,
    /// Total vertical travel this life, up or down
    pub distance: f32,
    /// Best distance since process start, kept across resets
    pub highscore: f32,
    pub has_jetpack: bool,
    pub jetpack_fuel: f32,
}

impl Player {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            pos: config.player_start(),
            size: config.player_size(),
            vy: 0.0,
            score: 0,
            distance: 0.0,
            highscore: 0.0,
            has_jetpack: config.initial_jetpack,
            jetpack_fuel: config.initial_fuel,
        }
    }

    /// Start a new life. Highscore survives; the jetpack does not.
    pub fn respawn(&mut self, config: &WorldConfig) {
        self.pos = config.player_start();
        self.vy = 0.0;
        self.score = 0;
        self.distance = 0.0;
        self.has_jetpack = false;
        self.jetpack_fuel = 0.0;
    }

    /// Whether thrust applies this tick
    pub fn jetpack_active(&self) -> bool {
        self.has_jetpack && self.jetpack_fuel > 0.0
    }

    /// Shift horizontally by one move step, clamped to the world
    pub fn step(&mut self, intent: MoveIntent, config: &WorldConfig) {
        let dx = match intent {
            MoveIntent::Left => -config.move_step,
            MoveIntent::Right => config.move_step,
        };
        self.pos.x = (self.pos.x + dx).clamp(0.0, config.player_max_x());
    }
}

impl Bounds for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    /// Landing on it ends the run
    Spike,
}

/// A platform slot in the fixed-size pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
}

impl Bounds for Platform {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds for Coin {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// Complete world state, owned by whoever drives the ticks
#[derive(Debug, Clone)]
pub struct GameState {
    /// Validated on construction; read-only outside the crate
    pub(crate) config: WorldConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Player,
    /// Fixed-length pool, recycled in place
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
    /// Lives started, including the current one
    pub runs: u32,
}

impl GameState {
    /// Create a new world with the given seed.
    ///
    /// Fails if the config could not drive a simulation (see
    /// [`WorldConfig::validate`]).
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = spawn::initialize_platforms(&config, &mut rng);
        let player = Player::new(&config);
        Ok(Self {
            config,
            seed,
            rng,
            player,
            platforms,
            coins: Vec::new(),
            time_ticks: 0,
            runs: 1,
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Start a new life in place: fresh platforms, no coins, highscore kept
    pub fn reset(&mut self) {
        self.player.respawn(&self.config);
        self.platforms = spawn::initialize_platforms(&self.config, &mut self.rng);
        self.coins.clear();
        self.runs += 1;
        log::info!(
            "Run {} started (highscore {})",
            self.runs,
            self.player.highscore.floor()
        );
    }

    /// Apply a move intent immediately (not queued until the next tick)
    pub fn apply_move(&mut self, intent: MoveIntent) {
        self.player.step(intent, &self.config);
    }
}
