//! Keyboard input mapping
//!
//! The host forwards key names as it receives them; only the two arrow keys
//! move the player. Intents apply immediately via [`GameState::apply_move`].
//!
//! [`GameState::apply_move`]: crate::sim::GameState::apply_move

use serde::{Deserialize, Serialize};

/// A discrete horizontal move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveIntent {
    Left,
    Right,
}

impl MoveIntent {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to an intent
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(MoveIntent::Left),
            "ArrowRight" => Some(MoveIntent::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveIntent::Left => "left",
            MoveIntent::Right => "right",
        }
    }
}
