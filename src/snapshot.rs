//! Read-only views of the world for output adapters
//!
//! Renderers and scoreboards consume these; none of them can mutate the
//! simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Coin, GameState, Platform, PlatformKind, Player};

/// Jetpack flame drawn under the player
const FLAME_OFFSET_X: f32 = 10.0;
const FLAME_SIZE: Vec2 = Vec2::new(10.0, 20.0);

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub has_jetpack: bool,
    /// Present while the jetpack flag is set
    pub flame: Option<Rect>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        let flame = player.has_jetpack.then(|| Rect {
            pos: Vec2::new(player.pos.x + FLAME_OFFSET_X, player.pos.y + player.size.y),
            size: FLAME_SIZE,
        });
        Self {
            rect: Rect {
                pos: player.pos,
                size: player.size,
            },
            has_jetpack: player.has_jetpack,
            flame,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl PlatformView {
    /// Spikes draw as a triangle: bottom-left, top-center, bottom-right
    pub fn spike_triangle(&self) -> Option<[Vec2; 3]> {
        if self.kind != PlatformKind::Spike {
            return None;
        }
        let Rect { pos, size } = self.rect;
        Some([
            Vec2::new(pos.x, pos.y + size.y),
            Vec2::new(pos.x + size.x / 2.0, pos.y),
            pos + size,
        ])
    }
}

impl From<&Platform> for PlatformView {
    fn from(platform: &Platform) -> Self {
        Self {
            rect: Rect {
                pos: platform.pos,
                size: platform.size,
            },
            kind: platform.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinView {
    pub rect: Rect,
}

impl CoinView {
    /// Coins draw as circles inscribed in their box
    pub fn center(&self) -> Vec2 {
        self.rect.pos + self.rect.size / 2.0
    }

    pub fn radius(&self) -> f32 {
        self.rect.size.x / 2.0
    }
}

impl From<&Coin> for CoinView {
    fn from(coin: &Coin) -> Self {
        Self {
            rect: Rect {
                pos: coin.pos,
                size: coin.size,
            },
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub world_size: Vec2,
    pub player: PlayerView,
    pub platforms: Vec<PlatformView>,
    pub coins: Vec<CoinView>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            world_size: Vec2::new(state.config.world_width, state.config.world_height),
            player: PlayerView::from(&state.player),
            platforms: state.platforms.iter().map(PlatformView::from).collect(),
            coins: state.coins.iter().map(CoinView::from).collect(),
        }
    }
}

/// HUD numbers, distances floored to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub distance: u64,
    pub highscore: u64,
}

impl Scoreboard {
    pub fn capture(state: &GameState) -> Self {
        Self {
            score: state.player.score,
            distance: state.player.distance.floor() as u64,
            highscore: state.player.highscore.floor() as u64,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "score {} | distance {} | best {}",
            self.score, self.distance, self.highscore
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;

    #[test]
    fn test_scoreboard_floors_distances() {
        let mut state = GameState::new(WorldConfig::default(), 1).expect("valid config");
        state.player.score = 60;
        state.player.distance = 12.9;
        state.player.highscore = 99.99;

        let board = Scoreboard::capture(&state);

        assert_eq!(
            board,
            Scoreboard {
                score: 60,
                distance: 12,
                highscore: 99
            }
        );
        assert_eq!(board.to_string(), "score 60 | distance 12 | best 99");
    }

    #[test]
    fn test_snapshot_mirrors_world() {
        let mut state = GameState::new(WorldConfig::default(), 1).expect("valid config");
        state.coins.push(Coin {
            pos: Vec2::new(40.0, 60.0),
            size: Vec2::splat(20.0),
        });

        let snapshot = RenderSnapshot::capture(&state);

        assert_eq!(snapshot.world_size, Vec2::new(400.0, 600.0));
        assert_eq!(snapshot.platforms.len(), 6);
        assert_eq!(snapshot.coins.len(), 1);
        assert_eq!(snapshot.coins[0].center(), Vec2::new(50.0, 70.0));
        assert_eq!(snapshot.coins[0].radius(), 10.0);
        assert_eq!(snapshot.player.rect.pos, state.player.pos);
    }

    #[test]
    fn test_flame_only_with_jetpack() {
        let mut state = GameState::new(WorldConfig::default(), 1).expect("valid config");
        state.player.pos = Vec2::new(100.0, 200.0);

        let flame = RenderSnapshot::capture(&state).player.flame.expect("jetpack on");
        assert_eq!(flame.pos, Vec2::new(110.0, 205.0));
        assert_eq!(flame.size, Vec2::new(10.0, 20.0));

        state.player.has_jetpack = false;
        assert!(RenderSnapshot::capture(&state).player.flame.is_none());
    }

    #[test]
    fn test_spike_triangle() {
        let spike = PlatformView {
            rect: Rect {
                pos: Vec2::new(10.0, 100.0),
                size: Vec2::new(70.0, 10.0),
            },
            kind: PlatformKind::Spike,
        };
        assert_eq!(
            spike.spike_triangle(),
            Some([
                Vec2::new(10.0, 110.0),
                Vec2::new(45.0, 100.0),
                Vec2::new(80.0, 110.0),
            ])
        );

        let normal = PlatformView {
            kind: PlatformKind::Normal,
            ..spike
        };
        assert!(normal.spike_triangle().is_none());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(WorldConfig::default(), 1).expect("valid config");
        let json = serde_json::to_string(&RenderSnapshot::capture(&state)).expect("serialize");
        assert!(json.contains("\"platforms\""));
        assert!(json.contains("\"Normal\"") || json.contains("\"Spike\""));
    }
}
