//! Collision detection and response
//!
//! Platforms are one-way: they only catch a falling player from above.
//! Coins are plain box overlaps from any direction.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Bounds, Coin, Platform, PlatformKind, Player};
use crate::config::WorldConfig;
use crate::consts::{COIN_SCORE, PLATFORM_SCORE};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Landed on a spike platform
    Spike,
    /// Dropped below the bottom of the world
    Fell,
}

/// Inclusive overlap of two horizontal spans
fn spans_overlap(a: &impl Bounds, b: &impl Bounds) -> bool {
    a.right() >= b.left() && a.left() <= b.right()
}

/// Inclusive axis-aligned box overlap
pub fn boxes_overlap(a: &impl Bounds, b: &impl Bounds) -> bool {
    spans_overlap(a, b) && a.bottom() >= b.top() && a.top() <= b.bottom()
}

/// Whether a falling player lands on the platform this tick.
///
/// The player's feet must not be below the platform's underside, and one more
/// step at the current velocity must reach its top edge.
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    player.vy > 0.0
        && player.bottom() <= platform.bottom()
        && player.bottom() + player.vy >= platform.top()
        && spans_overlap(player, platform)
}

/// Whether the player has dropped out of the world
pub fn fell_through_floor(player: &Player, config: &WorldConfig) -> bool {
    player.bottom() > config.world_height
}

/// Resolve platform and coin contacts after the player has moved.
///
/// Platforms are checked in pool order against the player's current velocity,
/// so a bounce (which makes velocity negative) stops later platforms from
/// catching the player in the same tick. A spike ends resolution immediately.
pub fn resolve(
    player: &mut Player,
    platforms: &[Platform],
    coins: &mut Vec<Coin>,
    config: &WorldConfig,
    rng: &mut impl Rng,
) -> Option<GameOverCause> {
    for platform in platforms {
        if !lands_on(player, platform) {
            continue;
        }
        match platform.kind {
            PlatformKind::Spike => return Some(GameOverCause::Spike),
            PlatformKind::Normal => {
                player.vy = config.jump_velocity;
                player.score += PLATFORM_SCORE;
            }
        }
    }

    coins.retain(|coin| {
        if !boxes_overlap(&*player, coin) {
            return true;
        }
        player.score += COIN_SCORE;
        if rng.random_bool(config.refuel_chance) {
            player.has_jetpack = true;
            player.jetpack_fuel = config.refuel_amount;
            log::debug!("Jetpack refueled to {}", config.refuel_amount);
        }
        false
    });

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn falling_player(config: &WorldConfig, pos: Vec2, vy: f32) -> Player {
        let mut player = Player::new(config);
        player.has_jetpack = false;
        player.jetpack_fuel = 0.0;
        player.pos = pos;
        player.vy = vy;
        player
    }

    fn platform(x: f32, y: f32, kind: PlatformKind) -> Platform {
        Platform {
            pos: Vec2::new(x, y),
            size: Vec2::new(70.0, 10.0),
            kind,
        }
    }

    fn coin(x: f32, y: f32) -> Coin {
        Coin {
            pos: Vec2::new(x, y),
            size: Vec2::splat(20.0),
        }
    }

    #[test]
    fn test_bounce_on_normal_platform() {
        let config = WorldConfig::default();
        // Feet at 296, platform top at 300
        let mut player = falling_player(&config, Vec2::new(120.0, 291.0), 6.0);
        let platforms = [platform(100.0, 300.0, PlatformKind::Normal)];
        let mut coins = Vec::new();

        let result = resolve(
            &mut player,
            &platforms,
            &mut coins,
            &config,
            &mut Pcg32::seed_from_u64(1),
        );

        assert_eq!(result, None);
        assert_eq!(player.vy, -5.0);
        assert_eq!(player.score, 10);
    }

    #[test]
    fn test_spike_ends_run() {
        let config = WorldConfig::default();
        let mut player = falling_player(&config, Vec2::new(120.0, 291.0), 6.0);
        let platforms = [platform(100.0, 300.0, PlatformKind::Spike)];
        let mut coins = Vec::new();

        let result = resolve(
            &mut player,
            &platforms,
            &mut coins,
            &config,
            &mut Pcg32::seed_from_u64(1),
        );

        assert_eq!(result, Some(GameOverCause::Spike));
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_rising_player_passes_through() {
        let config = WorldConfig::default();
        let player = falling_player(&config, Vec2::new(120.0, 291.0), -5.0);
        assert!(!lands_on(&player, &platform(100.0, 300.0, PlatformKind::Normal)));
    }

    #[test]
    fn test_no_landing_without_horizontal_overlap() {
        let config = WorldConfig::default();
        let player = falling_player(&config, Vec2::new(300.0, 291.0), 6.0);
        assert!(!lands_on(&player, &platform(100.0, 300.0, PlatformKind::Normal)));
    }

    #[test]
    fn test_edges_touching_counts_as_overlap() {
        let config = WorldConfig::default();
        // Right edge of the player exactly on the platform's left edge
        let player = falling_player(&config, Vec2::new(95.0, 291.0), 6.0);
        assert!(lands_on(&player, &platform(100.0, 300.0, PlatformKind::Normal)));
    }

    #[test]
    fn test_player_below_platform_not_caught() {
        let config = WorldConfig::default();
        // Feet at 315, below the platform underside at 310
        let player = falling_player(&config, Vec2::new(120.0, 310.0), 1.0);
        assert!(!lands_on(&player, &platform(100.0, 300.0, PlatformKind::Normal)));
    }

    #[test]
    fn test_first_bounce_shields_later_platforms() {
        let config = WorldConfig::default();
        let mut player = falling_player(&config, Vec2::new(120.0, 291.0), 6.0);
        let platforms = [
            platform(100.0, 300.0, PlatformKind::Normal),
            platform(110.0, 298.0, PlatformKind::Spike),
        ];
        let mut coins = Vec::new();

        let result = resolve(
            &mut player,
            &platforms,
            &mut coins,
            &config,
            &mut Pcg32::seed_from_u64(1),
        );

        assert_eq!(result, None);
        assert_eq!(player.score, 10);
    }

    #[test]
    fn test_spike_first_in_pool_ends_run_before_bounce() {
        let config = WorldConfig::default();
        let mut player = falling_player(&config, Vec2::new(120.0, 291.0), 6.0);
        let platforms = [
            platform(100.0, 300.0, PlatformKind::Spike),
            platform(110.0, 298.0, PlatformKind::Normal),
        ];
        let mut coins = Vec::new();

        let result = resolve(
            &mut player,
            &platforms,
            &mut coins,
            &config,
            &mut Pcg32::seed_from_u64(1),
        );

        assert_eq!(result, Some(GameOverCause::Spike));
        assert_eq!(player.score, 0);
        assert_eq!(player.vy, 6.0);
    }

    #[test]
    fn test_coin_pickup_scores_and_removes() {
        let config = WorldConfig {
            refuel_chance: 0.0,
            ..Default::default()
        };
        let mut player = falling_player(&config, Vec2::new(50.0, 50.0), -3.0);
        let mut coins = vec![coin(45.0, 40.0), coin(200.0, 200.0), coin(52.0, 54.0)];

        let result = resolve(
            &mut player,
            &[],
            &mut coins,
            &config,
            &mut Pcg32::seed_from_u64(1),
        );

        assert_eq!(result, None);
        assert_eq!(player.score, 100);
        assert_eq!(coins, vec![coin(200.0, 200.0)]);
        assert!(!player.has_jetpack);
    }

    #[test]
    fn test_coin_can_refuel_jetpack() {
        let config = WorldConfig {
            refuel_chance: 1.0,
            ..Default::default()
        };
        let mut player = falling_player(&config, Vec2::new(50.0, 50.0), 0.0);
        let mut coins = vec![coin(45.0, 40.0)];

        resolve(
            &mut player,
            &[],
            &mut coins,
            &config,
            &mut Pcg32::seed_from_u64(1),
        );

        assert!(player.has_jetpack);
        assert_eq!(player.jetpack_fuel, 100.0);
        assert_eq!(player.score, 50);
    }

    #[test]
    fn test_floor_fall() {
        let config = WorldConfig::default();
        let mut player = falling_player(&config, Vec2::new(0.0, 595.0), 0.0);
        assert!(!fell_through_floor(&player, &config));
        player.pos.y = 595.5;
        assert!(fell_through_floor(&player, &config));
    }
}
