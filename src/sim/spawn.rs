//! Procedural platform and coin generation
//!
//! Platforms form a fixed pool: once one scrolls off the bottom it is moved
//! back to the top with a fresh position and kind. Coins only appear on
//! recycled normal platforms and disappear off the bottom edge.

use glam::Vec2;
use rand::Rng;

use super::state::{Coin, Platform, PlatformKind};
use crate::config::WorldConfig;

/// Roll a platform kind
fn roll_kind(config: &WorldConfig, rng: &mut impl Rng) -> PlatformKind {
    if rng.random_bool(config.spike_chance) {
        PlatformKind::Spike
    } else {
        PlatformKind::Normal
    }
}

/// Uniform x that keeps the platform inside the world
fn roll_x(config: &WorldConfig, rng: &mut impl Rng) -> f32 {
    rng.random_range(0.0..=config.platform_max_x())
}

/// Build the starting pool, stacked upward from the bottom edge
pub fn initialize_platforms(config: &WorldConfig, rng: &mut impl Rng) -> Vec<Platform> {
    (0..config.platform_count)
        .map(|i| {
            let y = config.world_height - (i + 1) as f32 * config.platform_spacing;
            Platform {
                pos: Vec2::new(roll_x(config, rng), y),
                size: config.platform_size(),
                kind: roll_kind(config, rng),
            }
        })
        .collect()
}

/// Coin centered on a platform, resting on its top edge
pub fn coin_above(platform: &Platform, config: &WorldConfig) -> Coin {
    let size = config.coin_size();
    Coin {
        pos: Vec2::new(
            platform.pos.x + platform.size.x / 2.0 - size.x / 2.0,
            platform.pos.y - size.y,
        ),
        size,
    }
}

/// Move a platform back to the top of the world.
///
/// Returns the coin spawned on it, if any.
pub fn recycle(platform: &mut Platform, config: &WorldConfig, rng: &mut impl Rng) -> Option<Coin> {
    platform.pos = Vec2::new(roll_x(config, rng), 0.0);
    platform.kind = roll_kind(config, rng);

    if platform.kind == PlatformKind::Normal && rng.random_bool(config.coin_chance) {
        Some(coin_above(platform, config))
    } else {
        None
    }
}

/// Scroll every platform down and recycle the ones past the bottom edge
pub fn scroll_platforms(
    platforms: &mut [Platform],
    coins: &mut Vec<Coin>,
    config: &WorldConfig,
    rng: &mut impl Rng,
) {
    for platform in platforms.iter_mut() {
        platform.pos.y += config.scroll_speed;
        if platform.pos.y > config.world_height {
            let coin = recycle(platform, config, rng);
            log::debug!(
                "Recycled platform to x={:.1} as {:?}{}",
                platform.pos.x,
                platform.kind,
                if coin.is_some() { " with coin" } else { "" }
            );
            coins.extend(coin);
        }
    }
}

/// Scroll every coin down and drop the ones past the bottom edge
pub fn scroll_coins(coins: &mut Vec<Coin>, config: &WorldConfig) {
    for coin in coins.iter_mut() {
        coin.pos.y += config.scroll_speed;
    }
    coins.retain(|c| c.pos.y <= config.world_height);
}
