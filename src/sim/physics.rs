//! Vertical motion of the player

use super::state::Player;
use crate::config::WorldConfig;

/// Integrate one tick of vertical motion.
///
/// A fueled jetpack replaces gravity outright: velocity is pinned to the
/// thrust value rather than accumulated. Fuel never drops below zero; the
/// tick that burns the last of it still gets full thrust.
pub fn advance(player: &mut Player, config: &WorldConfig) {
    if player.jetpack_active() {
        player.vy = config.jetpack_thrust;
        player.jetpack_fuel = (player.jetpack_fuel - config.fuel_drain).max(0.0);
    } else {
        player.vy += config.gravity;
    }

    player.pos.y += player.vy;
    player.distance += player.vy.abs();
    player.highscore = player.highscore.max(player.distance);
}
