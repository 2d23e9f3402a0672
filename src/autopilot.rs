//! Demo-mode steering
//!
//! Chases the nearest normal platform below the player and sidesteps spikes.
//! Good enough to keep a headless run alive for a while, not to play well.

use crate::input::MoveIntent;
use crate::sim::{Bounds, GameState, Platform, PlatformKind};

/// Pick this frame's move, if any
pub fn steer(state: &GameState) -> Option<MoveIntent> {
    let player = &state.player;
    let feet = player.bottom();
    let center = player.pos.x + player.size.x / 2.0;
    let below = |p: &&Platform| p.top() >= feet;

    let target = state
        .platforms
        .iter()
        .filter(below)
        .filter(|p| p.kind == PlatformKind::Normal)
        .min_by(|a, b| a.top().total_cmp(&b.top()));

    if let Some(platform) = target {
        let goal = platform.pos.x + platform.size.x / 2.0;
        let slack = state.config.move_step / 2.0;
        return if center < goal - slack {
            Some(MoveIntent::Right)
        } else if center > goal + slack {
            Some(MoveIntent::Left)
        } else {
            None
        };
    }

    // Nothing safe below: at least get out from over a spike
    let spike = state
        .platforms
        .iter()
        .filter(below)
        .filter(|p| p.kind == PlatformKind::Spike)
        .find(|p| center >= p.left() && center <= p.right())?;
    let spike_center = spike.pos.x + spike.size.x / 2.0;
    if center < spike_center && spike.left() > state.config.move_step {
        Some(MoveIntent::Left)
    } else {
        Some(MoveIntent::Right)
    }
}
