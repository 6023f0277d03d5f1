//! Fixed timestep simulation tick
//!
//! One sequential pass per tick: every actor acts once against the shared
//! grid (parse order, never interleaved), then player contacts are resolved,
//! then the finish countdown runs once a terminal outcome holds.

use super::level::{Level, Touch};

/// Advance the level by one fixed timestep.
///
/// The caller paces ticks and stops once [`Level::is_finished`] is true;
/// calling again after that is a no-op.
pub fn tick(level: &mut Level, dt: f32) {
    if level.is_finished() {
        return;
    }

    for actor in level.actors.iter_mut() {
        actor.act(dt, &level.grid);
    }

    resolve_player_touches(level);

    // Terminal outcome holds: run down the display pause
    if level.status.is_some() {
        level.finish_delay -= dt;
    }
}

/// Classify what the player is touching and report it to the level: the
/// static obstacle under the player's box first, then the first intersecting
/// actor. Sticky status makes late reports harmless.
fn resolve_player_touches(level: &mut Level) {
    let Some(player) = level.player() else {
        return;
    };

    let obstacle = level.grid.obstacle_at(player.pos, player.size);
    let touched = level.actor_at(player).map(|actor| (actor.tag(), actor.id));

    if let Some(obstacle) = obstacle {
        level.player_touched(Touch::Obstacle(obstacle));
    }
    if let Some((tag, id)) = touched {
        level.player_touched(Touch::Actor { tag, id });
    }
}
