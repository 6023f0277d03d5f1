//! Level state: static terrain grid, live actors and the win/lose machine
//!
//! The grid is immutable after parsing; the actor list and status are the
//! only mutable state. `status` moves from in-progress to a terminal outcome
//! exactly once, then `finish_delay` counts down before the level is torn
//! down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorTag};
use crate::consts::FINISH_DELAY;

/// Static terrain classification, distinct from dynamic actor collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Obstacle {
    Wall,
    Lava,
}

/// Terminal level outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// What the player touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    Obstacle(Obstacle),
    Actor { tag: ActorTag, id: ActorId },
}

/// The static obstacle grid.
///
/// Rows may be ragged (no padding); width is the longest row. Row index is
/// the y coordinate, column index the x coordinate, y growing downward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<Obstacle>>>,
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell lookup; out-of-range cells (including ragged short rows) are empty
    pub fn get(&self, row: usize, col: usize) -> Option<Obstacle> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Classify a probe box against the static world.
    ///
    /// Precedence matters near the edges: the left/top/right bounds check runs
    /// before the bottom one, so a probe that violates both classifies as a
    /// wall collision, never lava.
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle> {
        let left = pos.x;
        let top = pos.y;
        let right = pos.x + size.x;
        let bottom = pos.y + size.y;

        if left < 0.0 || right > self.width as f32 || top < 0.0 {
            return Some(Obstacle::Wall);
        }
        if bottom > self.rows.len() as f32 {
            return Some(Obstacle::Lava);
        }

        // In-bounds now, so the float-to-index casts cannot go negative
        for row in top.floor() as usize..bottom.ceil() as usize {
            for col in left.floor() as usize..right.ceil() as usize {
                if let Some(obstacle) = self.get(row, col) {
                    return Some(obstacle);
                }
            }
        }

        None
    }
}

/// A single level: terrain, live actors and derived status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub grid: Grid,
    /// Live actor set, in insertion order. Owns actor lifetime.
    pub actors: Vec<Actor>,
    /// Non-owning lookup into `actors`, found by tag at construction
    player_id: Option<ActorId>,
    /// `None` while in progress; terminal once set
    pub status: Option<Outcome>,
    /// Counts down after a terminal status; the level is finished once negative
    pub finish_delay: f32,
}

impl Level {
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        let player_id = actors
            .iter()
            .find(|a| a.tag() == ActorTag::Player)
            .map(|a| a.id);
        Self {
            grid,
            actors,
            player_id,
            status: None,
            finish_delay: FINISH_DELAY,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn player(&self) -> Option<&Actor> {
        let id = self.player_id?;
        self.actors.iter().find(|a| a.id == id)
    }

    /// True once a terminal status holds and the display pause has elapsed
    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// First other actor whose box intersects `actor`'s, in insertion order
    pub fn actor_at(&self, actor: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|other| other.intersects(actor))
    }

    /// Delegates to the grid; see [`Grid::obstacle_at`]
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove the actor with the given id; no-op when absent
    pub fn remove_actor(&mut self, id: ActorId) {
        if let Some(index) = self.actors.iter().position(|a| a.id == id) {
            self.actors.remove(index);
        }
    }

    /// True when no live actor carries the given tag
    pub fn no_more_actors(&self, tag: ActorTag) -> bool {
        !self.actors.iter().any(|a| a.tag() == tag)
    }

    /// Report a player contact and update status.
    ///
    /// Terminal status is sticky: once won or lost, later touches are ignored.
    pub fn player_touched(&mut self, touch: Touch) {
        if self.status.is_some() {
            return;
        }
        match touch {
            Touch::Obstacle(Obstacle::Lava) | Touch::Actor { tag: ActorTag::Fireball, .. } => {
                log::info!("player touched {touch:?}: level lost");
                self.status = Some(Outcome::Lost);
            }
            Touch::Actor { tag: ActorTag::Coin, id } => {
                self.remove_actor(id);
                if self.no_more_actors(ActorTag::Coin) {
                    log::info!("last coin collected: level won");
                    self.status = Some(Outcome::Won);
                } else {
                    log::debug!("coin {id} collected");
                }
            }
            Touch::Obstacle(Obstacle::Wall) | Touch::Actor { .. } => {}
        }
    }
}
