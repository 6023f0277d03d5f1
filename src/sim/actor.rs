//! Actors and axis-aligned bounding-box intersection
//!
//! Every entity in a level is an [`Actor`]: a position, a size, a velocity and
//! a kind. The kind is a closed sum type carrying per-kind state (the coin's
//! spring phase, a projectile's spawn point), dispatched through a single
//! [`Actor::act`] per tick.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::level::Grid;
use crate::consts::*;

/// Stable actor identity, assigned in parse/insertion order.
///
/// Identity (not geometry) decides self-intersection and removal.
pub type ActorId = u32;

/// Per-kind motion state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Purely positional; the driver mutates `pos`/`speed` externally
    Player,
    /// Bobs around a fixed anchor, ignores obstacles
    Coin { start_pos: Vec2, spring: f32 },
    /// Constant-velocity projectile that reverses on obstacle contact
    HorizontalFireball,
    VerticalFireball,
    /// Falling projectile that teleports back to its spawn point on contact
    FireRain { start_pos: Vec2 },
}

/// Classification used for touch outcomes and `no_more_actors` queries.
///
/// All three projectile kinds classify as `Fireball`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorTag {
    Player,
    Coin,
    Fireball,
}

impl ActorKind {
    pub fn tag(&self) -> ActorTag {
        match self {
            ActorKind::Player => ActorTag::Player,
            ActorKind::Coin { .. } => ActorTag::Coin,
            ActorKind::HorizontalFireball
            | ActorKind::VerticalFireball
            | ActorKind::FireRain { .. } => ActorTag::Fireball,
        }
    }
}

/// A positioned, sized, moving entity in a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: Vec2,
    pub kind: ActorKind,
}

impl Actor {
    /// Player spawns with its feet at the authored anchor
    pub fn player(id: ActorId, anchor: Vec2) -> Self {
        Self {
            id,
            pos: anchor + PLAYER_ANCHOR_OFFSET,
            size: PLAYER_SIZE,
            speed: Vec2::ZERO,
            kind: ActorKind::Player,
        }
    }

    /// Coin spawns centered in its cell with a random initial bob phase
    pub fn coin(id: ActorId, anchor: Vec2, rng: &mut impl Rng) -> Self {
        let pos = anchor + COIN_ANCHOR_OFFSET;
        Self {
            id,
            pos,
            size: COIN_SIZE,
            speed: Vec2::ZERO,
            kind: ActorKind::Coin {
                start_pos: pos,
                spring: rng.random_range(0.0..TAU),
            },
        }
    }

    pub fn horizontal_fireball(id: ActorId, anchor: Vec2) -> Self {
        Self {
            id,
            pos: anchor,
            size: ACTOR_SIZE,
            speed: HORIZONTAL_FIREBALL_SPEED,
            kind: ActorKind::HorizontalFireball,
        }
    }

    pub fn vertical_fireball(id: ActorId, anchor: Vec2) -> Self {
        Self {
            id,
            pos: anchor,
            size: ACTOR_SIZE,
            speed: VERTICAL_FIREBALL_SPEED,
            kind: ActorKind::VerticalFireball,
        }
    }

    pub fn fire_rain(id: ActorId, anchor: Vec2) -> Self {
        Self {
            id,
            pos: anchor,
            size: ACTOR_SIZE,
            speed: FIRE_RAIN_SPEED,
            kind: ActorKind::FireRain { start_pos: anchor },
        }
    }

    pub fn tag(&self) -> ActorTag {
        self.kind.tag()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// AABB overlap test. An actor never intersects itself, and boxes whose
    /// edges exactly touch do not count as intersecting.
    pub fn intersects(&self, other: &Actor) -> bool {
        if self.id == other.id {
            return false;
        }
        !(self.top() >= other.bottom()
            || self.bottom() <= other.top()
            || self.right() <= other.left()
            || self.left() >= other.right())
    }

    /// Position after `dt` seconds of constant-velocity motion
    pub fn next_position(&self, dt: f32) -> Vec2 {
        if self.speed == Vec2::ZERO {
            self.pos
        } else {
            self.pos + self.speed * dt
        }
    }

    /// Advance this actor by one tick against the static grid.
    ///
    /// Projectiles probe their next position and stay put on contact; coins
    /// bob unconditionally; the player does nothing (driver-controlled).
    pub fn act(&mut self, dt: f32, grid: &Grid) {
        match self.kind {
            ActorKind::Player => {}
            ActorKind::Coin {
                start_pos,
                ref mut spring,
            } => {
                *spring += COIN_SPRING_SPEED * dt;
                self.pos = start_pos + Vec2::new(0.0, spring.sin() * COIN_SPRING_DIST);
            }
            ActorKind::HorizontalFireball | ActorKind::VerticalFireball => {
                let next = self.next_position(dt);
                if grid.obstacle_at(next, self.size).is_none() {
                    self.pos = next;
                } else {
                    self.speed = -self.speed;
                }
            }
            ActorKind::FireRain { start_pos } => {
                let next = self.next_position(dt);
                if grid.obstacle_at(next, self.size).is_none() {
                    self.pos = next;
                } else {
                    self.pos = start_pos;
                }
            }
        }
    }
}
