//! Gridfall - a tile-based platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, collision, level state machine)
//! - `levels`: JSON level packs consumed by the parser
//!
//! Rendering, input polling and level sequencing live in the driver, not here.
//! The driver advances the simulation by calling `sim::tick` with a fixed
//! timestep and reads `Level` state for display.

pub mod levels;
pub mod sim;

pub use levels::LevelPack;
pub use sim::{Actor, ActorKind, ActorTag, Level, LevelParser, Obstacle, Outcome};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Countdown (in seconds) between a terminal outcome and level teardown
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player bounding box
    pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);
    /// The authored anchor marks the player's feet; spawn shifts up half a cell
    pub const PLAYER_ANCHOR_OFFSET: Vec2 = Vec2::new(0.0, -0.5);

    /// Coin bounding box
    pub const COIN_SIZE: Vec2 = Vec2::new(0.6, 0.6);
    /// Offset that centers a coin within its authored grid cell
    pub const COIN_ANCHOR_OFFSET: Vec2 = Vec2::new(0.2, 0.1);
    /// Angular speed of the coin's vertical bob (radians per second)
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    /// Amplitude of the coin's vertical bob (grid units)
    pub const COIN_SPRING_DIST: f32 = 0.07;

    /// Projectile velocities (grid units per second; y grows downward)
    pub const HORIZONTAL_FIREBALL_SPEED: Vec2 = Vec2::new(2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: Vec2 = Vec2::new(0.0, 2.0);
    pub const FIRE_RAIN_SPEED: Vec2 = Vec2::new(0.0, 3.0);

    /// Default actor size when a kind does not specify one
    pub const ACTOR_SIZE: Vec2 = Vec2::new(1.0, 1.0);
}
