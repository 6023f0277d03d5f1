//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (the coin phase draw takes an injected generator)
//! - Stable iteration order (actors in parse/insertion order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod level;
pub mod parser;
pub mod tick;

pub use actor::{Actor, ActorId, ActorKind, ActorTag};
pub use level::{Grid, Level, Obstacle, Outcome, Touch};
pub use parser::{LevelParser, SpawnKind};
pub use tick::tick;
