//! Textual level plans → [`Level`]
//!
//! Each character of a plan row resolves independently against two symbol
//! tables: a fixed obstacle table (`'x'` wall, `'!'` lava) and a
//! caller-supplied actor table mapping characters to spawnable kinds.
//! Unrecognized characters degrade gracefully: empty terrain, no actor.

use std::collections::HashMap;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId};
use super::level::{Grid, Level, Obstacle};

/// Spawnable actor kinds, the static targets of the actor symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Player,
    Coin,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
}

impl SpawnKind {
    /// Instantiate at the given plan anchor (column, row)
    fn spawn(self, id: ActorId, anchor: Vec2, rng: &mut impl Rng) -> Actor {
        match self {
            SpawnKind::Player => Actor::player(id, anchor),
            SpawnKind::Coin => Actor::coin(id, anchor, rng),
            SpawnKind::HorizontalFireball => Actor::horizontal_fireball(id, anchor),
            SpawnKind::VerticalFireball => Actor::vertical_fireball(id, anchor),
            SpawnKind::FireRain => Actor::fire_rain(id, anchor),
        }
    }
}

/// Translates plan rows into a grid of static obstacles plus spawned actors
#[derive(Debug, Clone)]
pub struct LevelParser {
    symbols: HashMap<char, SpawnKind>,
}

impl LevelParser {
    pub fn new(symbols: HashMap<char, SpawnKind>) -> Self {
        Self { symbols }
    }

    /// The conventional actor table: `@` player, `o` coin, `=`/`|` horizontal
    /// and vertical fireballs, `v` fire rain
    pub fn default_symbols() -> HashMap<char, SpawnKind> {
        HashMap::from([
            ('@', SpawnKind::Player),
            ('o', SpawnKind::Coin),
            ('=', SpawnKind::HorizontalFireball),
            ('|', SpawnKind::VerticalFireball),
            ('v', SpawnKind::FireRain),
        ])
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<SpawnKind> {
        self.symbols.get(&symbol).copied()
    }

    /// Obstacle table is fixed; anything unrecognized is empty terrain
    pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    /// Map every character through the obstacle table; ragged rows are kept
    pub fn create_grid<S: AsRef<str>>(&self, plan: &[S]) -> Grid {
        let rows = plan
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(Self::obstacle_from_symbol)
                    .collect()
            })
            .collect();
        Grid::new(rows)
    }

    /// Spawn an actor for every mapped character, row-major, ids in scan order
    pub fn create_actors<S: AsRef<str>>(&self, plan: &[S], rng: &mut impl Rng) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (row, line) in plan.iter().enumerate() {
            for (col, symbol) in line.as_ref().chars().enumerate() {
                if let Some(kind) = self.actor_from_symbol(symbol) {
                    let anchor = Vec2::new(col as f32, row as f32);
                    let id = actors.len() as ActorId;
                    actors.push(kind.spawn(id, anchor, rng));
                }
            }
        }
        actors
    }

    /// Build a level from plan rows. Empty rows are dropped before parsing.
    pub fn parse<S: AsRef<str>>(&self, plan: &[S], rng: &mut impl Rng) -> Level {
        let plan: Vec<&str> = plan
            .iter()
            .map(AsRef::as_ref)
            .filter(|row| !row.is_empty())
            .collect();
        let grid = self.create_grid(&plan);
        let actors = self.create_actors(&plan, rng);
        log::debug!(
            "parsed level: {}x{} grid, {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Level::new(grid, actors)
    }
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(Self::default_symbols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::{ActorKind, ActorTag};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0xDEC0DE)
    }

    #[test]
    fn test_obstacle_symbols() {
        assert_eq!(LevelParser::obstacle_from_symbol('x'), Some(Obstacle::Wall));
        assert_eq!(LevelParser::obstacle_from_symbol('!'), Some(Obstacle::Lava));
        assert_eq!(LevelParser::obstacle_from_symbol(' '), None);
        assert_eq!(LevelParser::obstacle_from_symbol('@'), None);
    }

    #[test]
    fn test_create_grid_keeps_ragged_rows() {
        let parser = LevelParser::default();
        let grid = parser.create_grid(&["x!", " ", "xxxx"]);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.get(0, 0), Some(Obstacle::Wall));
        assert_eq!(grid.get(0, 1), Some(Obstacle::Lava));
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.get(1, 3), None);
        assert_eq!(grid.get(2, 3), Some(Obstacle::Wall));
    }

    #[test]
    fn test_actor_symbols_spawn_in_scan_order() {
        let parser = LevelParser::default();
        let actors = parser.create_actors(&["@ o"], &mut rng());
        assert_eq!(actors.len(), 2);

        // Player anchored at column 0, shifted up by half a cell
        assert_eq!(actors[0].id, 0);
        assert_eq!(actors[0].tag(), ActorTag::Player);
        assert_eq!(actors[0].pos, Vec2::new(0.0, -0.5));

        // Coin anchored at column 2, centered in its cell
        assert_eq!(actors[1].id, 1);
        assert_eq!(actors[1].tag(), ActorTag::Coin);
        assert_eq!(actors[1].pos, Vec2::new(2.2, 0.1));
    }

    #[test]
    fn test_unknown_symbols_are_skipped() {
        let parser = LevelParser::default();
        let actors = parser.create_actors(&["?x!*"], &mut rng());
        assert!(actors.is_empty());
    }

    #[test]
    fn test_fireball_kinds_from_symbols() {
        let parser = LevelParser::default();
        let actors = parser.create_actors(&["=|v"], &mut rng());
        assert_eq!(actors[0].kind, ActorKind::HorizontalFireball);
        assert_eq!(actors[1].kind, ActorKind::VerticalFireball);
        assert!(matches!(actors[2].kind, ActorKind::FireRain { .. }));
        assert_eq!(actors[2].speed, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_custom_symbol_table() {
        let parser = LevelParser::new(HashMap::from([('P', SpawnKind::Player)]));
        let actors = parser.create_actors(&["@P"], &mut rng());
        assert_eq!(actors.len(), 1);
        assert_eq!(actors[0].tag(), ActorTag::Player);
        assert_eq!(actors[0].pos.x, 1.0);
    }

    #[test]
    fn test_parse_drops_empty_rows() {
        let parser = LevelParser::default();
        let level = parser.parse(&["", "x!", ""], &mut rng());
        assert_eq!(level.height(), 1);
        assert_eq!(level.grid.get(0, 0), Some(Obstacle::Wall));
    }

    #[test]
    fn test_parse_builds_grid_and_actors() {
        let parser = LevelParser::default();
        let level = parser.parse(
            &[
                "     ",
                "  o  ",
                " @ = ",
                "xxxxx",
            ],
            &mut rng(),
        );
        assert_eq!(level.width(), 5);
        assert_eq!(level.height(), 4);
        assert_eq!(level.actors.len(), 3);
        assert!(level.player().is_some());
        // Actor cells never become terrain
        assert_eq!(level.grid.get(2, 1), None);
        assert_eq!(level.grid.get(3, 1), Some(Obstacle::Wall));
    }

    #[test]
    fn test_seeded_parse_is_deterministic() {
        let parser = LevelParser::default();
        let a = parser.parse(&["o o o"], &mut rng());
        let b = parser.parse(&["o o o"], &mut rng());
        assert_eq!(a.actors, b.actors);
    }
}
