//! JSON level packs
//!
//! A pack is a named list of level plans, each plan a list of text rows in
//! the parser's symbol format. The crate bundles a small demo pack.

use serde::{Deserialize, Serialize};

/// The bundled demo pack (two layouts)
pub const DEMO_PACK: &str = include_str!("../assets/levels.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelPack {
    pub name: String,
    pub plans: Vec<Vec<String>>,
}

impl LevelPack {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The demo pack ships with the crate and is validated by tests
    pub fn demo() -> Self {
        Self::from_json(DEMO_PACK).expect("bundled demo pack is valid JSON")
    }
}
