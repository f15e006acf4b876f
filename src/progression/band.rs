//! Level bands
//!
//! Coarse tiers used for profile badges and colouring.

use serde::{Deserialize, Serialize};

/// Display tier for a range of levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LevelBand {
    Initiate,
    Adventurer,
    Veteran,
    Champion,
    Hero,
    Legend,
}

impl LevelBand {
    pub const ALL: [LevelBand; 6] = [
        LevelBand::Initiate,
        LevelBand::Adventurer,
        LevelBand::Veteran,
        LevelBand::Champion,
        LevelBand::Hero,
        LevelBand::Legend,
    ];

    /// Band for a level
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=9 => LevelBand::Initiate,
            10..=19 => LevelBand::Adventurer,
            20..=29 => LevelBand::Veteran,
            30..=39 => LevelBand::Champion,
            40..=49 => LevelBand::Hero,
            _ => LevelBand::Legend,
        }
    }

    /// Lowest level in this band
    pub fn min_level(&self) -> u32 {
        match self {
            LevelBand::Initiate => 1,
            LevelBand::Adventurer => 10,
            LevelBand::Veteran => 20,
            LevelBand::Champion => 30,
            LevelBand::Hero => 40,
            LevelBand::Legend => 50,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LevelBand::Initiate => "Initiate",
            LevelBand::Adventurer => "Adventurer",
            LevelBand::Veteran => "Veteran",
            LevelBand::Champion => "Champion",
            LevelBand::Hero => "Hero",
            LevelBand::Legend => "Legend",
        }
    }

    /// Tailwind gradient classes for the level badge
    pub fn gradient(&self) -> &'static str {
        match self {
            LevelBand::Initiate => "from-gray-500 to-gray-600",
            LevelBand::Adventurer => "from-green-500 to-green-600",
            LevelBand::Veteran => "from-blue-500 to-blue-600",
            LevelBand::Champion => "from-purple-500 to-purple-600",
            LevelBand::Hero => "from-orange-500 to-red-600",
            LevelBand::Legend => "from-red-600 to-pink-600",
        }
    }
}
