//! Embark leveling engine
//!
//! Turns a lifetime XP total into a level, the XP earned within that level,
//! the XP still needed for the next one, and a progress percentage. Queries
//! never fail: out-of-range input saturates at level 1 or the max level.
//!
//! ```
//! use embark_leveling::progression::{calculate_level, xp_to_next_level};
//!
//! assert_eq!(calculate_level(450), 2);
//! assert_eq!(xp_to_next_level(450), 171);
//! ```

pub mod error;
pub mod progression;
pub mod profile;
pub mod data;

// Re-export commonly used types
pub use error::TableError;
pub use progression::{LevelBand, LevelProgress, ProgressionTable, MAX_LEVEL};
pub use profile::{ProfileSummary, StatsChange, StatsUpdate, UserStats};
