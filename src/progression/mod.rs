//! Progression systems

pub mod xp;
pub mod table;
pub mod band;

pub use band::LevelBand;
pub use table::{ProgressionTable, TableSource, MAX_LEVEL, CUMULATIVE_XP_REQUIREMENTS, XP_PER_LEVEL};
pub use xp::{LevelProgress, calculate_level, xp_to_next_level, current_level_xp, level_progress, xp_for_level};
