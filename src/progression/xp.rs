//! Experience and leveling
//!
//! XP-to-level lookups over a [`ProgressionTable`]. Every query saturates:
//! negative XP counts as zero, XP past the last entry counts as max level.
//!
//! The free functions run against the standard table.

use serde::{Deserialize, Serialize};

use super::table::ProgressionTable;

/// Snapshot of a player's position on the level curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Lifetime XP, clamped at zero
    pub total_xp: i64,
    /// Current level (1..=max)
    pub level: u32,
    /// XP earned since reaching the current level
    pub current_level_xp: i64,
    /// XP still needed for the next level (0 at max level)
    pub xp_to_next: i64,
    /// Progress toward the next level (0.0 - 100.0)
    pub progress_percent: f64,
    pub is_max_level: bool,
}

impl ProgressionTable {
    /// Highest level whose cumulative requirement is <= `total_xp`
    pub fn calculate_level(&self, total_xp: i64) -> u32 {
        let xp = total_xp.max(0);
        // Entry 0 is always 0, so at least one entry matches.
        self.cumulative().partition_point(|&required| required <= xp) as u32
    }

    /// XP still needed to reach the next level
    pub fn xp_to_next_level(&self, total_xp: i64) -> i64 {
        let xp = total_xp.max(0);
        let level = self.calculate_level(xp);
        if level >= self.max_level() {
            return 0;
        }
        self.cumulative()[level as usize] - xp
    }

    /// XP earned within the current level. Past the cap this is the banked overflow.
    pub fn current_level_xp(&self, total_xp: i64) -> i64 {
        let xp = total_xp.max(0);
        let level = self.calculate_level(xp);
        xp - self.cumulative()[level as usize - 1]
    }

    /// Progress toward the next level as a percentage (0.0 - 100.0)
    pub fn level_progress(&self, total_xp: i64) -> f64 {
        let level = self.calculate_level(total_xp);
        if level >= self.max_level() {
            return 100.0;
        }

        let needed = self.deltas()[level as usize];
        if needed == 0 {
            return 100.0;
        }

        (self.current_level_xp(total_xp) as f64 / needed as f64) * 100.0
    }

    /// Cumulative XP required to reach `level`, clamped into range
    pub fn xp_for_level(&self, level: i64) -> i64 {
        let level = self.clamp_level(level);
        self.cumulative()[level as usize - 1]
    }

    /// XP needed to advance into `level` from the one below, clamped into range
    pub fn xp_delta_for_level(&self, level: i64) -> i64 {
        let level = self.clamp_level(level);
        self.deltas()[level as usize - 1]
    }

    /// All level queries for one XP total
    pub fn progress(&self, total_xp: i64) -> LevelProgress {
        let level = self.calculate_level(total_xp);
        LevelProgress {
            total_xp: total_xp.max(0),
            level,
            current_level_xp: self.current_level_xp(total_xp),
            xp_to_next: self.xp_to_next_level(total_xp),
            progress_percent: self.level_progress(total_xp),
            is_max_level: level >= self.max_level(),
        }
    }

    /// Number of levels crossed going from `before_xp` to `after_xp`
    pub fn levels_gained(&self, before_xp: i64, after_xp: i64) -> u32 {
        self.calculate_level(after_xp)
            .saturating_sub(self.calculate_level(before_xp))
    }
}

/// Calculate the level for a lifetime XP total
pub fn calculate_level(total_xp: i64) -> u32 {
    ProgressionTable::standard().calculate_level(total_xp)
}

/// Calculate XP needed to reach the next level (0 at max level)
pub fn xp_to_next_level(total_xp: i64) -> i64 {
    ProgressionTable::standard().xp_to_next_level(total_xp)
}

/// XP earned within the current level
pub fn current_level_xp(total_xp: i64) -> i64 {
    ProgressionTable::standard().current_level_xp(total_xp)
}

/// Progress to the next level as a percentage (0.0 - 100.0)
pub fn level_progress(total_xp: i64) -> f64 {
    ProgressionTable::standard().level_progress(total_xp)
}

/// Cumulative XP needed to reach a specific level
pub fn xp_for_level(level: i64) -> i64 {
    ProgressionTable::standard().xp_for_level(level)
}
