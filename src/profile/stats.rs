//! User stats
//!
//! Glory and XP totals as stored on the user record, with the level kept in
//! sync through the progression table.

use serde::{Deserialize, Serialize};

use crate::progression::ProgressionTable;

/// Persistent glory/XP totals for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_glory: i64,
    pub total_xp: i64,
    pub level: u32,
}

/// Reward deltas applied after a quest completes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsUpdate {
    #[serde(default)]
    pub glory_delta: i64,
    #[serde(default)]
    pub xp_delta: i64,
}

/// What changed when a [`StatsUpdate`] was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsChange {
    pub level_before: u32,
    pub level_after: u32,
    pub levels_gained: u32,
    /// Glory actually added after clamping (may be negative)
    pub glory_gained: i64,
    /// XP actually added after clamping (may be negative)
    pub xp_gained: i64,
}

impl StatsChange {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_glory: 0,
            total_xp: 0,
            level: 1,
        }
    }
}

impl StatsUpdate {
    pub fn new(glory_delta: i64, xp_delta: i64) -> Self {
        Self { glory_delta, xp_delta }
    }
}

impl UserStats {
    /// Fresh user: no glory, no XP, level 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored totals, deriving the level
    pub fn from_totals(total_glory: i64, total_xp: i64, table: &ProgressionTable) -> Self {
        let total_xp = total_xp.max(0);
        Self {
            total_glory: total_glory.max(0),
            total_xp,
            level: table.calculate_level(total_xp),
        }
    }

    /// Apply reward deltas and recompute the level
    pub fn apply(&mut self, update: StatsUpdate, table: &ProgressionTable) -> StatsChange {
        let level_before = self.level;
        // Stored totals may arrive negative from an unvalidated record.
        let glory_before = self.total_glory.max(0);
        let xp_before = self.total_xp.max(0);

        self.total_glory = glory_before.saturating_add(update.glory_delta).max(0);
        self.total_xp = xp_before.saturating_add(update.xp_delta).max(0);
        self.level = table.calculate_level(self.total_xp);

        let change = StatsChange {
            level_before,
            level_after: self.level,
            levels_gained: self.level.saturating_sub(level_before),
            glory_gained: self.total_glory - glory_before,
            xp_gained: self.total_xp - xp_before,
        };

        if change.leveled_up() {
            log::info!(
                "Level up: {} -> {} ({} total XP)",
                change.level_before,
                change.level_after,
                self.total_xp
            );
        } else if change.level_after < change.level_before {
            log::debug!("Level dropped: {} -> {}", change.level_before, change.level_after);
        }

        change
    }

    /// Fix a stored level that disagrees with the XP total. Returns true if it changed.
    pub fn recalculate_level(&mut self, table: &ProgressionTable) -> bool {
        let level = table.calculate_level(self.total_xp);
        if level == self.level {
            return false;
        }
        log::warn!("Stored level {} does not match {} XP, correcting to {}", self.level, self.total_xp, level);
        self.level = level;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::MAX_LEVEL;

    #[test]
    fn test_new_user() {
        let stats = UserStats::new();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.total_xp, 0);
        assert_eq!(stats.total_glory, 0);
    }

    #[test]
    fn test_apply_without_level_up() {
        let table = ProgressionTable::standard();
        let mut stats = UserStats::new();
        let change = stats.apply(StatsUpdate::new(25, 150), table);

        assert_eq!(stats.total_glory, 25);
        assert_eq!(stats.total_xp, 150);
        assert_eq!(stats.level, 1);
        assert!(!change.leveled_up());
        assert_eq!(change.xp_gained, 150);
    }

    #[test]
    fn test_apply_multi_level_up() {
        let table = ProgressionTable::standard();
        let mut stats = UserStats::new();
        let change = stats.apply(StatsUpdate::new(0, 1_000), table);

        assert_eq!(stats.level, 4);
        assert_eq!(change.level_before, 1);
        assert_eq!(change.level_after, 4);
        assert_eq!(change.levels_gained, 3);
    }

    #[test]
    fn test_apply_clamps_at_zero() {
        let table = ProgressionTable::standard();
        let mut stats = UserStats::from_totals(10, 700, table);
        assert_eq!(stats.level, 3);

        let change = stats.apply(StatsUpdate::new(-50, -1_000), table);
        assert_eq!(stats.total_glory, 0);
        assert_eq!(stats.total_xp, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(change.glory_gained, -10);
        assert_eq!(change.xp_gained, -700);
        assert_eq!(change.levels_gained, 0);
    }

    #[test]
    fn test_apply_saturates_at_cap() {
        let table = ProgressionTable::standard();
        let mut stats = UserStats::from_totals(0, i64::MAX - 5, table);
        stats.apply(StatsUpdate::new(0, 100), table);
        assert_eq!(stats.total_xp, i64::MAX);
        assert_eq!(stats.level, MAX_LEVEL);
    }

    #[test]
    fn test_recalculate_stale_level() {
        let table = ProgressionTable::standard();
        // Stored under the old flat 10,000-XP-per-level rule
        let mut stats = UserStats { total_glory: 0, total_xp: 25_000, level: 3 };
        assert!(stats.recalculate_level(table));
        assert_eq!(stats.level, 29);
        assert!(!stats.recalculate_level(table));
    }

    #[test]
    fn test_apply_to_negative_stored_totals() {
        let table = ProgressionTable::standard();
        let mut stats: UserStats =
            serde_json::from_str(r#"{"total_glory": -5, "total_xp": -300, "level": 1}"#).unwrap();

        let change = stats.apply(StatsUpdate::default(), table);
        assert_eq!(stats.total_glory, 0);
        assert_eq!(stats.total_xp, 0);
        assert_eq!(change.glory_gained, 0);
        assert_eq!(change.xp_gained, 0);

        let mut stats = UserStats { total_glory: i64::MIN, total_xp: i64::MIN, level: 1 };
        let change = stats.apply(StatsUpdate::new(0, 300), table);
        assert_eq!(change.glory_gained, 0);
        assert_eq!(change.xp_gained, 300);
        assert_eq!(stats.level, 2);
    }

    #[test]
    fn test_update_defaults_from_json() {
        let update: StatsUpdate = serde_json::from_str(r#"{"xp_delta": 40}"#).unwrap();
        assert_eq!(update, StatsUpdate::new(0, 40));
    }
}
