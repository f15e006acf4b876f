//! Profile summary
//!
//! Everything the profile page shows about a user's level, computed in one go.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progression::{LevelBand, ProgressionTable};

/// Level and activity figures for the profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub current_level: u32,
    pub xp_to_next: i64,
    pub level_progress_percent: f64,
    #[serde(rename = "currentLevelXP")]
    pub current_level_xp: i64,
    pub level_band: LevelBand,
    /// Gradient classes for the level badge
    pub level_color: String,
    pub days_active: i64,
}

impl ProfileSummary {
    pub fn build(
        total_xp: i64,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
        table: &ProgressionTable,
    ) -> Self {
        let progress = table.progress(total_xp);
        let band = LevelBand::for_level(progress.level);
        Self {
            current_level: progress.level,
            xp_to_next: progress.xp_to_next,
            level_progress_percent: progress.progress_percent,
            current_level_xp: progress.current_level_xp,
            level_band: band,
            level_color: band.gradient().to_string(),
            days_active: days_active(created_at, now),
        }
    }

    /// Build against the current time
    pub fn build_now(total_xp: i64, created_at: DateTime<Utc>, table: &ProgressionTable) -> Self {
        Self::build(total_xp, created_at, Utc::now(), table)
    }
}

/// Whole days since account creation (0 if `created_at` is in the future)
pub fn days_active(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_days_active() {
        let start = created();
        assert_eq!(days_active(start, start), 0);
        assert_eq!(days_active(start, start + Duration::hours(23)), 0);
        assert_eq!(days_active(start, start + Duration::hours(49)), 2);
        assert_eq!(days_active(start, start - Duration::days(3)), 0);
    }

    #[test]
    fn test_build_summary() {
        let start = created();
        let summary = ProfileSummary::build(450, start, start + Duration::days(10), ProgressionTable::standard());

        assert_eq!(summary.current_level, 2);
        assert_eq!(summary.current_level_xp, 150);
        assert_eq!(summary.xp_to_next, 171);
        assert_eq!(summary.level_band, LevelBand::Initiate);
        assert_eq!(summary.days_active, 10);
    }

    #[test]
    fn test_summary_at_cap() {
        let start = created();
        let summary = ProfileSummary::build(5_000_000, start, start, ProgressionTable::standard());

        assert_eq!(summary.current_level, 100);
        assert_eq!(summary.xp_to_next, 0);
        assert_eq!(summary.level_progress_percent, 100.0);
        assert_eq!(summary.level_band, LevelBand::Legend);
    }

    #[test]
    fn test_summary_json_shape() {
        let start = created();
        let summary = ProfileSummary::build(0, start, start, ProgressionTable::standard());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["currentLevel"], 1);
        assert_eq!(json["xpToNext"], 300);
        assert_eq!(json["levelBand"], "Initiate");
        assert!(json.get("levelProgressPercent").is_some());
        assert_eq!(json["currentLevelXP"], 0);
        assert!(json.get("currentLevelXp").is_none());
        assert_eq!(json["levelColor"], "from-gray-500 to-gray-600");

        let parsed: ProfileSummary = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_build_now() {
        let summary = ProfileSummary::build_now(621, Utc::now() - Duration::days(3), ProgressionTable::standard());
        assert_eq!(summary.current_level, 3);
        assert_eq!(summary.days_active, 3);
    }
}
