//! User progression records
//!
//! Stats updates after quest completion and the profile page summary.

pub mod stats;
pub mod summary;

pub use stats::{UserStats, StatsUpdate, StatsChange};
pub use summary::{ProfileSummary, days_active};
