//! Error types
//!
//! Only table construction and loading can fail. XP and level queries
//! saturate instead.

use thiserror::Error;

/// Errors raised while building or loading a progression table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read progression table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse progression table: {0}")]
    Parse(String),

    #[error("progression table has no levels")]
    Empty,

    #[error("level 1 must require 0 XP, found {0}")]
    NonZeroStart(i64),

    #[error("level {level} has negative XP requirement {xp}")]
    Negative { level: u32, xp: i64 },

    #[error("level {level} requires {current} XP, less than the previous level's {previous}")]
    Decreasing { level: u32, previous: i64, current: i64 },

    #[error("cumulative XP overflows at level {level}")]
    Overflow { level: u32 },
}

impl From<ron::error::SpannedError> for TableError {
    fn from(e: ron::error::SpannedError) -> Self {
        TableError::Parse(e.to_string())
    }
}

impl From<ron::Error> for TableError {
    fn from(e: ron::Error) -> Self {
        TableError::Parse(e.to_string())
    }
}
