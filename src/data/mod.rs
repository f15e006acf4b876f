//! Data loading
//!
//! Progression tables can be swapped out through RON files for balance
//! tweaks without rebuilding.

pub mod loader;

pub use loader::{
    DEFAULT_TABLE_PATH, parse_table, try_load_table, load_table,
    load_default_table, export_table,
};
