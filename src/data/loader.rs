//! RON table loader
//!
//! Loads a progression table from an external RON file, with fallback to
//! the built-in table.

use std::fs;
use std::path::Path;

use crate::error::TableError;
use crate::progression::{ProgressionTable, TableSource};

/// Where the shipped progression table lives
pub const DEFAULT_TABLE_PATH: &str = "assets/data/progression.ron";

/// Parse and validate a table from RON text
pub fn parse_table(content: &str) -> Result<ProgressionTable, TableError> {
    let source: TableSource = ron::from_str(content)?;
    ProgressionTable::from_source(source)
}

/// Load a table from disk, reporting every failure
pub fn try_load_table(path: impl AsRef<Path>) -> Result<ProgressionTable, TableError> {
    let content = fs::read_to_string(path.as_ref())?;
    let table = parse_table(&content)?;
    log::debug!("Loaded {}-level progression table from {:?}", table.max_level(), path.as_ref());
    Ok(table)
}

/// Load a table from disk, falling back to the standard table
pub fn load_table(path: impl AsRef<Path>) -> ProgressionTable {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("No progression table at {:?}, using standard table", path);
        return ProgressionTable::standard().clone();
    }

    match try_load_table(path) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Failed to load {:?}: {}. Using standard table.", path, e);
            ProgressionTable::standard().clone()
        }
    }
}

/// Load the table from the default assets path
pub fn load_default_table() -> ProgressionTable {
    load_table(DEFAULT_TABLE_PATH)
}

/// Write a table as pretty RON
pub fn export_table(table: &ProgressionTable, path: impl AsRef<Path>) -> Result<(), TableError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = ron::ser::PrettyConfig::new().depth_limit(2);
    let content = ron::ser::to_string_pretty(&table.to_source(), config)?;
    fs::write(path, content)?;

    log::info!("Exported progression table to {:?}", path);
    Ok(())
}
