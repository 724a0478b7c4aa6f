//! Unit catalog loading and command-line input parsing.
//!
//! Reads catalog RON files from disk and turns user-supplied troop lists
//! into [`TroopCounts`]. All parsing of catalog contents is delegated to
//! [`TroopConfig::from_ron_str`].

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use troop_core::catalog::TroopConfig;
use troop_core::error::TroopError;
use troop_core::troops::TroopCounts;
use troop_core::unit_type::UnitType;

/// Default location of the unit catalog.
pub const DEFAULT_CATALOG_PATH: &str = "assets/data/troop_config.ron";

/// Errors that can occur while loading tool inputs.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Catalog file could not be parsed or failed validation.
    #[error("Bad unit catalog '{path}': {source}")]
    CatalogError {
        /// Path to the file.
        path: String,
        /// Underlying catalog error.
        #[source]
        source: TroopError,
    },

    /// Troop list given on the command line is malformed.
    #[error("Invalid troop list '{input}': {reason}")]
    InvalidTroops {
        /// The text as given.
        input: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Load a unit catalog from a RON file.
///
/// The catalog is parsed but not validated; see
/// [`crate::validate::validate_catalog_file`] for the strict form.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog_from_file(path: &Path) -> ToolResult<TroopConfig> {
    let path_str = path.display().to_string();

    let mut file = std::fs::File::open(path).map_err(|e| ToolError::IoError {
        path: path_str.clone(),
        source: e,
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| ToolError::IoError {
            path: path_str.clone(),
            source: e,
        })?;

    let config = TroopConfig::from_ron_str(&contents).map_err(|e| ToolError::CatalogError {
        path: path_str.clone(),
        source: e,
    })?;

    tracing::info!(
        "Loaded unit catalog '{}' with {} unit types",
        path_str,
        config.iter().count()
    );

    Ok(config)
}

/// Parse a troop list from the command line.
///
/// Two forms are accepted:
/// - positional: `0,0,6500,0,0,3000,500,0,300,0,0,0,0`, exactly one count
///   per unit type in the fixed order
/// - named: `axe=6500,light=3000,ram=300`, unnamed types stay zero
///
/// # Errors
///
/// Returns [`ToolError::InvalidTroops`] for unparsable numbers, unknown unit
/// names, or a positional list of the wrong length.
pub fn parse_troops(input: &str) -> ToolResult<TroopCounts> {
    let invalid = |reason: String| ToolError::InvalidTroops {
        input: input.to_string(),
        reason,
    };

    let parts: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.iter().any(|part| part.contains('=')) {
        let mut troops = TroopCounts::new();
        for part in parts {
            let (name, count) = part
                .split_once('=')
                .ok_or_else(|| invalid(format!("'{part}' is not of the form type=count")))?;
            let unit: UnitType = name.trim().parse().map_err(|e: TroopError| invalid(e.to_string()))?;
            let count: i64 = count
                .trim()
                .parse()
                .map_err(|e| invalid(format!("bad count for {unit}: {e}")))?;
            troops[unit] = troops[unit]
                .checked_add(count)
                .ok_or_else(|| invalid(format!("{unit} count overflows")))?;
        }
        return Ok(troops);
    }

    let counts = parts
        .iter()
        .map(|part| part.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(e.to_string()))?;

    TroopCounts::try_from_array(&counts).map_err(|e| invalid(e.to_string()))
}
