//! Catalog validation utilities.

use std::path::Path;

use troop_core::catalog::TroopConfig;

use crate::loader::{load_catalog_from_file, ToolError, ToolResult};

/// Load a catalog file and check it is complete and sane.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, or
/// [`ToolError::CatalogError`] listing every validation problem.
pub fn validate_catalog_file(path: &Path) -> ToolResult<TroopConfig> {
    let config = load_catalog_from_file(path)?;

    config
        .ensure_valid()
        .map_err(|e| ToolError::CatalogError {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(config)
}
