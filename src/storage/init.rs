//! Storage initialization
//!
//! Handles first-run setup: directories and a default settings file.

use crate::config::paths::BudgetPaths;
use crate::config::settings::Settings;
use crate::error::BudgetError;

/// Initialize storage for a fresh installation
///
/// Existing settings are left untouched. Returns the settings in effect.
pub fn initialize_storage(paths: &BudgetPaths) -> Result<Settings, BudgetError> {
    paths.ensure_directories()?;

    let settings = Settings::load_or_create(paths)?;
    if !paths.is_initialized() {
        settings.save(paths)?;
        tracing::debug!(base_dir = %paths.base_dir().display(), "wrote default settings");
    }

    Ok(settings)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BudgetPaths) -> bool {
    !paths.is_initialized()
}
