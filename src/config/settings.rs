//! User settings
//!
//! Display preferences and the knobs the dashboard uses. Every field has a
//! serde default so older config files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Period length used for the daily average expense
    #[serde(default = "default_period_days")]
    pub daily_average_period_days: u32,

    /// How many categories the dashboard ranks
    #[serde(default = "default_top_categories")]
    pub top_categories_count: usize,

    /// Reject categories outside the income/expense taxonomy instead of warning
    #[serde(default)]
    pub enforce_category_taxonomy: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₽".to_string()
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

fn default_period_days() -> u32 {
    30
}

fn default_top_categories() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            daily_average_period_days: default_period_days(),
            top_categories_count: default_top_categories(),
            enforce_category_taxonomy: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₽");
        assert_eq!(settings.daily_average_period_days, 30);
        assert_eq!(settings.top_categories_count, 5);
        assert!(!settings.enforce_category_taxonomy);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            top_categories_count: 3,
            enforce_category_taxonomy: true,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"currency_symbol": "$"}"#).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.daily_average_period_days, 30);
        assert_eq!(loaded.date_format, "%d.%m.%Y");
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(!paths.is_initialized());
    }
}
