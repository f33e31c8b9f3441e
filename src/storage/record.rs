//! Typed records on top of a key-value backend
//!
//! Records are pretty-printed JSON so the stored blobs stay human-diffable.
//! A missing key loads as the type's default.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{BudgetError, BudgetResult};

use super::backend::KeyValueStore;

/// Key of the transaction collection
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key of the goal collection
pub const GOALS_KEY: &str = "goals";
/// Key of the theme preference
pub const THEME_KEY: &str = "theme";

/// Load and decode the record under `key`
pub fn load_record<T>(backend: &dyn KeyValueStore, key: &str) -> BudgetResult<T>
where
    T: DeserializeOwned + Default,
{
    match backend.get(key)? {
        Some(text) if !text.trim().is_empty() => serde_json::from_str(&text)
            .map_err(|e| BudgetError::Persistence(format!("Failed to parse '{}': {}", key, e))),
        _ => Ok(T::default()),
    }
}

/// Encode and store `value` under `key`
pub fn save_record<T>(backend: &dyn KeyValueStore, key: &str, value: &T) -> BudgetResult<()>
where
    T: Serialize + ?Sized,
{
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| BudgetError::Persistence(format!("Failed to serialize '{}': {}", key, e)))?;
    backend.put(key, &text)
}
