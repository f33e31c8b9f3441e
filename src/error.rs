//! Custom error types for the budget core
//!
//! Every fallible operation returns a [`BudgetResult`]. Nothing here is fatal:
//! the caller decides whether to re-prompt, retry persistence, or report.

use thiserror::Error;

use crate::models::DraftError;

/// The main error type for budget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the persisted collections
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A draft or argument failed validation; `fields` names every offender
    #[error("Validation error: {message}")]
    Validation {
        fields: Vec<&'static str>,
        message: String,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The key-value store could not be read or rejected a write.
    ///
    /// After a failed write the in-memory collection keeps the mutation and
    /// stays out of sync until a later write succeeds.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create a validation error for a single field
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            fields: vec![field],
            message: message.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Fields named by a validation error (empty for every other kind)
    pub fn invalid_fields(&self) -> &[&'static str] {
        match self {
            Self::Validation { fields, .. } => fields,
            _ => &[],
        }
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<Vec<DraftError>> for BudgetError {
    fn from(errors: Vec<DraftError>) -> Self {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation {
            fields: errors.iter().map(DraftError::field).collect(),
            message,
        }
    }
}

/// Result type alias for budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
