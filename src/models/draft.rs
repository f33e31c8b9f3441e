//! Field-level validation shared by transaction and goal drafts
//!
//! Drafts carry raw user input. Validation collects every failing field
//! instead of stopping at the first one, so a form can highlight all of them.

use chrono::NaiveDate;
use std::fmt;

use super::money::Money;

/// Date format accepted in drafts
pub const DRAFT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single invalid field in a draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Required field is empty
    Required(&'static str),
    /// Amount field is not a number
    InvalidAmount { field: &'static str, input: String },
    /// Amount field parsed but is zero or negative
    NonPositiveAmount(&'static str),
    /// Amount field is above [`Money::MAX_INPUT`]
    AmountTooLarge(&'static str),
    /// Date field is not `YYYY-MM-DD`
    InvalidDate { field: &'static str, input: String },
    /// Category is outside the allowed set for the transaction type
    UnknownCategory { field: &'static str, input: String },
}

impl DraftError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required(field)
            | Self::NonPositiveAmount(field)
            | Self::AmountTooLarge(field) => field,
            Self::InvalidAmount { field, .. }
            | Self::InvalidDate { field, .. }
            | Self::UnknownCategory { field, .. } => field,
        }
    }
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field),
            Self::InvalidAmount { field, input } => {
                write!(f, "{} must be a number, got '{}'", field, input)
            }
            Self::NonPositiveAmount(field) => write!(f, "{} must be greater than zero", field),
            Self::AmountTooLarge(field) => write!(
                f,
                "{} must not exceed {}",
                field,
                Money::MAX_INPUT.format_with_symbol("")
            ),
            Self::InvalidDate { field, input } => {
                write!(f, "{} must be a date (YYYY-MM-DD), got '{}'", field, input)
            }
            Self::UnknownCategory { field, input } => {
                write!(f, "{} '{}' is not allowed for this type", field, input)
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Parse a required, strictly positive amount no larger than
/// [`Money::MAX_INPUT`]
pub fn parse_positive_amount(field: &'static str, input: &str) -> Result<Money, DraftError> {
    if input.trim().is_empty() {
        return Err(DraftError::Required(field));
    }

    let amount = Money::parse(input).map_err(|_| DraftError::InvalidAmount {
        field,
        input: input.trim().to_string(),
    })?;

    if !amount.is_positive() {
        return Err(DraftError::NonPositiveAmount(field));
    }
    if amount > Money::MAX_INPUT {
        return Err(DraftError::AmountTooLarge(field));
    }

    Ok(amount)
}

/// Parse a required date
pub fn parse_date(field: &'static str, input: &str) -> Result<NaiveDate, DraftError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DraftError::Required(field));
    }

    NaiveDate::parse_from_str(input, DRAFT_DATE_FORMAT).map_err(|_| DraftError::InvalidDate {
        field,
        input: input.to_string(),
    })
}

/// Parse an optional date; empty input means "no date"
pub fn parse_optional_date(
    field: &'static str,
    input: &str,
) -> Result<Option<NaiveDate>, DraftError> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(field, input).map(Some)
    }
}
