//! Transaction model
//!
//! A single income or expense entry. Transactions are immutable once
//! recorded; the only lifecycle event after creation is deletion.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::draft::{parse_date, parse_positive_amount, DraftError, DRAFT_DATE_FORMAT};
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}'. Use 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique, creation-ordered identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Category name
    pub category: String,

    /// Always positive; direction comes from `kind`
    pub amount: Money,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Free-text note, empty when absent
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            category: category.into(),
            amount,
            date,
            description: String::new(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Amount with the sign of its direction (negative for expenses)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format(DRAFT_DATE_FORMAT),
            self.category,
            self.signed_amount()
        )
    }
}

/// Raw user input for a new transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl TransactionDraft {
    /// An empty draft dated today
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            category: String::new(),
            amount: String::new(),
            date: Local::now().date_naive().format(DRAFT_DATE_FORMAT).to_string(),
            description: String::new(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check every field, returning the parsed amount and date
    pub fn validate(&self) -> Result<(Money, NaiveDate), Vec<DraftError>> {
        let mut errors = Vec::new();

        if self.category.trim().is_empty() {
            errors.push(DraftError::Required("category"));
        }

        let amount = parse_positive_amount("amount", &self.amount).map_err(|e| errors.push(e));
        let date = parse_date("date", &self.date).map_err(|e| errors.push(e));

        match (amount, date) {
            (Ok(amount), Ok(date)) if errors.is_empty() => Ok((amount, date)),
            _ => Err(errors),
        }
    }
}
