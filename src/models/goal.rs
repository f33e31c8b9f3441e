//! Savings goal model
//!
//! A named target that grows through contributions. The saved amount never
//! exceeds the target and never decreases.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::draft::{parse_optional_date, parse_positive_amount, DraftError};
use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub id: GoalId,

    pub name: String,

    /// Amount to reach; always positive
    pub target_amount: Money,

    /// Amount saved so far, clamped to `0..=target_amount`
    pub current_amount: Money,

    /// Optional date the goal should be reached by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl FinancialGoal {
    /// Create a new goal with nothing saved yet
    pub fn new(
        id: GoalId,
        name: impl Into<String>,
        target_amount: Money,
        deadline: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
        }
    }

    /// Add `amount`, clamped at the target. Returns how much was actually added.
    ///
    /// The sum saturates, so an oversized amount still lands on the target.
    pub fn contribute(&mut self, amount: Money) -> Money {
        let before = self.current_amount;
        self.current_amount = (self.current_amount + amount).min(self.target_amount);
        self.current_amount - before
    }

    /// Amount still missing to reach the target
    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }

    /// Saved share of the target, 0-100
    pub fn progress_percent(&self) -> f64 {
        self.current_amount
            .ratio_to(self.target_amount)
            .map(|r| r * 100.0)
            .unwrap_or(0.0)
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

impl fmt::Display for FinancialGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Raw user input for a new goal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: String,
    /// `YYYY-MM-DD`, or empty for no deadline
    pub deadline: String,
}

impl GoalDraft {
    pub fn new(name: impl Into<String>, target_amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_amount: target_amount.into(),
            deadline: String::new(),
        }
    }

    pub fn deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = deadline.into();
        self
    }

    /// Check every field, returning the parsed target and deadline
    pub fn validate(&self) -> Result<(Money, Option<NaiveDate>), Vec<DraftError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(DraftError::Required("name"));
        }

        let target =
            parse_positive_amount("target_amount", &self.target_amount).map_err(|e| errors.push(e));
        let deadline = parse_optional_date("deadline", &self.deadline).map_err(|e| errors.push(e));

        match (target, deadline) {
            (Ok(target), Ok(deadline)) if errors.is_empty() => Ok((target, deadline)),
            _ => Err(errors),
        }
    }
}
