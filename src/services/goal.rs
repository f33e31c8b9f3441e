//! Goal service
//!
//! Creating savings goals and contributing to them. Contributions only ever
//! increase the saved amount and stop at the target.

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{FinancialGoal, GoalDraft, GoalId, Money};
use crate::storage::Storage;

/// Service for savings goals
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a draft and create the goal with nothing saved
    pub fn add_goal(&self, draft: &GoalDraft) -> BudgetResult<FinancialGoal> {
        let (target, deadline) = draft.validate()?;

        let goal = self
            .storage
            .goals
            .insert_with(|id| FinancialGoal::new(id, draft.name.trim(), target, deadline))?;

        tracing::debug!(id = %goal.id, name = %goal.name, target = %goal.target_amount, "goal added");
        let saved = self.storage.goals.save();
        self.storage
            .log_create(EntityType::Goal, goal.id.to_string(), Some(goal.name.clone()), &goal);

        saved.map(|()| goal)
    }

    /// Add `amount` to a goal, clamped at its target
    ///
    /// Returns the updated goal. An unknown id is a not-found error and
    /// nothing is written.
    pub fn contribute(&self, id: GoalId, amount: Money) -> BudgetResult<FinancialGoal> {
        if !amount.is_positive() {
            return Err(BudgetError::invalid_field(
                "amount",
                "amount must be greater than zero",
            ));
        }

        let (before, after) = self
            .storage
            .goals
            .update_with(id, |goal| {
                goal.contribute(amount);
            })?
            .ok_or_else(|| BudgetError::goal_not_found(id.to_string()))?;

        tracing::debug!(
            id = %id,
            requested = %amount,
            added = %(after.current_amount - before.current_amount),
            complete = after.is_complete(),
            "goal contribution"
        );
        let saved = self.storage.goals.save();
        self.storage.log_update(
            EntityType::Goal,
            id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
        );

        saved.map(|()| after)
    }

    /// All goals in creation order
    pub fn list_goals(&self) -> BudgetResult<Vec<FinancialGoal>> {
        self.storage.goals.get_all()
    }

    pub fn get_goal(&self, id: GoalId) -> BudgetResult<Option<FinancialGoal>> {
        self.storage.goals.get(id)
    }

    pub fn is_synced(&self) -> BudgetResult<bool> {
        self.storage.goals.is_synced()
    }

    /// Retry writing the goals after an earlier failure
    pub fn sync(&self) -> BudgetResult<()> {
        self.storage.goals.save()
    }
}
