//! Goal repository
//!
//! Same layout as the ledger: one record under the `goals` key holding the
//! goals in creation order plus the id high-water mark.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ids, FinancialGoal, GoalId};

use super::backend::KeyValueStore;
use super::record::{load_record, save_record, GOALS_KEY};

/// Persisted shape of the goal collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    #[serde(default)]
    pub last_id: u64,

    #[serde(default)]
    pub goals: Vec<FinancialGoal>,
}

#[derive(Debug)]
struct GoalState {
    record: GoalRecord,
    synced: bool,
}

/// Repository for goal persistence
pub struct GoalRepository {
    backend: Arc<dyn KeyValueStore>,
    state: RwLock<GoalState>,
}

impl GoalRepository {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            state: RwLock::new(GoalState {
                record: GoalRecord::default(),
                synced: true,
            }),
        }
    }

    /// Replace the in-memory goals with the stored ones
    pub fn load(&self) -> BudgetResult<()> {
        let mut record: GoalRecord = load_record(self.backend.as_ref(), GOALS_KEY)?;

        let max_id = record.goals.iter().map(|g| g.id.value()).max().unwrap_or(0);
        record.last_id = record.last_id.max(max_id);

        let mut state = self.state.write().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        state.record = record;
        state.synced = true;

        Ok(())
    }

    /// Write the goals to the backend, marking them out of sync on failure
    pub fn save(&self) -> BudgetResult<()> {
        let mut state = self.state.write().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        match save_record(self.backend.as_ref(), GOALS_KEY, &state.record) {
            Ok(()) => {
                state.synced = true;
                Ok(())
            }
            Err(e) => {
                state.synced = false;
                tracing::warn!(error = %e, "goals are out of sync with storage");
                Err(e)
            }
        }
    }

    pub fn is_synced(&self) -> BudgetResult<bool> {
        let state = self.state.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.synced)
    }

    /// Build and append a goal under a freshly issued id
    pub fn insert_with<F>(&self, build: F) -> BudgetResult<FinancialGoal>
    where
        F: FnOnce(GoalId) -> FinancialGoal,
    {
        let mut state = self.state.write().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = ids::next_id(state.record.last_id);
        let goal = build(GoalId::from_raw(id));
        state.record.last_id = id;
        state.record.goals.push(goal.clone());
        state.synced = false;

        Ok(goal)
    }

    /// Apply `change` to the goal with `id`
    ///
    /// Returns the goal before and after the change, or `None` when no goal
    /// has that id (nothing is modified then).
    pub fn update_with<F>(
        &self,
        id: GoalId,
        change: F,
    ) -> BudgetResult<Option<(FinancialGoal, FinancialGoal)>>
    where
        F: FnOnce(&mut FinancialGoal),
    {
        let mut state = self.state.write().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        let Some(goal) = state.record.goals.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };

        let before = goal.clone();
        change(goal);
        let after = goal.clone();
        state.synced = false;

        Ok(Some((before, after)))
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> BudgetResult<Option<FinancialGoal>> {
        let state = self.state.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.record.goals.iter().find(|g| g.id == id).cloned())
    }

    /// All goals in creation order
    pub fn get_all(&self) -> BudgetResult<Vec<FinancialGoal>> {
        let state = self.state.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.record.goals.clone())
    }

    pub fn count(&self) -> BudgetResult<usize> {
        let state = self.state.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.record.goals.len())
    }
}
