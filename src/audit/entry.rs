//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of records that show up in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Goal,
    Theme,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transaction => "Transaction",
            Self::Goal => "Goal",
            Self::Theme => "Theme",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the audit log.
///
/// `before` is present for updates and deletes, `after` for creates and
/// updates. Snapshots that fail to serialize are recorded as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    /// Display form of the id, e.g. `txn-1728000000123`
    pub entity_id: String,
    /// Goal name or transaction category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

fn snapshot<T: Serialize>(value: &T) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

impl AuditEntry {
    fn stamped(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: snapshot(entity),
            ..Self::stamped(Operation::Create, entity_type, entity_id.into(), entity_name)
        }
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            before: snapshot(before),
            after: snapshot(after),
            diff_summary,
            ..Self::stamped(Operation::Update, entity_type, entity_id.into(), entity_name)
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: snapshot(entity),
            ..Self::stamped(Operation::Delete, entity_type, entity_id.into(), entity_name)
        }
    }

    /// Same text as `Display`
    pub fn format_human_readable(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        )?;
        if let Some(name) = &self.entity_name {
            write!(f, " ({})", name)?;
        }
        if let Some(diff) = &self.diff_summary {
            write!(f, "\n  Changes: {}", diff)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry_has_only_after() {
        let entry = AuditEntry::create(
            EntityType::Transaction,
            "txn-1",
            Some("Продукты".to_string()),
            &json!({"category": "Продукты", "amount": 1250000}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry_keeps_diff() {
        let entry = AuditEntry::update(
            EntityType::Goal,
            "goal-1",
            Some("Отпуск".to_string()),
            &json!({"current_amount": 0}),
            &json!({"current_amount": 4800000}),
            Some("current_amount: 0 -> 4800000".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("current_amount: 0 -> 4800000")
        );
    }

    #[test]
    fn test_delete_entry_has_only_before() {
        let entry = AuditEntry::delete(EntityType::Transaction, "txn-1", None, &json!({"id": 1}));
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = AuditEntry::create(EntityType::Goal, "goal-7", None, &json!({"name": "Отпуск"}));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"goal\""));
        assert!(!json.contains("entity_name"));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entity_type, EntityType::Goal);
        assert_eq!(back.entity_id, "goal-7");
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Goal,
            "goal-7",
            Some("Отпуск".to_string()),
            &json!({}),
            &json!({}),
            Some("current_amount: 0 -> 100".to_string()),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Goal goal-7 (Отпуск)"));
        assert!(formatted.contains("\n  Changes: current_amount: 0 -> 100"));
    }
}
