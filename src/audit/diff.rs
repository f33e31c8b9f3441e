//! Field-level diffs between two serialized entity states

use serde_json::Value;

/// Longest string value shown in a diff before it is cut
const MAX_SHOWN_CHARS: usize = 40;

/// Describe the top-level field changes between `before` and `after`
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_SHOWN_CHARS => {
            let cut: String = s.chars().take(MAX_SHOWN_CHARS - 3).collect();
            format!("\"{}...\"", cut)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contribution_diff() {
        let before = json!({"name": "Отпуск", "current_amount": 0});
        let after = json!({"name": "Отпуск", "current_amount": 4800000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "current_amount: 0 -> 4800000");
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"name": "Отпуск", "deadline": "2026-07-01"});
        let after = json!({"name": "Отпуск", "note": "море"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("deadline: \"2026-07-01\" -> (removed)"));
        assert!(diff.contains("note: (added) -> \"море\""));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Отпуск"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!("light"), &json!("dark")).as_deref(),
            Some("\"light\" -> \"dark\"")
        );
    }

    #[test]
    fn test_long_cyrillic_string_is_cut_on_char_boundary() {
        let long = "я".repeat(100);
        let diff = generate_diff(&json!({"description": long}), &json!({"description": "x"})).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
