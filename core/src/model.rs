//! Domain model for the todos API.
//!
//! # Design
//! JSON field names are camelCase (`dueDate`, `isCompleted`) to match the
//! wire format the handlers expose. `Todo` doubles as the creation payload,
//! so `isCompleted` defaults to `false` when absent from a request body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// `id` is caller-supplied; the store does not enforce uniqueness, so
/// duplicate identifiers are accepted silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub is_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn todo_serializes_with_camel_case_fields() {
        let todo = Todo {
            id: 1,
            name: "Test".to_string(),
            due_date: due("2030-01-01T00:00:00Z"),
            is_completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Test");
        assert_eq!(json["dueDate"], "2030-01-01T00:00:00Z");
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 42,
            name: "Roundtrip".to_string(),
            due_date: due("2030-06-15T12:30:00Z"),
            is_completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn todo_defaults_is_completed_to_false() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":1,"name":"No flag","dueDate":"2030-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(!todo.is_completed);
    }

    #[test]
    fn todo_rejects_missing_name() {
        let result: Result<Todo, _> =
            serde_json::from_str(r#"{"id":1,"dueDate":"2030-01-01T00:00:00Z"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_rejects_missing_due_date() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"id":1,"name":"No date"}"#);
        assert!(result.is_err());
    }
}
