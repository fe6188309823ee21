//! Creation validation for todos.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::model::Todo;

/// Checks a todo about to be created.
///
/// `now` is passed in rather than read from the clock so the check is
/// deterministic. Both conditions are evaluated; a payload failing both
/// reports both in one error.
pub fn validate_new_todo(todo: &Todo, now: DateTime<Utc>) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();
    if todo.due_date < now {
        errors.add("dueDate", "Cannot have due date in the past");
    }
    if todo.is_completed {
        errors.add("isCompleted", "Cannot add completed todo");
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn todo(due: &str, is_completed: bool) -> Todo {
        Todo {
            id: 1,
            name: "Test".to_string(),
            due_date: at(due),
            is_completed,
        }
    }

    #[test]
    fn future_due_date_passes() {
        let result = validate_new_todo(&todo("2030-01-01T00:00:00Z", false), at("2020-01-01T00:00:00Z"));
        assert!(result.is_ok());
    }

    #[test]
    fn due_date_equal_to_now_passes() {
        let result = validate_new_todo(&todo("2020-01-01T00:00:00Z", false), at("2020-01-01T00:00:00Z"));
        assert!(result.is_ok());
    }

    #[test]
    fn past_due_date_is_rejected() {
        let errors = validate_new_todo(&todo("2010-01-01T00:00:00Z", false), at("2020-01-01T00:00:00Z"))
            .unwrap_err();
        assert_eq!(errors.errors["dueDate"], ["Cannot have due date in the past"]);
        assert!(!errors.errors.contains_key("isCompleted"));
    }

    #[test]
    fn completed_on_creation_is_rejected() {
        let errors = validate_new_todo(&todo("2030-01-01T00:00:00Z", true), at("2020-01-01T00:00:00Z"))
            .unwrap_err();
        assert_eq!(errors.errors["isCompleted"], ["Cannot add completed todo"]);
        assert!(!errors.errors.contains_key("dueDate"));
    }

    #[test]
    fn both_failures_are_reported_together() {
        let errors = validate_new_todo(&todo("2010-01-01T00:00:00Z", true), at("2020-01-01T00:00:00Z"))
            .unwrap_err();
        assert!(errors.errors.contains_key("dueDate"));
        assert!(errors.errors.contains_key("isCompleted"));
    }
}
