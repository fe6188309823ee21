//! Error types for the todos domain layer.
//!
//! # Design
//! Validation is the only failure the domain produces; not-found is an
//! ordinary `Option` on store lookups. `ValidationError` keeps a field-keyed
//! map so a single response can report every failed check at once, and it
//! serializes directly to the 400 body shape
//! `{"errors": {"dueDate": ["..."], ...}}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Field-keyed validation failure for a creation payload.
///
/// Keys are the JSON field names of the rejected payload (`dueDate`,
/// `isCompleted`), each mapped to one or more messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field key.
    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (field, messages) in &self.errors {
            write!(f, "; {field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
