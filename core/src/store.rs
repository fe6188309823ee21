//! In-memory, insertion-ordered todo collection.
//!
//! # Design
//! A plain `Vec` with linear scans. Identifiers are not an index key:
//! `find` returns the first item with a matching id and `remove_by_id`
//! drops every match. The store itself carries no locking; the server
//! decides how to share it between requests.

use crate::model::Todo;

/// Process-lifetime collection of todos, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoStore {
    items: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All todos, in the order they were appended.
    pub fn list(&self) -> &[Todo] {
        &self.items
    }

    /// First todo with the given id, if any.
    pub fn find(&self, id: i64) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn append(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    /// Removes every todo with the given id; returns how many were removed.
    pub fn remove_by_id(&mut self, id: i64) -> usize {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        before - self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
