//! Domain layer for the todos HTTP service.
//!
//! # Overview
//! Holds the `Todo` model, the in-memory `TodoStore`, and the creation
//! validation check. No I/O and no HTTP types live here; the server crate
//! owns the transport.
//!
//! # Design
//! - The store is a plain owned value with explicit `list` / `find` /
//!   `append` / `remove_by_id` operations; callers decide how to share it.
//! - Validation takes `now` as a parameter instead of reading the clock,
//!   so every check is deterministic and directly testable.
//! - Identifiers are caller-supplied and not required to be unique: lookups
//!   return the first match, removals drop every match.

pub mod error;
pub mod model;
pub mod store;
pub mod validate;

pub use error::ValidationError;
pub use model::Todo;
pub use store::TodoStore;
pub use validate::validate_new_todo;
