//! # Storage Layer
//!
//! This module defines the storage abstraction for todo-cli. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All todos live in a single `todos.json` map keyed by id
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence, fast, isolated test execution
//!
//! Business logic never talks to the filesystem directly; it goes through
//! this trait, which also lets the WebSocket bridge share a store behind a
//! mutex without caring about the backend.

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

/// Abstract interface for todo storage.
///
/// Object-safe so the command registry can dispatch over `&mut dyn DataStore`.
pub trait DataStore {
    /// Save a todo (create or update)
    fn save_todo(&mut self, todo: &Todo) -> Result<()>;

    /// Get a todo by id. Returns `TodoError::NotFound` when absent.
    fn get_todo(&self, id: &str) -> Result<Todo>;

    /// List all todos, in no particular order
    fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Delete a todo permanently. Returns `TodoError::NotFound` when absent.
    fn delete_todo(&mut self, id: &str) -> Result<()>;
}
