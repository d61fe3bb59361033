//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single entry
//! point for todo operations regardless of the front end (local CLI or the
//! WebSocket bridge).
//!
//! It dispatches to the appropriate command function and returns structured
//! types. No business logic, no I/O, no presentation concerns live here.
//!
//! `TodoApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

pub struct TodoApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_todos(&self, filter: &TodoFilter) -> Result<commands::TodoList> {
        commands::list::run(&self.store, filter)
    }

    pub fn get_todo(&self, id: &str) -> Result<commands::TodoView> {
        commands::show::run(&self.store, id)
    }

    pub fn create_todo(&mut self, title: String, opts: CreateOptions) -> Result<commands::Ack> {
        commands::add::run(&mut self.store, title, opts)
    }

    pub fn complete_todo(&mut self, id: &str) -> Result<commands::Ack> {
        commands::complete::run(&mut self.store, id)
    }

    pub fn delete_todo(&mut self, id: &str) -> Result<commands::Ack> {
        commands::delete::run(&mut self.store, id)
    }
}

pub use commands::add::CreateOptions;
pub use commands::list::TodoFilter;
pub use commands::{Ack, CmdOutcome, TodoList, TodoView};
