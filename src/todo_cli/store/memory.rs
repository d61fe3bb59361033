use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    todos: HashMap<String, Todo>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_todo(&mut self, todo: &Todo) -> Result<()> {
        self.todos.insert(todo.id.clone(), todo.clone());
        Ok(())
    }

    fn get_todo(&self, id: &str) -> Result<Todo> {
        self.todos
            .get(id)
            .cloned()
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    fn list_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.values().cloned().collect())
    }

    fn delete_todo(&mut self, id: &str) -> Result<()> {
        if self.todos.remove(id).is_none() {
            return Err(TodoError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Priority;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                let todo = Todo::new(format!("Test Todo {}", i + 1));
                self.store.save_todo(&todo).unwrap();
            }
            self
        }

        pub fn with_todo(mut self, title: &str) -> Self {
            let todo = Todo::new(title.to_string());
            self.store.save_todo(&todo).unwrap();
            self
        }

        pub fn with_completed_todo(mut self, title: &str) -> Self {
            let mut todo = Todo::new(title.to_string());
            todo.complete();
            self.store.save_todo(&todo).unwrap();
            self
        }

        pub fn with_priority_todo(mut self, title: &str, priority: Priority) -> Self {
            let mut todo = Todo::new(title.to_string());
            todo.priority = priority;
            self.store.save_todo(&todo).unwrap();
            self
        }
    }
}
