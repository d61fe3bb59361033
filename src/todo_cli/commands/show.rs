use crate::commands::TodoView;
use crate::error::{Result, TodoError};
use crate::store::DataStore;

/// A missing id is a normal outcome (`todo: None`), not an error.
pub fn run<S: DataStore + ?Sized>(store: &S, id: &str) -> Result<TodoView> {
    match store.get_todo(id) {
        Ok(todo) => Ok(TodoView { todo: Some(todo) }),
        Err(TodoError::NotFound(_)) => Ok(TodoView { todo: None }),
        Err(e) => Err(e),
    }
}
