use crate::commands::Ack;
use crate::error::{Result, TodoError};
use crate::store::DataStore;

/// Marks a todo as completed. A missing id yields a failed [`Ack`], not an
/// error; completing an already-completed todo is a no-op beyond refreshing
/// `updated_at`.
pub fn run<S: DataStore + ?Sized>(store: &mut S, id: &str) -> Result<Ack> {
    let mut todo = match store.get_todo(id) {
        Ok(todo) => todo,
        Err(TodoError::NotFound(_)) => return Ok(Ack::miss()),
        Err(e) => return Err(e),
    };

    todo.complete();
    store.save_todo(&todo)?;
    Ok(Ack::hit(todo))
}
