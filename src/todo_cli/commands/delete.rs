use crate::commands::Ack;
use crate::error::{Result, TodoError};
use crate::store::DataStore;

/// Deletes a todo permanently. A missing id yields a failed [`Ack`].
pub fn run<S: DataStore + ?Sized>(store: &mut S, id: &str) -> Result<Ack> {
    match store.delete_todo(id) {
        Ok(()) => Ok(Ack {
            success: true,
            todo: None,
        }),
        Err(TodoError::NotFound(_)) => Ok(Ack::miss()),
        Err(e) => Err(e),
    }
}
