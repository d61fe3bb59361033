use crate::commands::TodoList;
use crate::error::Result;
use crate::model::Priority;
use crate::store::DataStore;

/// Filters applied when listing todos. `None` means "don't filter".
#[derive(Debug, Default, Clone, Copy)]
pub struct TodoFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

pub fn run<S: DataStore + ?Sized>(store: &S, filter: &TodoFilter) -> Result<TodoList> {
    let mut todos = store.list_todos()?;

    if let Some(completed) = filter.completed {
        todos.retain(|t| t.completed == completed);
    }
    if let Some(priority) = filter.priority {
        todos.retain(|t| t.priority == priority);
    }

    // Stable display order: oldest first, id as tiebreaker
    todos.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let total = todos.len();
    Ok(TodoList { todos, total })
}
