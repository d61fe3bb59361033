use crate::commands::Ack;
use crate::error::{Result, TodoError};
use crate::model::{Priority, Todo};
use crate::store::DataStore;
use chrono::NaiveDate;

/// Optional fields accepted when creating a todo.
#[derive(Debug, Default, Clone)]
pub struct CreateOptions {
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

pub fn run<S: DataStore + ?Sized>(
    store: &mut S,
    title: String,
    opts: CreateOptions,
) -> Result<Ack> {
    if title.trim().is_empty() {
        return Err(TodoError::Invalid("Title cannot be empty".into()));
    }

    let mut todo = Todo::new(title);
    if let Some(priority) = opts.priority {
        todo.priority = priority;
    }
    todo.due_date = opts.due_date;
    todo.description = opts.description;
    todo.tags = opts.tags;

    store.save_todo(&todo)?;
    Ok(Ack::hit(todo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_with_defaults() {
        let mut store = InMemoryStore::new();
        let ack = run(&mut store, "Buy milk".into(), CreateOptions::default()).unwrap();

        assert!(ack.success);
        let todo = ack.todo.unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.priority, Priority::Medium);
        assert!(!todo.completed);

        // Persisted under its id
        assert_eq!(store.get_todo(&todo.id).unwrap().title, "Buy milk");
    }

    #[test]
    fn applies_options() {
        let mut store = InMemoryStore::new();
        let opts = CreateOptions {
            priority: Some(Priority::High),
            due_date: "2024-01-01".parse().ok(),
            description: Some("semi-skimmed".into()),
            tags: vec!["errand".into(), "groceries".into()],
        };
        let ack = run(&mut store, "Buy milk".into(), opts).unwrap();

        let todo = ack.todo.unwrap();
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.due_date.unwrap().to_string(), "2024-01-01");
        assert_eq!(todo.description.as_deref(), Some("semi-skimmed"));
        assert_eq!(todo.tags, ["errand", "groceries"]);
    }

    #[test]
    fn rejects_empty_title() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "   ".into(), CreateOptions::default()).unwrap_err();
        assert!(matches!(err, TodoError::Invalid(_)));
        assert!(store.list_todos().unwrap().is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut store = InMemoryStore::new();
        let a = run(&mut store, "A".into(), CreateOptions::default()).unwrap();
        let b = run(&mut store, "B".into(), CreateOptions::default()).unwrap();
        assert_ne!(a.todo.unwrap().id, b.todo.unwrap().id);
    }
}
