use crate::model::Todo;
use serde::Serialize;

pub mod add;
pub mod complete;
pub mod delete;
pub mod list;
pub mod show;

/// Result of a `list` command: todos in display order plus the total count.
#[derive(Debug, Default, Serialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub total: usize,
}

/// Result of a `show` command. An absent todo is a normal outcome, not an
/// error; renderers display it as "Todo not found."
#[derive(Debug, Serialize)]
pub struct TodoView {
    pub todo: Option<Todo>,
}

/// Result of a mutating command (add/complete/delete).
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<Todo>,
}

impl Ack {
    pub fn hit(todo: Todo) -> Self {
        Self {
            success: true,
            todo: Some(todo),
        }
    }

    pub fn miss() -> Self {
        Self {
            success: false,
            todo: None,
        }
    }
}

/// The union of all command results, as handed to a renderer. Serializes
/// untagged so the JSON fallback renderer prints the raw result shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CmdOutcome {
    List(TodoList),
    Single(TodoView),
    Ack(Ack),
}
