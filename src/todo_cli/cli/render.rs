//! CLI renderers: pure functions from a command outcome to terminal lines.
//!
//! Every renderer handles absence (`todo: None`, empty lists, missing
//! optional fields) with an explicit branch; none of them can fail on
//! missing data. The JSON renderer is the registry-wide fallback.

use super::output::OutputSink;
use crate::commands::{Ack, CmdOutcome, TodoList, TodoView};
use crate::error::Result;

/// Which renderer a command's outcome goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    TodoList,
    Todo,
    Success,
    Json,
}

/// Renders an outcome with the given renderer, falling back to JSON when the
/// outcome shape has no type-specific renderer.
pub fn render(renderer: Renderer, outcome: &CmdOutcome, sink: &mut dyn OutputSink) -> Result<()> {
    match (renderer, outcome) {
        (Renderer::TodoList, CmdOutcome::List(list)) => {
            render_todo_list(list, sink);
            Ok(())
        }
        (Renderer::Todo, CmdOutcome::Single(view)) => {
            render_todo(view, sink);
            Ok(())
        }
        (Renderer::Success, CmdOutcome::Ack(ack)) => {
            render_ack(ack, sink);
            Ok(())
        }
        _ => render_json(outcome, sink),
    }
}

pub fn render_todo_list(result: &TodoList, sink: &mut dyn OutputSink) {
    if result.total == 0 {
        sink.write_line("No todos found.");
        return;
    }

    sink.write_line(&format!("Found {} todo(s):", result.total));
    sink.write_line("");
    for todo in &result.todos {
        let status = if todo.completed { "[x]" } else { "[ ]" };
        let priority = format!("[{}]", todo.priority.upper());
        let due = match &todo.due_date {
            Some(date) => format!(" (due: {})", date),
            None => String::new(),
        };
        sink.write_line(&format!(
            "{} {} {}: {}{}",
            status, priority, todo.id, todo.title, due
        ));
    }
}

pub fn render_todo(result: &TodoView, sink: &mut dyn OutputSink) {
    let todo = match &result.todo {
        Some(todo) => todo,
        None => {
            sink.write_line("Todo not found.");
            return;
        }
    };

    sink.write_line(&format!("ID: {}", todo.id));
    sink.write_line(&format!("Title: {}", todo.title));
    let status = if todo.completed { "Completed" } else { "Pending" };
    sink.write_line(&format!("Status: {}", status));
    sink.write_line(&format!("Priority: {}", todo.priority));

    if let Some(description) = &todo.description {
        sink.write_line(&format!("Description: {}", description));
    }
    if let Some(due) = &todo.due_date {
        sink.write_line(&format!("Due: {}", due));
    }

    sink.write_line(&format!("Created: {}", todo.created_at.to_rfc3339()));
    sink.write_line(&format!("Updated: {}", todo.updated_at.to_rfc3339()));
    if !todo.tags.is_empty() {
        sink.write_line(&format!("Tags: {}", todo.tags.join(", ")));
    }
}

pub fn render_ack(result: &Ack, sink: &mut dyn OutputSink) {
    if let Some(todo) = &result.todo {
        sink.write_line(&format!("Success: {}", todo.title));
    } else if result.success {
        sink.write_line("Success");
    } else {
        sink.write_line("Failed");
    }
}

/// Fallback renderer: pretty-prints the raw outcome as 2-space-indented JSON.
pub fn render_json(outcome: &CmdOutcome, sink: &mut dyn OutputSink) -> Result<()> {
    let text = serde_json::to_string_pretty(outcome)?;
    for line in text.lines() {
        sink.write_line(line);
    }
    Ok(())
}
