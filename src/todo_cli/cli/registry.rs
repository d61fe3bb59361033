//! # Command Registry
//!
//! A statically-typed command table: one [`CommandSpec`] per subcommand,
//! holding its handler, option schema, renderer, and description. This is
//! the single source of truth shared by the local CLI (renderer selection)
//! and the WebSocket bridge (full dispatch of wire requests).
//!
//! No dispatch framework, no DI container: lookup is a linear scan over a
//! static slice, handlers are plain function pointers over `dyn DataStore`.

use super::output::OutputSink;
use super::render::{self, Renderer};
use crate::commands::{self, CmdOutcome};
use crate::commands::add::CreateOptions;
use crate::commands::list::TodoFilter;
use crate::error::{Result, TodoError};
use crate::model::Priority;
use crate::store::DataStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parsed invocation values, the union of everything any command accepts.
/// Also the `args` payload of a WebSocket bridge request.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandArgs {
    pub id: Option<String>,
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Schema entry for one named option, mirrored into help output and the
/// bridge's command listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionSpec {
    pub name: &'static str,
    pub short: Option<char>,
    pub description: &'static str,
    pub default: Option<&'static str>,
}

/// One subcommand: invocation shape plus behavior.
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Required positional parameters, e.g. `["<id>"]`
    pub params: &'static [&'static str],
    pub options: &'static [OptionSpec],
    pub renderer: Renderer,
    pub run: fn(&mut dyn DataStore, &CommandArgs) -> Result<CmdOutcome>,
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "list",
        description: "List all todos",
        params: &[],
        options: &[
            OptionSpec {
                name: "completed",
                short: Some('c'),
                description: "Filter by completed status",
                default: None,
            },
            OptionSpec {
                name: "priority",
                short: Some('p'),
                description: "Filter by priority (low, medium, high)",
                default: None,
            },
        ],
        renderer: Renderer::TodoList,
        run: run_list,
    },
    CommandSpec {
        name: "add",
        description: "Add a new todo",
        params: &["<title>"],
        options: &[
            OptionSpec {
                name: "priority",
                short: Some('p'),
                description: "Set priority (low, medium, high)",
                default: Some("medium"),
            },
            OptionSpec {
                name: "due-date",
                short: Some('d'),
                description: "Set due date (YYYY-MM-DD)",
                default: None,
            },
            OptionSpec {
                name: "description",
                short: None,
                description: "Longer description",
                default: None,
            },
            OptionSpec {
                name: "tag",
                short: None,
                description: "Attach a tag (repeatable)",
                default: None,
            },
        ],
        renderer: Renderer::Success,
        run: run_add,
    },
    CommandSpec {
        name: "show",
        description: "Show a todo by ID",
        params: &["<id>"],
        options: &[],
        renderer: Renderer::Todo,
        run: run_show,
    },
    CommandSpec {
        name: "complete",
        description: "Mark a todo as complete",
        params: &["<id>"],
        options: &[],
        renderer: Renderer::Success,
        run: run_complete,
    },
    CommandSpec {
        name: "delete",
        description: "Delete a todo",
        params: &["<id>"],
        options: &[],
        renderer: Renderer::Success,
        run: run_delete,
    },
];

/// Look up a command table entry by subcommand name.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Run a command and render its outcome into the sink.
pub fn dispatch(
    spec: &CommandSpec,
    store: &mut dyn DataStore,
    args: &CommandArgs,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    let outcome = (spec.run)(store, args)?;
    render::render(spec.renderer, &outcome, sink)
}

fn require_id(args: &CommandArgs) -> Result<&str> {
    args.id
        .as_deref()
        .ok_or_else(|| TodoError::Invalid("missing required parameter <id>".into()))
}

fn run_list(store: &mut dyn DataStore, args: &CommandArgs) -> Result<CmdOutcome> {
    let filter = TodoFilter {
        completed: args.completed,
        priority: args.priority,
    };
    commands::list::run(store, &filter).map(CmdOutcome::List)
}

fn run_add(store: &mut dyn DataStore, args: &CommandArgs) -> Result<CmdOutcome> {
    let title = args
        .title
        .clone()
        .ok_or_else(|| TodoError::Invalid("missing required parameter <title>".into()))?;
    let opts = CreateOptions {
        priority: args.priority,
        due_date: args.due_date,
        description: args.description.clone(),
        tags: args.tags.clone(),
    };
    commands::add::run(store, title, opts).map(CmdOutcome::Ack)
}

fn run_show(store: &mut dyn DataStore, args: &CommandArgs) -> Result<CmdOutcome> {
    commands::show::run(store, require_id(args)?).map(CmdOutcome::Single)
}

fn run_complete(store: &mut dyn DataStore, args: &CommandArgs) -> Result<CmdOutcome> {
    commands::complete::run(store, require_id(args)?).map(CmdOutcome::Ack)
}

fn run_delete(store: &mut dyn DataStore, args: &CommandArgs) -> Result<CmdOutcome> {
    commands::delete::run(store, require_id(args)?).map(CmdOutcome::Ack)
}
