use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_cli::model::Priority;

#[derive(Parser, Debug)]
#[command(name = "todo-cli")]
#[command(about = "A minimal command-line todo manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the data directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all todos
    #[command(alias = "ls")]
    List {
        /// Filter by completed status
        #[arg(short, long)]
        completed: Option<bool>,

        /// Filter by priority (low, medium, high)
        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// Add a new todo
    #[command(alias = "a")]
    Add {
        /// Title of the todo
        title: String,

        /// Set priority (low, medium, high)
        #[arg(short, long)]
        priority: Option<Priority>,

        /// Set due date (YYYY-MM-DD)
        #[arg(short, long)]
        due_date: Option<NaiveDate>,

        /// Longer description
        #[arg(long)]
        description: Option<String>,

        /// Attach a tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Show a todo by ID
    Show {
        /// ID of the todo
        id: String,
    },

    /// Mark a todo as complete
    Complete {
        /// ID of the todo
        id: String,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// ID of the todo
        id: String,
    },

    /// Start the WebSocket CLI bridge
    Serve {
        /// Host to bind (defaults to config, then localhost)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (defaults to config, then 4002)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Commands {
    /// Registry name of the subcommand; `serve` is handled by the entry
    /// point itself and has no table entry.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::List { .. } => "list",
            Commands::Add { .. } => "add",
            Commands::Show { .. } => "show",
            Commands::Complete { .. } => "complete",
            Commands::Delete { .. } => "delete",
            Commands::Serve { .. } => "serve",
        }
    }
}
