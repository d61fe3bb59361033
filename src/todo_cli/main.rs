use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use todo_cli::api::{CmdOutcome, CreateOptions, TodoApi, TodoFilter};
use todo_cli::cli::output::StdoutSink;
use todo_cli::cli::registry;
use todo_cli::cli::render;
use todo_cli::config::TodoConfig;
use todo_cli::error::{Result, TodoError};
use todo_cli::server::{CliBridge, CLI_PATH};
use todo_cli::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let data_dir = resolve_data_dir(&cli)?;

    match &cli.command {
        Commands::Serve { host, port } => serve(&data_dir, host.clone(), *port),
        command => {
            let mut api = TodoApi::new(FileStore::new(data_dir));
            let outcome = execute(&mut api, command)?;

            // Renderer selection comes from the command table, same as the
            // WebSocket bridge path
            let spec = registry::find(command.name()).ok_or_else(|| {
                TodoError::Invalid(format!("unknown command: {}", command.name()))
            })?;
            render::render(spec.renderer, &outcome, &mut StdoutSink)
        }
    }
}

fn execute(api: &mut TodoApi<FileStore>, command: &Commands) -> Result<CmdOutcome> {
    match command {
        Commands::List {
            completed,
            priority,
        } => {
            let filter = TodoFilter {
                completed: *completed,
                priority: *priority,
            };
            api.list_todos(&filter).map(CmdOutcome::List)
        }
        Commands::Add {
            title,
            priority,
            due_date,
            description,
            tags,
        } => {
            let opts = CreateOptions {
                priority: *priority,
                due_date: *due_date,
                description: description.clone(),
                tags: tags.clone(),
            };
            api.create_todo(title.clone(), opts).map(CmdOutcome::Ack)
        }
        Commands::Show { id } => api.get_todo(id).map(CmdOutcome::Single),
        Commands::Complete { id } => api.complete_todo(id).map(CmdOutcome::Ack),
        Commands::Delete { id } => api.delete_todo(id).map(CmdOutcome::Ack),
        Commands::Serve { .. } => Err(TodoError::Invalid(
            "serve has no command table entry".into(),
        )),
    }
}

fn serve(data_dir: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = TodoConfig::load(data_dir)?;
    let host = host.unwrap_or(config.host);
    let port = port.unwrap_or(config.port);
    let store = FileStore::new(data_dir.to_path_buf());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async move {
        let bridge = CliBridge::bind(&format!("{}:{}", host, port), Box::new(store)).await?;
        println!(
            "CLI WebSocket server listening on ws://{}:{}{}",
            host, port, CLI_PATH
        );
        println!("{}", "Server ready. Press Ctrl-C to stop.".green());
        bridge.run().await
    })
}

fn init_tracing(verbose: bool) {
    // --verbose raises the filter; otherwise RUST_LOG wins, defaulting to info
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("TODO_CLI_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "todocli", "todo-cli")
        .ok_or_else(|| TodoError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
