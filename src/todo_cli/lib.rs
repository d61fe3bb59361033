//! # todo-cli Architecture
//!
//! todo-cli is a UI-agnostic todo library with two thin front ends: a local
//! CLI binary and a WebSocket bridge that serves the same command set to
//! remote clients.
//!
//! ## The layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front ends (main.rs / server.rs)                           │
//! │  - main.rs: argument parsing, terminal output, exit codes   │
//! │  - server.rs: WebSocket listener bridging remote CLI calls  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI layer (cli/)                                           │
//! │  - Static command registry: name → handler/schema/renderer  │
//! │  - Renderers writing through an injected OutputSink         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API facade (api.rs) and command layer (commands/*.rs)      │
//! │  - Pure business logic, structured results, no I/O          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principle: no I/O assumptions in core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout/stderr, and never exits the
//! process. "Not found" and "failed" are ordinary result values rendered
//! as plain text; only genuinely unexpected failures travel as errors and
//! reach the process boundary.
//!
//! ## Module overview
//!
//! - [`api`]: thin facade over the command modules
//! - [`commands`]: business logic and result types per command
//! - [`cli`]: command registry, renderers, output sinks
//! - [`server`]: the WebSocket CLI bridge
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types (`Todo`, `Priority`)
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod store;
