//! # WebSocket CLI bridge
//!
//! `todo-cli serve` exposes the command table over a WebSocket listener so a
//! remote CLI client can drive the same todo store. One JSON text frame per
//! request, one text frame of rendered output per reply:
//!
//! ```json
//! { "command": "add", "args": { "title": "Buy milk", "priority": "high" } }
//! ```
//!
//! The bridge dispatches through the same registry as the local CLI, so
//! output is byte-identical to a local invocation. Connections are accepted
//! only on the `/cli` path.

use crate::cli::output::BufferSink;
use crate::cli::registry::{self, CommandArgs};
use crate::error::{Result, TodoError};
use crate::store::DataStore;
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::http::StatusCode;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

pub const CLI_PATH: &str = "/cli";

/// The store shared across connections. Commands are synchronous, so each
/// request holds the lock only for the duration of its dispatch.
pub type SharedStore = Arc<Mutex<Box<dyn DataStore + Send>>>;

/// One request frame from a remote CLI client.
#[derive(Debug, Serialize, Deserialize)]
pub struct CliRequest {
    pub command: String,
    #[serde(default)]
    pub args: CommandArgs,
}

pub struct CliBridge {
    listener: TcpListener,
    store: SharedStore,
}

impl CliBridge {
    /// Bind the listener. Fails fast so startup errors surface before the
    /// ready banner is printed.
    pub async fn bind(addr: &str, store: Box<dyn DataStore + Send>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            store: Arc::new(Mutex::new(store)),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until interrupted (Ctrl-C).
    pub async fn run(self) -> Result<()> {
        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupt received, shutting down");
                    return Ok(());
                }
                accepted = self.listener.accept() => {
                    let (stream, peer) = accepted?;
                    let store = self.store.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, peer, store).await {
                            warn!(%peer, error = %e, "connection closed with error");
                        }
                    });
                }
            }
        }
    }
}

async fn handle_connection(stream: TcpStream, peer: SocketAddr, store: SharedStore) -> Result<()> {
    let ws = tokio_tungstenite::accept_hdr_async(stream, |req: &Request, resp: Response| {
        if req.uri().path() == CLI_PATH {
            Ok(resp)
        } else {
            let mut rejection = ErrorResponse::new(Some("CLI bridge serves /cli only".into()));
            *rejection.status_mut() = StatusCode::NOT_FOUND;
            Err(rejection)
        }
    })
    .await
    .map_err(|e| TodoError::Server(e.to_string()))?;
    info!(%peer, "CLI client connected");

    let (mut write, mut read) = ws.split();
    while let Some(msg) = read.next().await {
        let msg = msg.map_err(|e| TodoError::Server(e.to_string()))?;
        match msg {
            Message::Text(text) => {
                debug!(%peer, request = %text, "dispatching");
                let reply = handle_request(&store, &text);
                write
                    .send(Message::Text(reply))
                    .await
                    .map_err(|e| TodoError::Server(e.to_string()))?;
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!(%peer, "CLI client disconnected");
    Ok(())
}

/// Parse, dispatch, and render a single request. Always produces a reply
/// line; malformed or unknown requests never tear down the connection.
fn handle_request(store: &SharedStore, text: &str) -> String {
    let request: CliRequest = match serde_json::from_str(text) {
        Ok(request) => request,
        Err(e) => return format!("Error: invalid request: {}", e),
    };

    let Some(spec) = registry::find(&request.command) else {
        return format!("Unknown command: {}", request.command);
    };

    let mut guard = match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    let mut sink = BufferSink::new();
    match registry::dispatch(spec, guard.as_mut(), &request.args, &mut sink) {
        Ok(()) => sink.into_text(),
        Err(e) => format!("Error: {}", e),
    }
}
