//! WebSocket relay server.
//!
//! Accepts connections, registers each as a participant, and feeds
//! every inbound frame through [`RelayState::handle_event`]. All
//! communication is fire-and-forget: no acks, no replies, no retries.

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

use crate::RelayError;
use crate::protocol::Envelope;

use super::state::{Participant, RelayState};

/// Shared relay state wrapped in Arc<Mutex> for async access.
type SharedState = Arc<Mutex<RelayState>>;

/// Run the relay: bind the listener and serve until ctrl-c.
pub async fn run(addr: SocketAddr) -> Result<(), RelayError> {
    let listener = TcpListener::bind(addr).await?;
    info!("relay listening on {}", listener.local_addr()?);
    serve(listener).await
}

/// Accept connections on an already-bound listener until ctrl-c.
///
/// Separate from [`run`] so callers can bind port 0 and read the local
/// address first.
pub async fn serve(listener: TcpListener) -> Result<(), RelayError> {
    let state: SharedState = Arc::new(Mutex::new(RelayState::new()));

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, addr)) => {
                        let state = Arc::clone(&state);
                        tokio::spawn(handle_connection(stream, addr, state));
                    }
                    Err(e) => {
                        warn!("failed to accept connection: {}", e);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down relay");
                return Ok(());
            }
        }
    }
}

/// Handle a single WebSocket connection for its whole lifetime.
async fn handle_connection(stream: TcpStream, addr: SocketAddr, state: SharedState) {
    let ws_stream = match tokio_tungstenite::accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!(%addr, "WebSocket handshake failed: {}", e);
            return;
        }
    };

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    // Channel feeding this participant's share of every broadcast.
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();

    let id = state.lock().await.connect(Participant::new(addr, tx));

    // Forward queued broadcasts to the socket. A sink error means the
    // peer is gone; the receive loop below notices and cleans up.
    let send_task = tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            let Ok(json) = serde_json::to_string(&envelope) else {
                continue;
            };
            if ws_sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Process inbound frames until the peer closes or errors.
    while let Some(msg) = ws_receiver.next().await {
        let text = match msg {
            Ok(Message::Text(text)) => text.to_string(),
            Ok(Message::Close(_)) => break,
            Err(_) => break,
            _ => continue,
        };

        // Unrecognized event names and malformed frames fail to parse
        // here and are dropped without a reply.
        let envelope: Envelope = match serde_json::from_str(&text) {
            Ok(env) => env,
            Err(_) => continue,
        };

        state.lock().await.handle_event(envelope);
    }

    state.lock().await.disconnect(id);
    send_task.abort();
}
