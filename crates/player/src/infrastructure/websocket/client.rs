//! Game socket client using tokio-tungstenite
//!
//! `connect` opens one socket and splits it into a reader task and a writer
//! task. The reader forwards text frames as `SocketEvent`s and reports
//! `SocketEvent::Closed` exactly once when the stream ends. The writer drains
//! the outbound queue fed by `WsTransport`. Neither task touches session state.

use std::sync::atomic::AtomicU8;
use std::sync::Arc;

use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::infrastructure::messaging::{
    set_connection_state, ConnectionState, ConnectionStateObserver, SocketEvent,
};
use crate::ports::outbound::Transport;

/// Capacity of the outbound frame queue
const OUTBOUND_QUEUE: usize = 32;

/// Capacity of the inbound event queue
const INBOUND_QUEUE: usize = 64;

/// Frames queued for the writer task.
#[derive(Debug)]
enum Outbound {
    Text(String),
    Close,
}

/// Write half of an open game socket.
#[derive(Debug, Clone)]
pub struct WsTransport {
    tx: mpsc::Sender<Outbound>,
    state: Arc<AtomicU8>,
}

impl WsTransport {
    /// Observer for the socket state, for status display.
    pub fn observer(&self) -> ConnectionStateObserver {
        ConnectionStateObserver::new(Arc::clone(&self.state))
    }
}

impl Transport for WsTransport {
    fn is_open(&self) -> bool {
        self.observer().is_connected()
    }

    fn send_text(&self, text: String) -> Result<()> {
        if !self.is_open() {
            return Err(anyhow::anyhow!("Not connected"));
        }
        self.tx
            .try_send(Outbound::Text(text))
            .map_err(|e| anyhow::anyhow!("Socket send failed: {}", e))
    }

    fn close(&self) {
        // Readers of the state see the socket as closed right away; the
        // reader task still reports `Closed` once the server answers.
        set_connection_state(&self.state, ConnectionState::Disconnected);
        if let Err(e) = self.tx.try_send(Outbound::Close) {
            tracing::debug!("Close request not queued: {}", e);
        }
    }
}

/// An open socket: the transport to write with and the events to read.
pub struct SocketConnection {
    pub transport: WsTransport,
    pub events: mpsc::Receiver<SocketEvent>,
}

/// Opens one game socket, with its state observable from the start.
#[derive(Debug)]
pub struct SocketConnector {
    state: Arc<AtomicU8>,
}

impl Default for SocketConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl SocketConnector {
    /// A connector reads as `Connecting` until `connect` settles.
    pub fn new() -> Self {
        Self {
            state: Arc::new(AtomicU8::new(ConnectionState::Connecting.to_u8())),
        }
    }

    pub fn observer(&self) -> ConnectionStateObserver {
        ConnectionStateObserver::new(Arc::clone(&self.state))
    }

    /// Open the socket at `url`.
    pub async fn connect(self, url: &str) -> Result<SocketConnection> {
        open(url, self.state).await
    }
}

/// Open a game socket at `url`.
pub async fn connect(url: &str) -> Result<SocketConnection> {
    SocketConnector::new().connect(url).await
}

async fn open(url: &str, state: Arc<AtomicU8>) -> Result<SocketConnection> {
    let (ws_stream, _) = match connect_async(url).await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::error!("Failed to connect to server: {}", e);
            set_connection_state(&state, ConnectionState::Disconnected);
            return Err(e.into());
        }
    };
    tracing::info!("Connected to server at {}", url);
    set_connection_state(&state, ConnectionState::Connected);

    let (mut write, mut read) = ws_stream.split();
    let (out_tx, mut out_rx) = mpsc::channel::<Outbound>(OUTBOUND_QUEUE);
    let (event_tx, event_rx) = mpsc::channel::<SocketEvent>(INBOUND_QUEUE);

    let state_for_reader = Arc::clone(&state);
    tokio::spawn(async move {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if event_tx.send(SocketEvent::Message(text)).await.is_err() {
                        // Session dropped its receiver; nobody is listening.
                        break;
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed connection");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            }
        }

        set_connection_state(&state_for_reader, ConnectionState::Disconnected);
        let _ = event_tx.send(SocketEvent::Closed).await;
    });

    let state_for_writer = Arc::clone(&state);
    tokio::spawn(async move {
        while let Some(outbound) = out_rx.recv().await {
            match outbound {
                Outbound::Text(text) => {
                    if let Err(e) = write.send(Message::Text(text)).await {
                        tracing::error!("Failed to send message: {}", e);
                        set_connection_state(&state_for_writer, ConnectionState::Disconnected);
                        break;
                    }
                }
                Outbound::Close => {
                    if let Err(e) = write.send(Message::Close(None)).await {
                        tracing::debug!("Failed to send close frame: {}", e);
                    }
                    break;
                }
            }
        }
        tracing::debug!("Write task completed");
    });

    Ok(SocketConnection {
        transport: WsTransport { tx: out_tx, state },
        events: event_rx,
    })
}
