//! WebSocket client for the game server connection
//!
//! - `client`: tokio-tungstenite socket split into reader/writer tasks

mod client;

pub use client::{connect, SocketConnection, SocketConnector, WsTransport};
