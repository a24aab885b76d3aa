//! Messaging infrastructure shared by the socket client and the session.
//!
//! - `ConnectionState` / `ConnectionStateObserver`: lock-free view of the socket state
//! - `SocketEvent`: what the reader task reports back to the event loop

pub mod connection;

pub use connection::{set_connection_state, ConnectionState, ConnectionStateObserver};

/// Events delivered from the socket reader task to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketEvent {
    /// One inbound text frame, unparsed
    Message(String),
    /// The socket is gone, whoever closed it
    Closed,
}
