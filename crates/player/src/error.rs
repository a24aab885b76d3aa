//! Player-side error types.

use thiserror::Error;

/// Errors raised by player actions.
///
/// None of these end the program: the client turns each one into a log line
/// or an alert and carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// No name was entered before connecting
    #[error("Enter a name")]
    EmptyName,

    /// The name would split into several words on the wire
    #[error("Name must be a single word")]
    NameHasWhitespace,

    /// The selected character id is not in the catalog
    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    /// An outbound action was attempted without an open socket
    #[error("Not connected")]
    NotConnected,

    /// The cached move points are below the action's fixed cost
    #[error("Not enough moves")]
    NotEnoughMoves { required: i64, available: i64 },

    /// The socket refused a frame
    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid server URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
