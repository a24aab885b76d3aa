//! Transport Port - the single live game socket
//!
//! The session layer only needs three things from the socket: whether it is
//! open, a way to write a text frame, and a way to close it. Inbound frames are
//! delivered separately as events so every handler runs to completion before
//! the next frame is looked at.

/// Port for the game socket owned by a session.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Transport: Send + Sync {
    /// Whether the socket is open for writing.
    fn is_open(&self) -> bool;

    /// Queue one text frame for the server.
    fn send_text(&self, text: String) -> anyhow::Result<()>;

    /// Request a close. The close itself is reported later as a socket event.
    fn close(&self);
}
