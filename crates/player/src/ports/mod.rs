//! Player port definitions.
//!
//! Ports are the seams between the session logic and the outside world: the
//! game socket and the catalog HTTP endpoints.

pub mod outbound;
