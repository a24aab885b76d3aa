//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the application layer to talk to the server without depending on
//! concrete socket or HTTP implementations.

pub mod catalog_port;
pub mod transport_port;

pub use catalog_port::{ApiError, CatalogPort};
pub use transport_port::Transport;

#[cfg(any(test, feature = "testing"))]
pub use catalog_port::MockCatalogPort;
#[cfg(any(test, feature = "testing"))]
pub use transport_port::MockTransport;
