pub mod http_client;
pub mod messaging;
pub mod websocket;

pub use http_client::HttpCatalogClient;
pub use messaging::{ConnectionState, SocketEvent};
