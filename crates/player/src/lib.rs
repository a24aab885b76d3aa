//! TileBrawl player crate.
//!
//! Terminal client for the TileBrawl tile game: catalog loading, the game
//! socket, state reconciliation and a line-oriented front end.

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod session_types;
pub mod state;
pub mod ui;

pub use application::{CatalogService, Catalogs, GameClient};
pub use config::PlayerConfig;
pub use error::{ClientError, ConfigError};
