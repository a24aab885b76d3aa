//! Application services
//!
//! Use cases of the player: loading catalogs, encoding intents, reconciling
//! server messages and driving the session lifecycle. Services depend on port
//! traits, not concrete infrastructure implementations.

pub mod catalog_service;
pub mod command_encoder;
pub mod game_client;
pub mod state_reconciler;

pub use catalog_service::{CatalogService, Catalogs, CharacterCatalog, ItemCatalog};
pub use command_encoder::encode_intent;
pub use game_client::GameClient;
pub use state_reconciler::{reconcile, ReconcileEffect, DEATH_ALERT};
