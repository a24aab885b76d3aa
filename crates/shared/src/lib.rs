//! TileBrawl Shared - Wire types for Server and Player communication
//!
//! This crate contains the vocabulary shared by everything that talks to the
//! game server:
//! - Outbound text commands (`ClientCommand`)
//! - Inbound JSON messages (`ServerMessage`, `InboundMessage`)
//! - Catalog DTOs for the REST endpoints, with their fallback lists
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and thiserror
//! 2. **No business logic** - Pure data types and serialization

pub mod catalog;
pub mod messages;

pub use catalog::{
    fallback_characters, fallback_items, CharacterDefinition, ItemDefinition, SpecialAbility,
};
pub use messages::{
    ClientCommand, Direction, GridPosition, InboundMessage, PlayerId, QueueEntry, ServerMessage,
    StatusData, UnknownDirectionError,
};
