pub mod services;

pub use services::{CatalogService, Catalogs, GameClient};
