//! Catalog service - loads the character and item catalogs once at startup
//!
//! Fetch failures never reach the caller: each catalog independently falls
//! back to the fixed list from `tilebrawl_shared`.

use std::collections::HashMap;

use tilebrawl_shared::{fallback_characters, fallback_items, CharacterDefinition, ItemDefinition};

use crate::ports::outbound::CatalogPort;

/// Character definitions in catalog order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct CharacterCatalog {
    entries: Vec<CharacterDefinition>,
    index: HashMap<String, usize>,
}

impl CharacterCatalog {
    pub fn new(entries: Vec<CharacterDefinition>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, def) in entries.iter().enumerate() {
            // First occurrence wins on duplicate ids
            index.entry(def.id.clone()).or_insert(position);
        }
        Self { entries, index }
    }

    pub fn get(&self, id: &str) -> Option<&CharacterDefinition> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The entry auto-selected at startup.
    pub fn first(&self) -> Option<&CharacterDefinition> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Usable items in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    entries: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(entries: Vec<ItemDefinition>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both catalogs, as loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub characters: CharacterCatalog,
    pub items: ItemCatalog,
}

impl Catalogs {
    /// Catalogs built from the fixed fallback lists.
    pub fn fallback() -> Self {
        Self {
            characters: CharacterCatalog::new(fallback_characters()),
            items: ItemCatalog::new(fallback_items()),
        }
    }
}

/// Service that fetches the catalogs through a `CatalogPort`
pub struct CatalogService<'a> {
    port: &'a dyn CatalogPort,
}

impl<'a> CatalogService<'a> {
    pub fn new(port: &'a dyn CatalogPort) -> Self {
        Self { port }
    }

    /// Fetch both catalogs, substituting a fallback for any that fails.
    pub async fn load(&self) -> Catalogs {
        let (characters, items) =
            tokio::join!(self.port.fetch_characters(), self.port.fetch_items());

        let characters = match characters {
            Ok(list) if !list.is_empty() => list,
            Ok(_) => {
                tracing::warn!("Character catalog is empty, using fallback list");
                fallback_characters()
            }
            Err(e) => {
                tracing::warn!("Failed to load characters, using fallback list: {}", e);
                fallback_characters()
            }
        };

        let items = match items {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Failed to load items, using fallback list: {}", e);
                fallback_items()
            }
        };

        tracing::info!(
            characters = characters.len(),
            items = items.len(),
            "Catalogs loaded"
        );

        Catalogs {
            characters: CharacterCatalog::new(characters),
            items: ItemCatalog::new(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiError, MockCatalogPort};

    fn berserker() -> CharacterDefinition {
        CharacterDefinition {
            id: "berserker".to_string(),
            kind: "Berserker".to_string(),
            emoji: None,
            health: 80,
            attack: Some(14),
            attack_range: Some(1),
            speed: Some(2),
            special: None,
        }
    }

    #[tokio::test]
    async fn character_fetch_failure_uses_fallback() {
        let mut port = MockCatalogPort::new();
        port.expect_fetch_characters()
            .times(1)
            .returning(|| Err(ApiError::RequestFailed("connection refused".to_string())));
        port.expect_fetch_items()
            .times(1)
            .returning(|| Ok(fallback_items()));

        let catalogs = CatalogService::new(&port).load().await;

        assert_eq!(catalogs.characters.len(), 4);
        assert_eq!(
            catalogs.characters.first().map(|c| c.id.as_str()),
            Some("wizard")
        );
        assert!(catalogs.characters.contains("snowbeast"));
    }

    #[tokio::test]
    async fn item_failure_does_not_affect_characters() {
        let mut port = MockCatalogPort::new();
        port.expect_fetch_characters()
            .returning(|| Ok(vec![berserker()]));
        port.expect_fetch_items()
            .returning(|| Err(ApiError::InvalidResponse("expected a list".to_string())));

        let catalogs = CatalogService::new(&port).load().await;

        assert_eq!(catalogs.characters.len(), 1);
        assert_eq!(
            catalogs.characters.get("berserker").and_then(|c| c.attack),
            Some(14)
        );
        let item_ids: Vec<&str> = catalogs.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(item_ids, ["berry", "medkit"]);
    }

    #[tokio::test]
    async fn empty_character_list_uses_fallback() {
        let mut port = MockCatalogPort::new();
        port.expect_fetch_characters().returning(|| Ok(Vec::new()));
        port.expect_fetch_items().returning(|| Ok(Vec::new()));

        let catalogs = CatalogService::new(&port).load().await;

        assert_eq!(catalogs.characters.len(), 4);
        assert!(catalogs.items.is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let mut second = berserker();
        second.health = 1;
        let catalog = CharacterCatalog::new(vec![berserker(), second]);

        assert_eq!(catalog.get("berserker").map(|c| c.health), Some(80));
        assert_eq!(catalog.len(), 2);
    }
}
