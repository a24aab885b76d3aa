//! Catalog DTOs served by the `/characters` and `/items` REST endpoints.
//!
//! Both catalogs are read once at player startup. When the server cannot be
//! reached the player falls back to the fixed lists defined here.

use serde::{Deserialize, Serialize};

/// Optional special-ability descriptor attached to a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialAbility {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    /// Damage multiplier over base attack
    #[serde(default)]
    pub damage_mult: Option<f64>,
    /// Move cost multiplier over the basic attack
    #[serde(default)]
    pub move_cost_mult: Option<f64>,
}

/// A playable character type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    pub id: String,
    /// Display name ("Wizard", "Snow Beast", ...)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub emoji: Option<String>,
    pub health: i64,
    #[serde(default)]
    pub attack: Option<i64>,
    #[serde(default)]
    pub attack_range: Option<i64>,
    #[serde(default)]
    pub speed: Option<i64>,
    #[serde(default)]
    pub special: Option<SpecialAbility>,
}

/// A usable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub move_cost: i64,
    /// HP restored on use; informational only on the player side
    #[serde(default)]
    pub restore: Option<i64>,
}

fn fallback_character(
    id: &str,
    kind: &str,
    emoji: &str,
    health: i64,
    attack_range: i64,
    speed: i64,
    special_name: &str,
    special_emoji: &str,
) -> CharacterDefinition {
    CharacterDefinition {
        id: id.to_string(),
        kind: kind.to_string(),
        emoji: Some(emoji.to_string()),
        health,
        attack: None,
        attack_range: Some(attack_range),
        speed: Some(speed),
        special: Some(SpecialAbility {
            name: Some(special_name.to_string()),
            emoji: Some(special_emoji.to_string()),
            damage_mult: None,
            move_cost_mult: None,
        }),
    }
}

/// Characters offered when `/characters` cannot be fetched.
pub fn fallback_characters() -> Vec<CharacterDefinition> {
    vec![
        fallback_character("wizard", "Wizard", "🧙", 50, 3, 2, "Thunder Clap", "⚡"),
        fallback_character("elf", "Elf", "🧝", 60, 2, 3, "Flaming Arrows", "🔥"),
        fallback_character("barbarian", "Barbarian", "🪓", 100, 1, 1, "Berserker Slam", "💥"),
        fallback_character("snowbeast", "Snow Beast", "🐺", 120, 2, 1, "Frost Bite", "❄️"),
    ]
}

/// Items offered when `/items` cannot be fetched.
pub fn fallback_items() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition {
            id: "berry".to_string(),
            name: "Berry".to_string(),
            move_cost: 3,
            restore: None,
        },
        ItemDefinition {
            id: "medkit".to_string(),
            name: "Med Kit".to_string(),
            move_cost: 6,
            restore: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_reads_server_shape() {
        let json = r#"{"id":"wizard","type":"Wizard","emoji":"🧙","health":50,"attack_range":3,"attack":12,"speed":2,"special":{"damage_mult":2.0,"move_cost_mult":2}}"#;
        let def: CharacterDefinition = serde_json::from_str(json).expect("deserialize");

        assert_eq!(def.kind, "Wizard");
        assert_eq!(def.attack, Some(12));
        let special = def.special.expect("special");
        assert_eq!(special.damage_mult, Some(2.0));
        assert_eq!(special.name, None);
    }

    #[test]
    fn item_reads_server_shape() {
        let json = r#"[{"id":"berry","name":"Berry","restore":10,"move_cost":3}]"#;
        let items: Vec<ItemDefinition> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(items[0].restore, Some(10));
        assert_eq!(items[0].move_cost, 3);
    }

    #[test]
    fn fallback_lists_are_fixed() {
        let characters = fallback_characters();
        let ids: Vec<&str> = characters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["wizard", "elf", "barbarian", "snowbeast"]);
        assert!(characters.iter().all(|c| c.attack.is_none()));

        let items = fallback_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].move_cost, 6);
    }
}
