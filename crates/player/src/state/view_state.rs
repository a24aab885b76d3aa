//! Character card state: catalog preview merged with the live server status.
//!
//! The card is rebuilt from scratch on each status message.

use tilebrawl_shared::{CharacterDefinition, StatusData};

/// Move points a basic attack costs. Mirrors the server rule.
pub const ATTACK_COST: i64 = 2;

/// Move points a special attack costs. Mirrors the server rule.
pub const SPECIAL_COST: i64 = 4;

/// Multiplier used when neither the character nor the status names one.
pub const DEFAULT_SPECIAL_MULT: f64 = 1.5;

const DEFAULT_SPECIAL_NAME: &str = "Special";
const DEFAULT_SPECIAL_EMOJI: &str = "✨";

/// Live status as last reported by the server, with display defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveStatus {
    /// Clamped to zero
    pub hp: i64,
    /// Never zero
    pub max_hp: i64,
    pub move_points: i64,
    pub player_name: Option<String>,
    pub attack: Option<i64>,
    pub attack_range: Option<i64>,
    pub speed: Option<i64>,
    pub special_damage_mult: Option<f64>,
}

impl LiveStatus {
    pub fn from_status(status: &StatusData) -> Self {
        Self {
            hp: status.hp.unwrap_or(0).max(0),
            max_hp: match status.max_hp {
                Some(max_hp) if max_hp != 0 => max_hp,
                _ => 1,
            },
            move_points: status.move_points.unwrap_or(0),
            player_name: status.player_name.clone().filter(|name| !name.is_empty()),
            attack: status.attack,
            attack_range: status.attack_range,
            speed: status.speed,
            special_damage_mult: status.special_damage_mult,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// Which actions the player can afford right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Affordances {
    pub attack: bool,
    pub special: bool,
}

impl Affordances {
    pub fn from_move_points(move_points: i64) -> Self {
        Self {
            attack: move_points >= ATTACK_COST,
            special: move_points >= SPECIAL_COST,
        }
    }
}

/// `round(base_attack * multiplier)`, rounding halves away from zero.
pub fn special_damage_preview(base_attack: i64, multiplier: f64) -> i64 {
    (base_attack as f64 * multiplier).round() as i64
}

/// Everything the character card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub emoji: Option<String>,
    pub display_name: String,
    pub hp: i64,
    pub max_hp: i64,
    /// `None` until the first status arrives
    pub move_points: Option<i64>,
    pub attack: Option<i64>,
    pub attack_range: Option<i64>,
    pub speed: Option<i64>,
    pub special_name: String,
    pub special_emoji: String,
    pub special_damage: Option<i64>,
    pub affordances: Affordances,
}

impl ViewState {
    /// Card shown from the catalog alone, before any status arrives.
    pub fn preview(def: &CharacterDefinition) -> Self {
        let special_mult = special_multiplier(Some(def), None);
        Self {
            emoji: def.emoji.clone(),
            display_name: def.kind.clone(),
            hp: def.health,
            max_hp: def.health,
            move_points: None,
            attack: def.attack,
            attack_range: def.attack_range,
            speed: def.speed,
            special_name: special_name(Some(def)),
            special_emoji: special_emoji(Some(def)),
            special_damage: def
                .attack
                .map(|attack| special_damage_preview(attack, special_mult)),
            affordances: Affordances::from_move_points(0),
        }
    }

    /// Merge the selected character with a live status. Status fields win.
    pub fn merge(def: Option<&CharacterDefinition>, live: &LiveStatus) -> Self {
        let attack = live.attack.or_else(|| def.and_then(|d| d.attack));
        let display_name = live
            .player_name
            .clone()
            .or_else(|| def.map(|d| d.kind.clone()).filter(|kind| !kind.is_empty()))
            .or_else(|| def.map(|d| d.id.clone()).filter(|id| !id.is_empty()))
            .unwrap_or_else(|| "-".to_string());

        Self {
            emoji: def.and_then(|d| d.emoji.clone()),
            display_name,
            hp: live.hp,
            max_hp: live.max_hp,
            move_points: Some(live.move_points),
            attack,
            attack_range: live.attack_range.or_else(|| def.and_then(|d| d.attack_range)),
            speed: live.speed.or_else(|| def.and_then(|d| d.speed)),
            special_name: special_name(def),
            special_emoji: special_emoji(def),
            special_damage: attack.map(|attack| {
                special_damage_preview(attack, special_multiplier(def, Some(live)))
            }),
            affordances: Affordances::from_move_points(live.move_points),
        }
    }
}

/// The character's own multiplier wins, zero included; then a non-zero
/// multiplier from the status; then the default.
fn special_multiplier(def: Option<&CharacterDefinition>, live: Option<&LiveStatus>) -> f64 {
    def.and_then(|d| d.special.as_ref())
        .and_then(|s| s.damage_mult)
        .or_else(|| {
            live.and_then(|l| l.special_damage_mult)
                .filter(|mult| *mult != 0.0)
        })
        .unwrap_or(DEFAULT_SPECIAL_MULT)
}

fn special_name(def: Option<&CharacterDefinition>) -> String {
    def.and_then(|d| d.special.as_ref())
        .and_then(|s| s.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_SPECIAL_NAME.to_string())
}

fn special_emoji(def: Option<&CharacterDefinition>) -> String {
    def.and_then(|d| d.special.as_ref())
        .and_then(|s| s.emoji.clone())
        .filter(|emoji| !emoji.is_empty())
        .unwrap_or_else(|| DEFAULT_SPECIAL_EMOJI.to_string())
}
