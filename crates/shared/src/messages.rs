//! Message types for Server-Player communication
//!
//! The game server speaks two different dialects on the same socket:
//! - Outbound (Player → Server) commands are plain text lines with a fixed verb prefix.
//! - Inbound (Server → Player) messages are one JSON object per text frame, tagged by `type`.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Unknown inbound `type` values deserialize to `Unknown` and are surfaced to
//!   the player verbatim instead of being treated as an error

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Client Commands (Player → Server)
// =============================================================================

/// A compass direction accepted by the `move` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction: {0}")]
pub struct UnknownDirectionError(pub String);

impl FromStr for Direction {
    type Err = UnknownDirectionError;

    /// Accepts the full names plus single-letter shorthands (`n`, `s`, `e`, `w`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            other => Err(UnknownDirectionError(other.to_string())),
        }
    }
}

/// Commands from client (Player) to server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// First command of every session: `join <name> [character_id]`
    Join {
        name: String,
        character_id: Option<String>,
    },
    /// Step in a direction (costs one move point server-side)
    Move(Direction),
    /// Basic attack against everything in range
    Attack,
    /// Character-specific special attack
    SpecialAttack,
    /// Consume an item from the catalog
    UseItem { item_id: String },
    /// Broadcast chat line
    Say { text: String },
    /// Roll for move points at the start of a turn
    Roll,
    /// List players sharing the current tile
    Look,
}

impl ClientCommand {
    /// Encode the command into its wire text.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientCommand::Join {
                name,
                character_id: Some(character_id),
            } if !character_id.is_empty() => write!(f, "join {} {}", name, character_id),
            ClientCommand::Join { name, .. } => write!(f, "join {}", name),
            ClientCommand::Move(direction) => write!(f, "move {}", direction),
            ClientCommand::Attack => f.write_str("attack"),
            ClientCommand::SpecialAttack => f.write_str("attack special"),
            ClientCommand::UseItem { item_id } => write!(f, "use {}", item_id),
            ClientCommand::Say { text } => write!(f, "say {}", text),
            ClientCommand::Roll => f.write_str("roll"),
            ClientCommand::Look => f.write_str("look"),
        }
    }
}

// =============================================================================
// Server Messages (Server → Player)
// =============================================================================

/// Grid coordinates of the receiving player, as reported alongside the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: usize,
    pub y: usize,
}

/// Server-assigned player identifier.
///
/// The server issues UUID strings, but numeric ids are accepted too and kept in
/// their decimal text form so comparisons stay string-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => PlayerId(text),
            RawId::Number(number) => PlayerId(number.to_string()),
        })
    }
}

/// One entry of the broadcast turn queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub player_id: PlayerId,
    pub player_name: String,
}

/// Live status pushed by the server. Every field is optional on the wire; the
/// player decides the display defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusData {
    #[serde(default)]
    pub hp: Option<i64>,
    #[serde(default)]
    pub max_hp: Option<i64>,
    #[serde(default)]
    pub move_points: Option<i64>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub attack: Option<i64>,
    #[serde(default)]
    pub attack_range: Option<i64>,
    #[serde(default)]
    pub speed: Option<i64>,
    #[serde(default)]
    pub special_damage_mult: Option<f64>,
}

/// Messages from server to client (Player)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// Full map redraw
    Map {
        #[serde(default)]
        map: String,
        #[serde(default)]
        you: Option<GridPosition>,
    },
    /// The receiving player's live status
    Status(StatusData),
    /// Turn transition with the upcoming queue
    Turn {
        #[serde(default)]
        player_id: Option<PlayerId>,
        #[serde(default)]
        player_name: String,
        #[serde(default)]
        queue: Vec<QueueEntry>,
    },
    /// Free-form game text (chat, combat results, errors)
    Info { msg: String },
    /// Sent once after `join` with the id the server assigned to this player
    Init { player_id: PlayerId },
    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ServerMessage {
    /// Short name of the message kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::Map { .. } => "map",
            ServerMessage::Status(_) => "status",
            ServerMessage::Turn { .. } => "turn",
            ServerMessage::Info { .. } => "info",
            ServerMessage::Init { .. } => "init",
            ServerMessage::Unknown => "unknown",
        }
    }
}

/// Result of parsing one inbound text frame.
///
/// Parsing never fails: payloads that are not recognized are carried along so
/// the player can show them instead of dropping them.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    /// A message kind the player understands
    Structured(ServerMessage),
    /// Valid JSON that is not a known message (unknown `type`, missing fields)
    Unrecognized(serde_json::Value),
    /// Not JSON at all
    Opaque(String),
}

impl InboundMessage {
    /// Classify a raw text frame.
    pub fn parse(text: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(_) => return InboundMessage::Opaque(text.to_string()),
        };

        match ServerMessage::deserialize(&value) {
            Ok(ServerMessage::Unknown) | Err(_) => InboundMessage::Unrecognized(value),
            Ok(msg) => InboundMessage::Structured(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_includes_character_only_when_present() {
        let with_char = ClientCommand::Join {
            name: "ann".to_string(),
            character_id: Some("elf".to_string()),
        };
        let without_char = ClientCommand::Join {
            name: "ann".to_string(),
            character_id: None,
        };
        let empty_char = ClientCommand::Join {
            name: "ann".to_string(),
            character_id: Some(String::new()),
        };

        assert_eq!(with_char.encode(), "join ann elf");
        assert_eq!(without_char.encode(), "join ann");
        assert_eq!(empty_char.encode(), "join ann");
    }

    #[test]
    fn action_commands_use_fixed_prefixes() {
        assert_eq!(ClientCommand::Move(Direction::West).encode(), "move west");
        assert_eq!(ClientCommand::Attack.encode(), "attack");
        assert_eq!(ClientCommand::SpecialAttack.encode(), "attack special");
        assert_eq!(
            ClientCommand::UseItem {
                item_id: "medkit".to_string()
            }
            .encode(),
            "use medkit"
        );
        assert_eq!(
            ClientCommand::Say {
                text: "hello there".to_string()
            }
            .encode(),
            "say hello there"
        );
        assert_eq!(ClientCommand::Roll.encode(), "roll");
        assert_eq!(ClientCommand::Look.encode(), "look");
    }

    #[test]
    fn direction_parses_names_and_shorthands() {
        assert_eq!("North".parse::<Direction>(), Ok(Direction::North));
        assert_eq!("s".parse::<Direction>(), Ok(Direction::South));
        assert_eq!(" east ".parse::<Direction>(), Ok(Direction::East));
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn parses_map_with_position() {
        let msg = InboundMessage::parse(r#"{"type":"map","map":"..\n.@","you":{"x":1,"y":1}}"#);
        assert_eq!(
            msg,
            InboundMessage::Structured(ServerMessage::Map {
                map: "..\n.@".to_string(),
                you: Some(GridPosition { x: 1, y: 1 }),
            })
        );
    }

    #[test]
    fn parses_partial_status() {
        let msg = InboundMessage::parse(r#"{"type":"status","hp":-3,"move_points":4}"#);
        let InboundMessage::Structured(ServerMessage::Status(status)) = msg else {
            panic!("expected a status message");
        };
        assert_eq!(status.hp, Some(-3));
        assert_eq!(status.max_hp, None);
        assert_eq!(status.move_points, Some(4));
        assert_eq!(status.player_name, None);
    }

    #[test]
    fn parses_turn_with_null_player() {
        let msg = InboundMessage::parse(
            r#"{"type":"turn","player_id":null,"player_name":"","queue":[]}"#,
        );
        assert_eq!(
            msg,
            InboundMessage::Structured(ServerMessage::Turn {
                player_id: None,
                player_name: String::new(),
                queue: Vec::new(),
            })
        );
    }

    #[test]
    fn numeric_player_ids_are_accepted() {
        let msg = InboundMessage::parse(
            r#"{"type":"turn","player_id":1,"player_name":"A","queue":[{"player_id":1,"player_name":"A"},{"player_id":"b-2","player_name":"B"}]}"#,
        );
        let InboundMessage::Structured(ServerMessage::Turn {
            player_id, queue, ..
        }) = msg
        else {
            panic!("expected a turn message");
        };
        assert_eq!(player_id, Some(PlayerId::new("1")));
        assert_eq!(queue[0].player_id.as_str(), "1");
        assert_eq!(queue[1].player_id.as_str(), "b-2");
    }

    #[test]
    fn unknown_type_is_unrecognized_not_error() {
        let msg = InboundMessage::parse(r#"{"type":"weather","rain":true}"#);
        let InboundMessage::Unrecognized(value) = msg else {
            panic!("expected an unrecognized message");
        };
        assert_eq!(value["rain"], serde_json::Value::Bool(true));
    }

    #[test]
    fn known_type_with_missing_fields_is_unrecognized() {
        let msg = InboundMessage::parse(r#"{"type":"init"}"#);
        assert!(matches!(msg, InboundMessage::Unrecognized(_)));
    }

    #[test]
    fn non_json_is_opaque() {
        let msg = InboundMessage::parse("server restarting");
        assert_eq!(
            msg,
            InboundMessage::Opaque("server restarting".to_string())
        );
    }
}
