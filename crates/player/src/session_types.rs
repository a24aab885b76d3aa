//! Session-related types shared by the application layer and the front end.

use tilebrawl_shared::{ClientCommand, Direction};

/// Which view the player is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Character selection and connect
    #[default]
    Lobby,
    /// Map, status, turn queue and log
    InGame,
}

/// A discrete in-game action requested by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerIntent {
    Move(Direction),
    Attack,
    SpecialAttack,
    UseItem(String),
    Say(String),
    Roll,
    Look,
}

impl PlayerIntent {
    /// Short name for notices and logs.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerIntent::Move(_) => "move",
            PlayerIntent::Attack => "attack",
            PlayerIntent::SpecialAttack => "special attack",
            PlayerIntent::UseItem(_) => "use",
            PlayerIntent::Say(_) => "say",
            PlayerIntent::Roll => "roll",
            PlayerIntent::Look => "look",
        }
    }
}

/// Validated parameters of a pending connect, carried until the socket opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    pub name: String,
    pub character_id: Option<String>,
}

impl JoinRequest {
    pub fn to_command(&self) -> ClientCommand {
        ClientCommand::Join {
            name: self.name.clone(),
            character_id: self.character_id.clone(),
        }
    }
}
