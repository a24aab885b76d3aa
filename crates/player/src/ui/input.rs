//! Line parser for typed terminal input.

use std::str::FromStr;

use tilebrawl_shared::Direction;

use crate::session_types::PlayerIntent;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// List the character catalog
    ListCharacters,
    /// List the item catalog
    ListItems,
    /// Select a character by id
    Pick(String),
    /// Connect, optionally with a name
    Connect(Option<String>),
    /// An in-game action
    Intent(PlayerIntent),
    /// Leave the current game
    Quit,
    /// Leave the program
    Exit,
    Help,
    /// Anything else, kept for the error notice
    Unknown(String),
}

/// Parse one line of input. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<TerminalCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "chars" | "characters" => TerminalCommand::ListCharacters,
        "items" => TerminalCommand::ListItems,
        "pick" | "select" if !rest.is_empty() => TerminalCommand::Pick(rest.to_string()),
        "connect" | "join" => {
            TerminalCommand::Connect(Some(rest.to_string()).filter(|name| !name.is_empty()))
        }
        "move" | "go" => match Direction::from_str(rest) {
            Ok(direction) => TerminalCommand::Intent(PlayerIntent::Move(direction)),
            Err(_) => TerminalCommand::Unknown(line.to_string()),
        },
        "n" | "s" | "e" | "w" | "north" | "south" | "east" | "west" if rest.is_empty() => {
            match Direction::from_str(verb) {
                Ok(direction) => TerminalCommand::Intent(PlayerIntent::Move(direction)),
                Err(_) => TerminalCommand::Unknown(line.to_string()),
            }
        }
        "attack" | "a" if rest.eq_ignore_ascii_case("special") => {
            TerminalCommand::Intent(PlayerIntent::SpecialAttack)
        }
        "attack" | "a" => TerminalCommand::Intent(PlayerIntent::Attack),
        "special" | "sp" => TerminalCommand::Intent(PlayerIntent::SpecialAttack),
        "use" if !rest.is_empty() => TerminalCommand::Intent(PlayerIntent::UseItem(rest.to_string())),
        // Chat text is passed through untrimmed; the encoder trims it
        "say" => TerminalCommand::Intent(PlayerIntent::Say(rest.to_string())),
        "roll" => TerminalCommand::Intent(PlayerIntent::Roll),
        "look" => TerminalCommand::Intent(PlayerIntent::Look),
        "quit" | "leave" => TerminalCommand::Quit,
        "exit" => TerminalCommand::Exit,
        "help" | "?" => TerminalCommand::Help,
        _ => TerminalCommand::Unknown(line.to_string()),
    };

    Some(command)
}

pub const HELP: &str = "\
Lobby:   chars | items | pick <id> | connect [name] | exit
In game: n/s/e/w | move <dir> | attack | special | use <item> | say <text> | roll | look | quit";
