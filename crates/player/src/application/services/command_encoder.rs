//! Command encoder - turns player intents into outbound commands
//!
//! Gating here is local only; the server re-validates every action.

use tilebrawl_shared::ClientCommand;

use crate::error::ClientError;
use crate::session_types::PlayerIntent;
use crate::state::{ATTACK_COST, SPECIAL_COST};

/// Encode `intent` for sending.
///
/// Returns `Ok(None)` for intents that are silently dropped (empty chat),
/// `Err(ClientError::NotConnected)` when there is no open socket, and
/// `Err(ClientError::NotEnoughMoves)` for attacks the cached move points
/// cannot cover.
pub fn encode_intent(
    intent: &PlayerIntent,
    connected: bool,
    move_points: i64,
) -> Result<Option<ClientCommand>, ClientError> {
    if !connected {
        return Err(ClientError::NotConnected);
    }

    let command = match intent {
        PlayerIntent::Move(direction) => ClientCommand::Move(*direction),
        PlayerIntent::Attack => {
            require_moves(ATTACK_COST, move_points)?;
            ClientCommand::Attack
        }
        PlayerIntent::SpecialAttack => {
            require_moves(SPECIAL_COST, move_points)?;
            ClientCommand::SpecialAttack
        }
        PlayerIntent::UseItem(item_id) => ClientCommand::UseItem {
            item_id: item_id.clone(),
        },
        PlayerIntent::Say(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            ClientCommand::Say {
                text: text.to_string(),
            }
        }
        PlayerIntent::Roll => ClientCommand::Roll,
        PlayerIntent::Look => ClientCommand::Look,
    };

    Ok(Some(command))
}

fn require_moves(required: i64, available: i64) -> Result<(), ClientError> {
    if available < required {
        return Err(ClientError::NotEnoughMoves {
            required,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilebrawl_shared::Direction;

    #[test]
    fn not_connected_blocks_everything() {
        for intent in [
            PlayerIntent::Move(Direction::North),
            PlayerIntent::Attack,
            PlayerIntent::Say("hi".to_string()),
            PlayerIntent::Roll,
        ] {
            assert_eq!(
                encode_intent(&intent, false, 10),
                Err(ClientError::NotConnected)
            );
        }
    }

    #[test]
    fn attacks_are_gated_on_move_points() {
        assert_eq!(
            encode_intent(&PlayerIntent::Attack, true, 1),
            Err(ClientError::NotEnoughMoves {
                required: 2,
                available: 1
            })
        );
        assert_eq!(
            encode_intent(&PlayerIntent::Attack, true, 2),
            Ok(Some(ClientCommand::Attack))
        );
        assert!(matches!(
            encode_intent(&PlayerIntent::SpecialAttack, true, 3),
            Err(ClientError::NotEnoughMoves { required: 4, .. })
        ));
        assert_eq!(
            encode_intent(&PlayerIntent::SpecialAttack, true, 4),
            Ok(Some(ClientCommand::SpecialAttack))
        );
    }

    #[test]
    fn movement_is_not_gated_locally() {
        let command = encode_intent(&PlayerIntent::Move(Direction::West), true, 0)
            .expect("encodes")
            .expect("command");
        assert_eq!(command.encode(), "move west");
    }

    #[test]
    fn say_trims_and_drops_empty() {
        assert_eq!(encode_intent(&PlayerIntent::Say("   ".to_string()), true, 0), Ok(None));

        let command = encode_intent(&PlayerIntent::Say("  hello there ".to_string()), true, 0)
            .expect("encodes")
            .expect("command");
        assert_eq!(command.encode(), "say hello there");
    }

    #[test]
    fn use_accepts_any_item() {
        let command = encode_intent(&PlayerIntent::UseItem("mystery".to_string()), true, 0)
            .expect("encodes")
            .expect("command");
        assert_eq!(command.encode(), "use mystery");
    }
}
