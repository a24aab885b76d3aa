//! State reconciler - folds inbound server messages into the game view
//!
//! Each message is applied on its own and in arrival order. The reconciler
//! never talks to the socket: terminal events come back as effects for the
//! caller to carry out.

use tilebrawl_shared::{CharacterDefinition, InboundMessage, ServerMessage};

use crate::state::{GameView, LiveStatus, MapView, SessionContext, TurnState, ViewState};

/// Alert shown once per session when hp reaches zero
pub const DEATH_ALERT: &str = "You died";

/// Side effects requested by a reconciled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileEffect {
    /// Blocking alert for the player
    Alert(String),
    /// Close the live socket
    CloseConnection,
}

/// Apply one inbound message.
///
/// `selected` is the catalog entry of the character picked in the lobby; its
/// preview fields fill whatever the status leaves out.
pub fn reconcile(
    message: InboundMessage,
    view: &mut GameView,
    session: &mut SessionContext,
    selected: Option<&CharacterDefinition>,
) -> Vec<ReconcileEffect> {
    let message = match message {
        InboundMessage::Structured(message) => message,
        InboundMessage::Unrecognized(value) => {
            tracing::debug!("Unrecognized server message: {}", value);
            view.log.push(value.to_string());
            return Vec::new();
        }
        InboundMessage::Opaque(text) => {
            tracing::warn!("Non-JSON frame from server");
            view.log.push(text);
            return Vec::new();
        }
    };

    tracing::debug!(kind = message.kind(), "Applying server message");

    match message {
        ServerMessage::Map { map, you } => {
            view.map = MapView::from_wire(&map, you);
        }
        ServerMessage::Status(status) => {
            let live = LiveStatus::from_status(&status);
            view.card = Some(ViewState::merge(selected, &live));
            let dead = live.is_dead();
            session.set_live_status(live);

            if dead && session.mark_death_shown() {
                tracing::info!("Player died, closing session");
                return vec![
                    ReconcileEffect::Alert(DEATH_ALERT.to_string()),
                    ReconcileEffect::CloseConnection,
                ];
            }
        }
        ServerMessage::Turn {
            player_id,
            player_name,
            queue,
        } => {
            view.turn = TurnState::from_wire(player_id, &player_name, &queue, session.my_player_id());
            view.status_line = view.turn.status_line(session.my_player_id());
        }
        ServerMessage::Info { msg } => {
            view.log.push(msg);
        }
        ServerMessage::Init { player_id } => {
            tracing::info!(player_id = %player_id, "Assigned player id");
            session.set_my_player_id(player_id);
        }
        ServerMessage::Unknown => {}
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockTransport;
    use tilebrawl_shared::{fallback_characters, PlayerId};

    fn session() -> SessionContext {
        SessionContext::new(Box::new(MockTransport::new()), Some("wizard".to_string()))
    }

    fn apply(text: &str, view: &mut GameView, session: &mut SessionContext) -> Vec<ReconcileEffect> {
        let characters = fallback_characters();
        reconcile(InboundMessage::parse(text), view, session, characters.first())
    }

    #[test]
    fn status_updates_card_and_affordances() {
        let mut view = GameView::default();
        let mut session = session();

        let effects = apply(
            r#"{"type":"status","hp":-3,"max_hp":0,"move_points":2,"attack":10}"#,
            &mut view,
            &mut session,
        );
        // hp clamps to zero, which also counts as dead
        assert_eq!(
            effects,
            [
                ReconcileEffect::Alert("You died".to_string()),
                ReconcileEffect::CloseConnection
            ]
        );

        let card = view.card.expect("card");
        assert_eq!((card.hp, card.max_hp), (0, 1));
        assert!(card.affordances.attack);
        assert!(!card.affordances.special);
        assert_eq!(card.special_damage, Some(15));
        assert_eq!(card.display_name, "Wizard");
        assert_eq!(session.move_points(), 2);
    }

    #[test]
    fn death_alert_fires_once_per_session() {
        let mut view = GameView::default();
        let mut session = session();
        let dead = r#"{"type":"status","hp":0,"max_hp":50,"move_points":0}"#;

        assert_eq!(apply(dead, &mut view, &mut session).len(), 2);
        assert!(apply(dead, &mut view, &mut session).is_empty());

        let mut fresh = self::session();
        assert_eq!(apply(dead, &mut view, &mut fresh).len(), 2);
    }

    #[test]
    fn turn_marks_local_player_after_init() {
        let mut view = GameView::default();
        let mut session = session();

        apply(r#"{"type":"init","player_id":2}"#, &mut view, &mut session);
        assert_eq!(session.my_player_id(), Some(&PlayerId::new("2")));

        apply(
            r#"{"type":"turn","player_id":1,"player_name":"A","queue":[{"player_id":1,"player_name":"A"},{"player_id":2,"player_name":"B"}]}"#,
            &mut view,
            &mut session,
        );

        let marked: Vec<bool> = view.turn.queue.iter().map(|e| e.is_you).collect();
        assert_eq!(marked, [false, true]);
        assert_eq!(view.turn.queue[1].label(), "B (you)");
        assert_eq!(view.status_line, "Waiting: A");

        apply(
            r#"{"type":"turn","player_id":2,"player_name":"B","queue":[]}"#,
            &mut view,
            &mut session,
        );
        assert_eq!(view.status_line, "Your turn");
        assert!(view.turn.queue.is_empty());
    }

    #[test]
    fn empty_turn_shows_placeholder() {
        let mut view = GameView::default();
        let mut session = session();

        apply(
            r#"{"type":"turn","player_id":null,"player_name":"","queue":[]}"#,
            &mut view,
            &mut session,
        );
        assert_eq!(view.turn.current_player_name, "-");
        assert_eq!(view.status_line, "Waiting: -");
    }

    #[test]
    fn map_replaces_grid() {
        let mut view = GameView::default();
        let mut session = session();

        apply(
            r#"{"type":"map","map":"..\n.x","you":{"x":1,"y":1}}"#,
            &mut view,
            &mut session,
        );
        assert_eq!(view.map.rows().len(), 2);
        assert!(view.map.rows()[1][1].is_you);

        apply(r#"{"type":"map","map":"."}"#, &mut view, &mut session);
        assert_eq!(view.map.rows().len(), 1);
        assert_eq!(view.map.you(), None);
    }

    #[test]
    fn info_unknown_and_raw_frames_are_logged() {
        let mut view = GameView::default();
        let mut session = session();

        apply(r#"{"type":"info","msg":"ann rolled 5"}"#, &mut view, &mut session);
        apply(r#"{"type":"weather","rain":true}"#, &mut view, &mut session);
        apply("plain text", &mut view, &mut session);

        let texts: Vec<&str> = view.log.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts[0], "ann rolled 5");
        assert!(texts[1].contains("\"weather\""));
        assert_eq!(texts[2], "plain text");
    }
}
