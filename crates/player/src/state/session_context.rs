//! Per-connection session state.

use tilebrawl_shared::PlayerId;

use crate::ports::outbound::Transport;
use crate::state::view_state::LiveStatus;

/// Everything that lives exactly as long as one socket connection.
///
/// Created when the socket opens and dropped on close or reconnect, so the
/// captured player id and the death flag never leak into the next session.
pub struct SessionContext {
    transport: Box<dyn Transport>,
    /// Character this session joined as
    character_id: Option<String>,
    my_player_id: Option<PlayerId>,
    death_shown: bool,
    live_status: Option<LiveStatus>,
}

impl SessionContext {
    pub fn new(transport: Box<dyn Transport>, character_id: Option<String>) -> Self {
        Self {
            transport,
            character_id,
            my_player_id: None,
            death_shown: false,
            live_status: None,
        }
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_open()
    }

    pub fn my_player_id(&self) -> Option<&PlayerId> {
        self.my_player_id.as_ref()
    }

    pub fn set_my_player_id(&mut self, id: PlayerId) {
        self.my_player_id = Some(id);
    }

    pub fn character_id(&self) -> Option<&str> {
        self.character_id.as_deref()
    }

    pub fn set_live_status(&mut self, live: LiveStatus) {
        self.live_status = Some(live);
    }

    /// Move points from the last status, zero before any arrives.
    pub fn move_points(&self) -> i64 {
        self.live_status.as_ref().map_or(0, |live| live.move_points)
    }

    /// Flip the death flag. Returns `true` only the first time per session.
    pub fn mark_death_shown(&mut self) -> bool {
        !std::mem::replace(&mut self.death_shown, true)
    }

    pub fn death_shown(&self) -> bool {
        self.death_shown
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("character_id", &self.character_id)
            .field("my_player_id", &self.my_player_id)
            .field("death_shown", &self.death_shown)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockTransport;

    #[test]
    fn death_flag_is_one_shot() {
        let mut session = SessionContext::new(Box::new(MockTransport::new()), None);

        assert!(!session.death_shown());
        assert!(session.mark_death_shown());
        assert!(!session.mark_death_shown());
        assert!(session.death_shown());
    }

    #[test]
    fn move_points_default_to_zero() {
        let mut session = SessionContext::new(Box::new(MockTransport::new()), None);
        assert_eq!(session.move_points(), 0);
        assert!(session.my_player_id().is_none());

        session.set_live_status(LiveStatus::from_status(&tilebrawl_shared::StatusData {
            move_points: Some(3),
            ..Default::default()
        }));
        assert_eq!(session.move_points(), 3);
    }
}
