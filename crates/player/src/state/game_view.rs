//! Everything the front end renders, in one place.

use crate::session_types::UiMode;
use crate::state::{MapView, MessageLog, TurnState, ViewState};

/// Render model for the terminal.
#[derive(Debug, Clone)]
pub struct GameView {
    pub mode: UiMode,
    /// Short connection/turn status (`connected`, `Your turn`, ...)
    pub status_line: String,
    pub map: MapView,
    pub turn: TurnState,
    /// Character card, `None` until a character is selected
    pub card: Option<ViewState>,
    pub log: MessageLog,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            mode: UiMode::Lobby,
            status_line: "disconnected".to_string(),
            map: MapView::default(),
            turn: TurnState::default(),
            card: None,
            log: MessageLog::default(),
        }
    }
}

impl GameView {
    /// Clear the per-game panels, keeping the log.
    pub fn reset_board(&mut self) {
        self.map = MapView::default();
        self.turn = TurnState::default();
    }
}
