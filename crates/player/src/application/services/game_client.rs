//! Game client - session lifecycle plus the single entry point for events
//!
//! The front end feeds every event through here one at a time: lobby input,
//! socket open/close, inbound frames and in-game intents. The client owns the
//! catalogs, the selected character, the render model and at most one
//! `SessionContext`.

use tilebrawl_shared::{CharacterDefinition, InboundMessage};

use crate::application::services::catalog_service::Catalogs;
use crate::application::services::command_encoder::encode_intent;
use crate::application::services::state_reconciler::{reconcile, ReconcileEffect};
use crate::error::ClientError;
use crate::ports::outbound::Transport;
use crate::session_types::{JoinRequest, PlayerIntent, UiMode};
use crate::state::{GameView, SessionContext, ViewState};

pub struct GameClient {
    catalogs: Catalogs,
    selected: Option<String>,
    session: Option<SessionContext>,
    view: GameView,
    alerts: Vec<String>,
}

impl GameClient {
    /// Create a client in the lobby with the first catalog entry selected.
    pub fn new(catalogs: Catalogs) -> Self {
        let selected = catalogs.characters.first().map(|def| def.id.clone());
        let mut client = Self {
            catalogs,
            selected,
            session: None,
            view: GameView::default(),
            alerts: Vec::new(),
        };
        client.refresh_preview();
        client
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    pub fn session(&self) -> Option<&SessionContext> {
        self.session.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.session.as_ref().is_some_and(SessionContext::is_open)
    }

    pub fn selected_character(&self) -> Option<&CharacterDefinition> {
        self.selected
            .as_deref()
            .and_then(|id| self.catalogs.characters.get(id))
    }

    /// Pick a character for the next join.
    ///
    /// A live session keeps the character it joined as.
    pub fn select_character(&mut self, id: &str) -> Result<(), ClientError> {
        if !self.catalogs.characters.contains(id) {
            return Err(ClientError::UnknownCharacter(id.to_string()));
        }
        self.selected = Some(id.to_string());
        match self.view.mode {
            UiMode::Lobby => self.refresh_preview(),
            UiMode::InGame => self
                .view
                .log
                .push(format!("{} selected for the next game", id)),
        }
        Ok(())
    }

    /// Validate a connect request and tear down any live session.
    ///
    /// On success the caller opens the socket and reports back through
    /// [`GameClient::on_open`] or [`GameClient::on_connect_failed`].
    pub fn begin_connect(&mut self, name: &str) -> Result<JoinRequest, ClientError> {
        let name = name.trim();
        if name.is_empty() {
            self.alerts.push(ClientError::EmptyName.to_string());
            return Err(ClientError::EmptyName);
        }
        // `join <name> [character]` is split on whitespace server-side
        if name.contains(char::is_whitespace) {
            self.alerts.push(ClientError::NameHasWhitespace.to_string());
            return Err(ClientError::NameHasWhitespace);
        }

        if let Some(old) = self.session.take() {
            tracing::info!("Closing previous session before reconnecting");
            old.transport().close();
            self.view.log.push("connection closed");
        }

        self.view.status_line = "connecting".to_string();
        Ok(JoinRequest {
            name: name.to_string(),
            character_id: self.selected.clone(),
        })
    }

    /// The socket opened: start a fresh session and join the game.
    pub fn on_open(&mut self, transport: Box<dyn Transport>, join: JoinRequest) {
        let session = SessionContext::new(transport, join.character_id.clone());

        let command = join.to_command().encode();
        tracing::debug!("Sending command: {}", command);
        if let Err(e) = session.transport().send_text(command) {
            tracing::error!("Failed to send join: {}", e);
            self.view
                .log
                .push(ClientError::SendFailed(e.to_string()).to_string());
        }

        self.session = Some(session);
        self.view.mode = UiMode::InGame;
        self.view.status_line = "connected".to_string();
        self.view.reset_board();
        self.refresh_preview();
    }

    /// The socket could not be opened.
    pub fn on_connect_failed(&mut self, reason: &str) {
        tracing::error!("Connection failed: {}", reason);
        self.session = None;
        self.view.mode = UiMode::Lobby;
        self.view.status_line = "disconnected".to_string();
        self.view.log.push(format!("connection failed: {}", reason));
    }

    /// One inbound text frame.
    pub fn on_message(&mut self, text: &str) {
        let Some(session) = self.session.as_mut() else {
            tracing::debug!("Dropping frame received without a session");
            return;
        };

        let joined_as = session
            .character_id()
            .and_then(|id| self.catalogs.characters.get(id));
        let effects = reconcile(InboundMessage::parse(text), &mut self.view, session, joined_as);

        for effect in effects {
            match effect {
                ReconcileEffect::Alert(message) => self.alerts.push(message),
                ReconcileEffect::CloseConnection => session.transport().close(),
            }
        }
    }

    /// The socket closed, from either side.
    pub fn on_closed(&mut self) {
        tracing::info!("Session closed");
        self.session = None;
        self.view.mode = UiMode::Lobby;
        self.view.status_line = "disconnected".to_string();
        self.view.log.push("connection closed");
        self.refresh_preview();
    }

    /// Send an in-game action, subject to local gating.
    pub fn perform(&mut self, intent: PlayerIntent) {
        let connected = self.is_connected();
        let move_points = self.session.as_ref().map_or(0, SessionContext::move_points);

        let command = match encode_intent(&intent, connected, move_points) {
            Ok(Some(command)) => command,
            Ok(None) => return,
            Err(e) => {
                tracing::debug!(action = intent.label(), "Action blocked: {}", e);
                self.view.log.push(e.to_string());
                return;
            }
        };

        let Some(session) = self.session.as_ref() else {
            return;
        };
        let text = command.encode();
        tracing::debug!("Sending command: {}", text);
        if let Err(e) = session.transport().send_text(text) {
            tracing::error!("Failed to send {}: {}", intent.label(), e);
            self.view
                .log
                .push(ClientError::SendFailed(e.to_string()).to_string());
        }
    }

    /// Leave the game.
    ///
    /// With an open socket this only requests the close; the lobby comes back
    /// when the close event arrives.
    pub fn quit(&mut self) {
        match self.session.as_ref() {
            Some(session) if session.is_open() => session.transport().close(),
            _ => {
                self.session = None;
                self.view.mode = UiMode::Lobby;
                self.view.status_line = "disconnected".to_string();
                self.view.log.push("disconnected");
                self.refresh_preview();
            }
        }
    }

    /// Drain pending blocking alerts.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    fn refresh_preview(&mut self) {
        self.view.card = self.selected_character().map(ViewState::preview);
    }
}
