//! Client-side view state
//!
//! Plain data owned by the game client and written only from the
//! event-handling path.

pub mod game_view;
pub mod map_view;
pub mod message_log;
pub mod session_context;
pub mod turn_state;
pub mod view_state;

pub use game_view::GameView;
pub use map_view::{MapView, Tile};
pub use message_log::{LogLine, MessageLog, MAX_LOG_LINES};
pub use session_context::SessionContext;
pub use turn_state::{TurnQueueEntry, TurnState};
pub use view_state::{
    special_damage_preview, Affordances, LiveStatus, ViewState, ATTACK_COST,
    DEFAULT_SPECIAL_MULT, SPECIAL_COST,
};
