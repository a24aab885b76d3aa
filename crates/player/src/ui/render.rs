//! Plain-text rendering of the game view.

use std::fmt::Write;

use crate::application::services::Catalogs;
use crate::session_types::UiMode;
use crate::state::{GameView, MapView, TurnState, ViewState};

/// Number of log lines shown under the board
const LOG_TAIL: usize = 8;

const HIGHLIGHT_ON: &str = "\x1b[7m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";

/// Render the whole screen for the current mode.
pub fn render(view: &GameView, catalogs: &Catalogs, selected: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", view.status_line);

    match view.mode {
        UiMode::Lobby => {
            out.push_str(&render_characters(catalogs, selected));
            if let Some(card) = &view.card {
                out.push_str(&render_card(card));
            }
        }
        UiMode::InGame => {
            if let Some(card) = &view.card {
                out.push_str(&render_card(card));
            }
            out.push_str(&render_map(&view.map));
            out.push_str(&render_turn(&view.turn));
        }
    }

    for line in view.log.tail(LOG_TAIL) {
        let _ = writeln!(out, "{} {}", line.at.format("%H:%M:%S"), line.text);
    }
    out
}

pub fn render_characters(catalogs: &Catalogs, selected: Option<&str>) -> String {
    let mut out = String::new();
    for def in catalogs.characters.iter() {
        let marker = if selected == Some(def.id.as_str()) { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:<10} {} {} ({} HP)",
            marker,
            def.id,
            def.emoji.as_deref().unwrap_or(" "),
            def.kind,
            def.health
        );
    }
    out
}

pub fn render_items(catalogs: &Catalogs) -> String {
    let mut out = String::new();
    for item in catalogs.items.iter() {
        let _ = writeln!(out, "  {:<10} {} (cost {})", item.id, item.name, item.move_cost);
    }
    out
}

pub fn render_card(card: &ViewState) -> String {
    let stat = |value: Option<i64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}  HP {}/{}  MP {}",
        card.emoji.as_deref().unwrap_or(" "),
        card.display_name,
        card.hp,
        card.max_hp,
        stat(card.move_points)
    );
    let _ = writeln!(
        out,
        "ATK {}  RNG {}  SPD {}  {} {} ({} dmg)",
        stat(card.attack),
        stat(card.attack_range),
        stat(card.speed),
        card.special_emoji,
        card.special_name,
        stat(card.special_damage)
    );
    let _ = writeln!(
        out,
        "attack: {}  special: {}",
        if card.affordances.attack { "ready" } else { "-" },
        if card.affordances.special { "ready" } else { "-" }
    );
    out
}

pub fn render_map(map: &MapView) -> String {
    let mut out = String::new();
    for row in map.rows() {
        for tile in row {
            if tile.is_you {
                let _ = write!(out, "{}{}{}", HIGHLIGHT_ON, tile.glyph, HIGHLIGHT_OFF);
            } else {
                out.push(tile.glyph);
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_turn(turn: &TurnState) -> String {
    let queue: Vec<String> = turn.queue.iter().map(|entry| entry.label()).collect();
    let mut out = String::new();
    let _ = writeln!(out, "Turn: {}", turn.current_player_name);
    if !queue.is_empty() {
        let _ = writeln!(out, "Queue: {}", queue.join(", "));
    }
    out
}
