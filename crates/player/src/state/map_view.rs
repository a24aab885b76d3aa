//! Tile map as last broadcast by the server.

use tilebrawl_shared::GridPosition;

/// One map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub glyph: char,
    /// The receiving player stands here
    pub is_you: bool,
}

/// The full grid, replaced wholesale on every `map` message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapView {
    rows: Vec<Vec<Tile>>,
}

impl MapView {
    /// Build from the wire form: newline-delimited rows, one codepoint per cell.
    pub fn from_wire(map: &str, you: Option<GridPosition>) -> Self {
        let rows = map
            .split('\n')
            .enumerate()
            .map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .map(|(x, glyph)| Tile {
                        glyph,
                        is_you: you.is_some_and(|pos| pos.x == x && pos.y == y),
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Position of the highlighted cell, if any.
    pub fn you(&self) -> Option<GridPosition> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|tile| tile.is_you)
                .map(|x| GridPosition { x, y })
        })
    }
}
