//! Terminal front end: typed-line input and plain-text rendering.

pub mod input;
pub mod render;

pub use input::{parse_line, TerminalCommand, HELP};
pub use render::render;
