use crate::chess::{Color, Position};

mod ansi;
mod diagram;
mod plain;
mod shade;
mod style;

pub use ansi::*;
pub use diagram::*;
pub use plain::*;
pub use shade::*;
pub use style::*;

/// Renders a [`Position`] into a text buffer, as seen by one side.
///
/// The buffer is meant to be flushed to a display in one go.
pub fn render<S: Style + ?Sized>(pos: &Position, perspective: Color, style: &S) -> String {
    Diagram::new(pos, perspective, style).to_string()
}
