use crate::chess::{Color, Piece};
use crate::render::{Shade, Style};
use std::fmt::{self, Formatter};

/// Draws the board without any escape sequences.
///
/// White pieces are drawn with outlined glyphs and black pieces with solid glyphs.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Plain;

impl Style for Plain {
    fn cell(&self, f: &mut Formatter<'_>, _: Shade, piece: Option<&Piece>) -> fmt::Result {
        match piece {
            None => f.write_str("   "),
            Some(p) => match p.color() {
                Color::White => write!(f, " {} ", p.role().outline()),
                Color::Black => write!(f, " {} ", p.role().glyph()),
            },
        }
    }
}
