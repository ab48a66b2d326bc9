use crate::chess::Piece;
use crate::render::Shade;
use std::fmt::{self, Formatter};

/// The width of a rendered cell, in columns.
pub const CELL_WIDTH: usize = 3;

/// Trait for types that know how to draw the cells of a board.
pub trait Style {
    /// Writes one cell, [`CELL_WIDTH`] columns wide, optionally holding a [`Piece`].
    fn cell(&self, f: &mut Formatter<'_>, shade: Shade, piece: Option<&Piece>) -> fmt::Result;
}

impl<S: Style + ?Sized> Style for &S {
    #[inline(always)]
    fn cell(&self, f: &mut Formatter<'_>, shade: Shade, piece: Option<&Piece>) -> fmt::Result {
        (**self).cell(f, shade, piece)
    }
}

impl<S: Style + ?Sized> Style for Box<S> {
    #[inline(always)]
    fn cell(&self, f: &mut Formatter<'_>, shade: Shade, piece: Option<&Piece>) -> fmt::Result {
        (**self).cell(f, shade, piece)
    }
}
