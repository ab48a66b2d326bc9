use crate::chess::{Color, File, Perspective, Position, Rank};
use crate::render::{Shade, Style, CELL_WIDTH};
use crate::util::Integer;
use std::fmt::{self, Formatter};

/// A printable diagram of a [`Position`], as seen by one side.
///
/// From white's perspective files run from a to h left to right and ranks from 8 to 1 top to
/// bottom, black's perspective reverses both.
#[derive(Debug)]
pub struct Diagram<'a, S: ?Sized> {
    pos: &'a Position,
    perspective: Color,
    style: &'a S,
}

impl<'a, S: Style + ?Sized> Diagram<'a, S> {
    /// Constructs the [`Diagram`] of a [`Position`].
    #[inline(always)]
    pub fn new(pos: &'a Position, perspective: Color, style: &'a S) -> Self {
        Diagram {
            pos,
            perspective,
            style,
        }
    }

    /// The [`Rank`] shown on the given row, counted from the top.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range `0..8`.
    #[track_caller]
    #[inline(always)]
    pub fn rank(&self, row: i8) -> Rank {
        Rank::new(Rank::MAX - row).perspective(self.perspective)
    }

    /// The [`File`] shown on the given column, counted from the left.
    ///
    /// # Panics
    ///
    /// Panics if `column` is not in the range `0..8`.
    #[track_caller]
    #[inline(always)]
    pub fn file(&self, column: i8) -> File {
        File::new(column).perspective(self.perspective)
    }

    fn border(f: &mut Formatter<'_>, left: char, right: char) -> fmt::Result {
        write!(f, " {left}")?;
        for _ in 0..8 * CELL_WIDTH {
            f.write_str("─")?;
        }

        writeln!(f, "{right}")
    }
}

impl<S: Style + ?Sized> fmt::Display for Diagram<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::border(f, '┌', '┐')?;

        for row in 0..8 {
            let rank = self.rank(row);
            write!(f, "{rank}│")?;

            for column in 0..8 {
                let piece = self.pos.piece_at(self.file(column), rank);
                self.style.cell(f, Shade::of(row, column), piece)?;
            }

            writeln!(f, "│")?;
        }

        Self::border(f, '└', '┘')?;

        f.write_str("  ")?;
        for column in 0..8 {
            write!(f, " {} ", self.file(column))?;
        }

        writeln!(f)
    }
}
