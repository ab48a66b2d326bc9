use crate::chess::{Color, File, Rank, Role, Square};
use std::fmt::{self, Formatter, Write};

/// A chess [piece][`Role`] of a certain [`Color`] standing on a [`Square`].
///
/// Pieces are plain values: moving one yields a new [`Piece`] rather than mutating the old one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    color: Color,
    role: Role,
    square: Square,
    moved: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that hasn't moved yet.
    #[inline(always)]
    pub fn new(role: Role, color: Color, square: Square) -> Self {
        Piece {
            color,
            role,
            square,
            moved: false,
        }
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The [`Square`] this piece stands on.
    #[inline(always)]
    pub fn square(&self) -> Square {
        self.square
    }

    /// The [`File`] this piece stands on.
    #[inline(always)]
    pub fn file(&self) -> File {
        self.square.file()
    }

    /// The [`Rank`] this piece stands on.
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        self.square.rank()
    }

    /// Whether this piece has moved since the start of the game.
    #[inline(always)]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// A copy of this piece after moving to another [`Square`].
    #[inline(always)]
    pub fn relocate(&self, whither: Square) -> Self {
        Piece {
            square: whither,
            moved: true,
            ..*self
        }
    }
}

/// Prints the piece's letter in FEN notation, uppercase for white.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::White => f.write_char(self.role.letter().to_ascii_uppercase()),
            Color::Black => f.write_char(self.role.letter()),
        }
    }
}
