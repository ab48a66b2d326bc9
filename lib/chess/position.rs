use crate::chess::{Color, File, Move, Piece, Rank, Role, Square};
use crate::util::Integer;
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// Represents a [`Piece`] that is not part of a given [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "piece `{}` on `{}` is not part of this position", _0, "_0.square()")]
pub struct ForeignPiece(#[error(not(source))] pub Piece);

/// Represents an attempt to move from a [`Square`] that holds no [`Piece`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "there is no piece on square `{}`", _0)]
pub struct VacantSquare(#[error(not(source))] pub Square);

/// An immutable snapshot of the chess board.
///
/// This type holds at most one [`Piece`] per [`Square`], but otherwise does not validate whether
/// the placement it holds is reachable according to the rules of chess.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    turn: Color,
    pieces: ArrayVec<Piece, 32>,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    /// The standard starting position, with white to move.
    pub fn starting() -> Self {
        use Role::*;

        const BACK_RANK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut pieces = ArrayVec::new();

        for (color, back, front) in [
            (Color::White, Rank::First, Rank::Second),
            (Color::Black, Rank::Eighth, Rank::Seventh),
        ] {
            for (file, role) in File::iter().zip(BACK_RANK) {
                pieces.push(Piece::new(role, color, Square::new(file, back)));
            }

            for file in File::iter() {
                pieces.push(Piece::new(Pawn, color, Square::new(file, front)));
            }
        }

        Position {
            turn: Color::White,
            pieces,
        }
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The number of pieces on the board.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether the board holds no pieces at all.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// An iterator over all pieces on the board.
    #[inline(always)]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Piece> + '_ {
        self.pieces.iter()
    }

    /// An iterator over the pieces of one [`Color`].
    #[inline(always)]
    pub fn by_color(&self, side: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.iter().filter(move |p| p.color() == side)
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<&Piece> {
        self.iter().find(|p| p.square() == sq)
    }

    /// The [`Piece`] on the given [`File`] and [`Rank`], if any.
    #[inline(always)]
    pub fn piece_at(&self, f: File, r: Rank) -> Option<&Piece> {
        self.piece_on(Square::new(f, r))
    }

    /// The sum of the material values of the pieces of one [`Color`].
    pub fn material(&self, side: Color) -> i16 {
        self.by_color(side).map(|p| p.role().value()).sum()
    }

    /// White's material minus black's material.
    pub fn balance(&self) -> i16 {
        self.material(Color::White) - self.material(Color::Black)
    }

    /// Moves a [`Piece`] of this position to another [`Square`], returning the next position.
    ///
    /// Whatever stands on the destination square is captured, regardless of its color.
    /// The turn passes to the opponent and this position is left untouched.
    pub fn make(&self, piece: &Piece, whither: Square) -> Result<Self, ForeignPiece> {
        if self.piece_on(piece.square()) != Some(piece) {
            return Err(ForeignPiece(*piece));
        }

        let whence = piece.square();
        let pieces = self
            .iter()
            .filter_map(|p| match p.square() {
                sq if sq == whence => Some(p.relocate(whither)),
                sq if sq == whither => None,
                _ => Some(*p),
            })
            .collect();

        Ok(Position {
            turn: !self.turn,
            pieces,
        })
    }

    /// Plays a [`Move`], returning the next position.
    ///
    /// See [`Position::make`].
    pub fn play(&self, m: Move) -> Result<Self, VacantSquare> {
        match self.piece_on(m.whence()) {
            None => Err(VacantSquare(m.whence())),
            Some(p) => self.make(p, m.whither()).map_err(|_| VacantSquare(m.whence())),
        }
    }
}

/// Prints the piece placement in FEN notation followed by the side to move.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut skip = 0;
            for file in File::iter() {
                match self.piece_at(file, rank) {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{skip}")?;
                            skip = 0;
                        }

                        write!(f, "{p}")?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{skip}")?;
            }

            if rank != Rank::First {
                f.write_char('/')?;
            }
        }

        match self.turn {
            Color::White => f.write_str(" w"),
            Color::Black => f.write_str(" b"),
        }
    }
}

// Arbitrary positions are reached by playing random moves from the starting position,
// which keeps the one-piece-per-square invariant without having to filter.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Position {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Position>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*, sample::Selector};

        vec(any::<(Selector, Square)>(), 0..64)
            .prop_map(|moves| {
                moves
                    .into_iter()
                    .fold(Position::starting(), |pos, (selector, whither)| {
                        let piece = *selector.select(pos.iter());
                        pos.make(&piece, whither).unwrap()
                    })
            })
            .boxed()
    }
}
