use crate::chess::{Move, Position};

mod random;
mod scripted;

pub use random::*;
pub use scripted::*;

/// Trait for types that pick moves to play.
#[cfg_attr(test, mockall::automock)]
pub trait MoveSource {
    /// The next [`Move`] to play in the given [`Position`], or `None` if there's nothing to play.
    fn pick(&mut self, pos: &Position) -> Option<Move>;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    #[inline(always)]
    fn pick(&mut self, pos: &Position) -> Option<Move> {
        (**self).pick(pos)
    }
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    #[inline(always)]
    fn pick(&mut self, pos: &Position) -> Option<Move> {
        (**self).pick(pos)
    }
}
