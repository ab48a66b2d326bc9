use crate::chess::{Move, Position};
use crate::source::MoveSource;
use std::collections::VecDeque;

/// Plays a predetermined sequence of moves, regardless of the position.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Scripted(VecDeque<Move>);

impl FromIterator<Move> for Scripted {
    fn from_iter<I: IntoIterator<Item = Move>>(moves: I) -> Self {
        Scripted(moves.into_iter().collect())
    }
}

impl MoveSource for Scripted {
    fn pick(&mut self, _: &Position) -> Option<Move> {
        self.0.pop_front()
    }
}
