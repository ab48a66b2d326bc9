use crate::chess::{Move, Position, VacantSquare};
use crate::source::MoveSource;
use tracing::{debug, instrument};

/// The history of a game of chess.
///
/// Positions are only ever appended, the current one being the last.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    history: Vec<Position>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Position::starting())
    }
}

impl Game {
    /// Starts a game from the given [`Position`].
    pub fn new(pos: Position) -> Self {
        Game { history: vec![pos] }
    }

    /// The current [`Position`].
    #[inline(always)]
    pub fn position(&self) -> &Position {
        &self.history[self.history.len() - 1]
    }

    /// Every [`Position`] reached so far, in order.
    #[inline(always)]
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// The number of moves played so far.
    #[inline(always)]
    pub fn plies(&self) -> usize {
        self.history.len() - 1
    }

    /// Plays a [`Move`] on the current [`Position`].
    ///
    /// The history is left untouched if the move cannot be played.
    #[instrument(level = "debug", skip(self, m), fields(%m))]
    pub fn play(&mut self, m: Move) -> Result<&Position, VacantSquare> {
        let next = self.position().play(m)?;
        debug!(ply = self.history.len(), position = %next);
        self.history.push(next);
        Ok(self.position())
    }

    /// Asks a [`MoveSource`] for a move and plays it.
    ///
    /// Returns the [`Move`] played, or `None` if the source had nothing to play.
    #[instrument(level = "debug", skip(self, source), err)]
    pub fn advance<S: MoveSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Option<Move>, VacantSquare> {
        match source.pick(self.position()) {
            None => Ok(None),
            Some(m) => {
                self.play(m)?;
                Ok(Some(m))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, Square};
    use crate::source::{MockMoveSource, Random, Scripted};
    use mockall::predicate::eq;
    use proptest::sample::Selector;
    use test_strategy::proptest;

    #[test]
    fn game_starts_from_the_starting_position() {
        let game = Game::default();
        assert_eq!(game.position(), &Position::starting());
        assert_eq!(game.history(), &[Position::starting()]);
        assert_eq!(game.plies(), 0);
    }

    #[proptest]
    fn playing_appends_to_the_history(pos: Position, s: Selector, sq: Square) {
        let mut game = Game::new(pos.clone());
        let m = Move::new(s.select(pos.iter()).square(), sq);

        let next = game.play(m)?.clone();
        assert_eq!(next, pos.play(m)?);
        assert_eq!(game.history(), &[pos, next]);
    }

    #[proptest]
    fn failing_to_play_leaves_history_untouched(
        pos: Position,
        #[filter(#pos.piece_on(#m.whence()).is_none())] m: Move,
    ) {
        let mut game = Game::new(pos.clone());
        assert_eq!(game.play(m), Err(VacantSquare(m.whence())));
        assert_eq!(game.history(), &[pos]);
    }

    #[proptest]
    fn advancing_plays_the_move_picked(pos: Position, s: Selector, sq: Square) {
        let m = Move::new(s.select(pos.iter()).square(), sq);

        let mut source = MockMoveSource::new();
        source
            .expect_pick()
            .once()
            .with(eq(pos.clone()))
            .return_const(Some(m));

        let mut game = Game::new(pos.clone());
        assert_eq!(game.advance(&mut source), Ok(Some(m)));
        assert_eq!(game.position(), &pos.play(m)?);
    }

    #[proptest]
    fn advancing_does_nothing_if_source_has_nothing_to_play(pos: Position) {
        let mut source = MockMoveSource::new();
        source.expect_pick().once().return_const(None::<Move>);

        let mut game = Game::new(pos.clone());
        assert_eq!(game.advance(&mut source), Ok(None));
        assert_eq!(game.history(), &[pos]);
    }

    #[proptest]
    fn history_is_never_rewritten(seed: u64, #[strategy(1usize..32)] n: usize) {
        let mut game = Game::default();
        let mut random = Random::new(seed);

        for _ in 0..n {
            let before = game.history().to_vec();
            game.advance(&mut random)?;
            assert_eq!(&game.history()[..before.len()], &before[..]);
        }
    }

    #[proptest]
    fn turns_alternate_throughout_the_game(seed: u64, #[strategy(1usize..32)] n: usize) {
        let mut game = Game::default();
        let mut random = Random::new(seed);

        for _ in 0..n {
            game.advance(&mut random)?;
        }

        for (i, pos) in game.history().iter().enumerate() {
            let turn = if i % 2 == 0 { Color::White } else { Color::Black };
            assert_eq!(pos.turn(), turn);
        }
    }

    #[test]
    fn scripted_game_reaches_the_expected_position() {
        let script = ["e2e4", "e7e5", "g1f3", "b8c6"].map(|m| m.parse::<Move>());
        let mut source = Scripted::from_iter(script.into_iter().flatten());
        let mut game = Game::default();

        while let Ok(Some(_)) = game.advance(&mut source) {}

        assert_eq!(game.plies(), 4);
        assert_eq!(
            game.position().to_string(),
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w"
        );
    }
}
