use crate::{io::Sink, view::View};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::Move;
use lib::game::Game;
use lib::source::{MoveSource, Random, Scripted};
use std::io::stdout;
use tracing::{info, instrument};

/// Plays moves from the starting position, drawing the board after each one.
///
/// Moves are not checked against the rules of chess.
#[derive(Debug, Parser)]
pub struct Play {
    /// How many random moves to play, ignored if moves are given.
    #[clap(short = 'n', long, default_value = "1")]
    moves: usize,

    /// The seed of the random moves, drawn from entropy if omitted.
    #[clap(short, long)]
    seed: Option<u64>,

    #[clap(flatten)]
    view: View,

    /// Moves to play in coordinate notation, such as `e2e4`.
    script: Vec<Move>,
}

impl Play {
    fn source(&self) -> (Box<dyn MoveSource>, usize) {
        if self.script.is_empty() {
            let random = self.seed.map_or_else(Random::default, Random::new);
            (Box::new(random), self.moves)
        } else {
            let script = Scripted::from_iter(self.script.iter().copied());
            (Box::new(script), self.script.len())
        }
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let (mut source, limit) = self.source();
        let mut game = Game::default();
        let mut sink = Sink::new(stdout().lock());

        sink.send(self.view.draw(game.position()))?;

        for _ in 0..limit {
            let m = match game.advance(&mut source).context("failed to play move")? {
                Some(m) => m,
                None => break,
            };

            let pos = game.position();

            info!(
                ply = game.plies(),
                %m,
                position = %pos,
                balance = pos.balance(),
            );

            sink.send(self.view.draw(pos))?;
        }

        sink.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::Position;

    fn play(args: &[&str]) -> Game {
        let play = Play::try_parse_from(["play"].iter().chain(args)).unwrap();
        let (mut source, limit) = play.source();
        let mut game = Game::default();

        for _ in 0..limit {
            if game.advance(&mut source).unwrap().is_none() {
                break;
            }
        }

        game
    }

    #[test]
    fn scripted_moves_take_precedence_over_random_moves() {
        let game = play(&["-n", "10", "e2e4", "e7e5"]);
        assert_eq!(game.plies(), 2);
        assert_eq!(
            game.position().to_string(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w"
        );
    }

    #[test]
    fn random_moves_are_reproducible_with_a_seed() {
        let a = play(&["-n", "8", "-s", "42"]);
        let b = play(&["-n", "8", "-s", "42"]);
        assert_eq!(a.plies(), 8);
        assert_eq!(a, b);
    }

    #[test]
    fn one_random_move_is_played_by_default() {
        let game = play(&[]);
        assert_eq!(game.plies(), 1);
        assert_ne!(game.position(), &Position::starting());
    }
}
