use crate::chess::{File, Move, Piece, Position, Rank, Square};
use crate::source::MoveSource;
use crate::util::Integer;
use arrayvec::ArrayVec;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Moves a random piece to a random square.
///
/// The piece is drawn uniformly from the whole board, regardless of whose turn it is, and the
/// destination uniformly from files a through g. No regard is paid to the rules of chess.
#[derive(Debug, Clone)]
pub struct Random(StdRng);

impl Random {
    /// The last file a piece may be sent to.
    pub const LAST_FILE: File = File::G;

    /// A generator that always produces the same sequence of moves for a given seed.
    pub fn new(seed: u64) -> Self {
        Random(StdRng::seed_from_u64(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Random(StdRng::from_entropy())
    }
}

impl MoveSource for Random {
    fn pick(&mut self, pos: &Position) -> Option<Move> {
        let pieces: ArrayVec<&Piece, 32> = pos.iter().collect();
        let whence = pieces.choose(&mut self.0)?.square();

        let file = File::new(self.0.gen_range(File::MIN..=Self::LAST_FILE.get()));
        let rank = Rank::new(self.0.gen_range(Rank::MIN..=Rank::MAX));

        Some(Move::new(whence, Square::new(file, rank)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Color;
    use test_strategy::proptest;

    #[proptest]
    fn random_moves_are_stable_for_a_given_seed(pos: Position, seed: u64) {
        assert_eq!(Random::new(seed).pick(&pos), Random::new(seed).pick(&pos));
    }

    #[proptest]
    fn random_moves_a_piece_on_the_board(
        #[filter(#pos.len() > 0)] pos: Position,
        seed: u64,
    ) {
        let m = Random::new(seed).pick(&pos).unwrap();
        assert!(pos.piece_on(m.whence()).is_some());
    }

    #[proptest]
    fn random_never_sends_pieces_to_the_h_file(pos: Position, seed: u64) {
        let mut random = Random::new(seed);

        for _ in 0..64 {
            if let Some(m) = random.pick(&pos) {
                assert_ne!(m.whither().file(), File::H);
            }
        }
    }

    #[proptest]
    fn random_moves_can_be_played(pos: Position, seed: u64) {
        if let Some(m) = Random::new(seed).pick(&pos) {
            assert_eq!(pos.play(m)?.turn(), !pos.turn());
        }
    }

    #[proptest]
    fn random_picks_pieces_of_both_colors_regardless_of_the_turn(seed: u64) {
        let pos = Position::starting();
        let mut random = Random::new(seed);
        let mut seen = [false; 2];

        for _ in 0..256 {
            if let Some(m) = random.pick(&pos) {
                if let Some(p) = pos.piece_on(m.whence()) {
                    seen[p.color() as usize] = true;
                }
            }
        }

        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn random_only_picks_pieces_still_on_the_board() {
        let mut pos = Position::starting();

        loop {
            let victim = match pos.by_color(Color::Black).next().copied() {
                Some(p) => p,
                None => break,
            };

            let hunter = pos.by_color(Color::White).next().copied().unwrap();
            pos = pos.make(&hunter, victim.square()).unwrap();
        }

        let mut random = Random::new(0);

        for _ in 0..256 {
            let m = random.pick(&pos).unwrap();
            assert_eq!(pos.piece_on(m.whence()).map(Piece::color), Some(Color::White));
        }
    }

    #[proptest]
    fn random_eventually_reaches_every_destination_up_to_the_g_file(seed: u64) {
        let pos = Position::starting();
        let mut random = Random::new(seed);
        let mut seen = [false; 64];

        for _ in 0..4096 {
            if let Some(m) = random.pick(&pos) {
                seen[m.whither().get() as usize] = true;
            }
        }

        for sq in Square::iter() {
            assert_eq!(seen[sq.get() as usize], sq.file() <= Random::LAST_FILE);
        }
    }
}
