use crate::chess::Perspective;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::str::FromStr;

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    /// Constructs [`Rank`] from its ordinal.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not in the range `(1..=8)`.
    #[inline(always)]
    #[track_caller]
    pub fn from_ordinal(n: u8) -> Self {
        match i8::try_from(n) {
            Ok(n) => Self::new(n - 1),
            Err(_) => panic!("rank ordinal `{n}` is out of range `(1..=8)`"),
        }
    }

    /// This rank's ordinal.
    #[inline(always)]
    pub fn ordinal(&self) -> u8 {
        self.get() as u8 + 1
    }
}

unsafe impl Integer for Rank {
    const MIN: i8 = Rank::First as _;
    const MAX: i8 = Rank::Eighth as _;
}

impl Perspective for Rank {
    /// This rank from the opponent's perspective.
    #[inline(always)]
    fn flip(&self) -> Self {
        Self::new(self.get() ^ Self::MAX)
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    fmt = "failed to parse rank, expected digit in the range `({}..={})`",
    "Rank::First",
    "Rank::Eighth"
)]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            _ => Err(ParseRankError),
        }
    }
}
