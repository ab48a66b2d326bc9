use crate::chess::Perspective;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::str::FromStr;

/// A column on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum File {
    #[display(fmt = "a")]
    A,
    #[display(fmt = "b")]
    B,
    #[display(fmt = "c")]
    C,
    #[display(fmt = "d")]
    D,
    #[display(fmt = "e")]
    E,
    #[display(fmt = "f")]
    F,
    #[display(fmt = "g")]
    G,
    #[display(fmt = "h")]
    H,
}

impl File {
    /// Constructs [`File`] from its ordinal, where `1` is the a-file.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not in the range `(1..=8)`.
    #[inline(always)]
    #[track_caller]
    pub fn from_ordinal(n: u8) -> Self {
        match i8::try_from(n) {
            Ok(n) => Self::new(n - 1),
            Err(_) => panic!("file ordinal `{n}` is out of range `(1..=8)`"),
        }
    }

    /// This file's ordinal, where `1` is the a-file.
    #[inline(always)]
    pub fn ordinal(&self) -> u8 {
        self.get() as u8 + 1
    }
}

unsafe impl Integer for File {
    const MIN: i8 = File::A as _;
    const MAX: i8 = File::H as _;
}

impl Perspective for File {
    /// Horizontally mirrors this file.
    #[inline(always)]
    fn flip(&self) -> Self {
        Self::new(self.get() ^ Self::MAX)
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    fmt = "failed to parse file, expected letter in the range `({}..={})`",
    "File::A",
    "File::H"
)]
pub struct ParseFileError;

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(File::A),
            "b" => Ok(File::B),
            "c" => Ok(File::C),
            "d" => Ok(File::D),
            "e" => Ok(File::E),
            "f" => Ok(File::F),
            "g" => Ok(File::G),
            "h" => Ok(File::H),
            _ => Err(ParseFileError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn file_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<File>>(), size_of::<File>());
    }

    #[proptest]
    fn flipping_file_returns_its_complement(f: File) {
        assert_eq!(f.flip().get(), File::MAX - f.get());
    }

    #[proptest]
    fn file_can_be_constructed_from_its_ordinal(f: File) {
        assert_eq!(File::from_ordinal(f.ordinal()), f);
    }

    #[test]
    fn first_ordinal_is_the_a_file() {
        assert_eq!(File::from_ordinal(1), File::A);
        assert_eq!(File::from_ordinal(8), File::H);
    }

    #[proptest]
    #[should_panic]
    fn file_construction_panics_if_ordinal_out_of_range(
        #[filter(!(1..=8).contains(&#n))] n: u8,
    ) {
        File::from_ordinal(n);
    }

    #[proptest]
    fn parsing_printed_file_is_an_identity(f: File) {
        assert_eq!(f.to_string().parse(), Ok(f));
    }

    #[proptest]
    fn parsing_file_fails_if_not_lower_case_letter_between_a_and_h(
        #[filter(!('a'..='h').contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<File>(), Err(ParseFileError));
    }

    #[proptest]
    fn parsing_file_fails_if_length_not_one(#[filter(#s.len() != 1)] s: String) {
        assert_eq!(s.parse::<File>(), Err(ParseFileError));
    }
}
