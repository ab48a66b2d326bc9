use crate::util::Integer;

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    const VALUE: [i16; 6] = [100, 300, 300, 500, 900, 0];

    // The pawn needs the text presentation selector, otherwise some terminals draw it as emoji.
    const GLYPH: [&'static str; 6] = ["♟\u{FE0E}", "♞", "♝", "♜", "♛", "♚"];
    const OUTLINE: [&'static str; 6] = ["♙", "♘", "♗", "♖", "♕", "♔"];

    /// This role's lowercase letter in algebraic notation.
    #[inline(always)]
    pub fn letter(&self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    /// This role's material value in centipawns.
    #[inline(always)]
    pub fn value(&self) -> i16 {
        Self::VALUE[self.get() as usize]
    }

    /// This role's solid Unicode glyph.
    #[inline(always)]
    pub fn glyph(&self) -> &'static str {
        Self::GLYPH[self.get() as usize]
    }

    /// This role's outlined Unicode glyph.
    #[inline(always)]
    pub fn outline(&self) -> &'static str {
        Self::OUTLINE[self.get() as usize]
    }
}

unsafe impl Integer for Role {
    const MIN: i8 = Role::Pawn as _;
    const MAX: i8 = Role::King as _;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn role_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Role>>(), size_of::<Role>());
    }

    #[test]
    fn king_has_no_material_value() {
        assert_eq!(Role::King.value(), 0);
    }

    #[proptest]
    fn material_value_never_exceeds_the_queen(r: Role) {
        assert!(r.value() <= Role::Queen.value());
    }

    #[proptest]
    fn every_role_has_distinct_glyphs(a: Role, #[filter(#a != #b)] b: Role) {
        assert_ne!(a.glyph(), b.glyph());
        assert_ne!(a.outline(), b.outline());
    }

    #[proptest]
    fn outline_glyph_is_a_single_char(r: Role) {
        assert_eq!(r.outline().chars().count(), 1);
    }

    #[proptest]
    fn solid_glyph_is_a_symbol_optionally_followed_by_the_text_selector(r: Role) {
        let mut chars = r.glyph().chars();
        assert_eq!(chars.next().map(char::len_utf8), Some(3));
        assert!(chars.all(|c| c == '\u{FE0E}'));
    }

    #[test]
    fn pawn_glyph_is_forced_to_text_presentation() {
        assert_eq!(Role::Pawn.glyph(), "\u{265F}\u{FE0E}");
    }
}
