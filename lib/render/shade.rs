use derive_more::Display;

/// The shade of a square on the rendered board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Shade {
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

impl Shade {
    /// The shade of the cell at the given row and column, counted from the top-left corner.
    #[inline(always)]
    pub fn of(row: i8, column: i8) -> Self {
        if (row + column) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn top_left_corner_is_light() {
        assert_eq!(Shade::of(0, 0), Shade::Light);
    }

    #[proptest]
    fn neighboring_cells_have_opposite_shades(
        #[strategy(0i8..8)] row: i8,
        #[strategy(0i8..7)] column: i8,
    ) {
        assert_ne!(Shade::of(row, column), Shade::of(row, column + 1));
        assert_ne!(Shade::of(column, row), Shade::of(column + 1, row));
    }

    #[proptest]
    fn diagonal_cells_have_the_same_shade(
        #[strategy(0i8..7)] row: i8,
        #[strategy(0i8..7)] column: i8,
    ) {
        assert_eq!(Shade::of(row, column), Shade::of(row + 1, column + 1));
    }
}
