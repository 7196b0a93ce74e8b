//! Board positions and the toggle neighbourhood.

use std::fmt::{self, Display};

use crate::{BOARD_SIZE, CELL_COUNT};

/// Offsets (row, column) touched by a press, starting with the pressed tile itself.
const TOGGLE_OFFSETS: [(i8, i8); 5] = [(0, 0), (1, 0), (0, 1), (-1, 0), (0, -1)];

/// A position on the 5×5 board.
///
/// Positions are ordered row-major, which is also the order of tiles in the
/// 25-character state string.
///
/// # Examples
///
/// ```
/// use flippin_core::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.index(), 8);
/// assert_eq!(Position::from_index(8), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All positions in row-major order.
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { row: 0, col: 0 }; CELL_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELL_COUNT {
            all[i] = Self {
                row: (i / BOARD_SIZE) as u8,
                col: (i % BOARD_SIZE) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-4.
    #[must_use]
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            usize::from(row) < BOARD_SIZE && usize::from(col) < BOARD_SIZE,
            "Position out of range: ({row}, {col})"
        );
        Self { row, col }
    }

    /// Creates a position from signed coordinates, returning `None` when they
    /// fall outside the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use flippin_core::Position;
    ///
    /// assert_eq!(Position::try_new(4, 0), Some(Position::new(4, 0)));
    /// assert_eq!(Position::try_new(-1, 0), None);
    /// assert_eq!(Position::try_new(0, 5), None);
    /// ```
    #[must_use]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        (usize::from(row) < BOARD_SIZE && usize::from(col) < BOARD_SIZE)
            .then_some(Self { row, col })
    }

    /// Creates a position from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than 25.
    #[must_use]
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "Position index out of range: {index}");
        Self::ALL[index]
    }

    /// Returns the row (0-4).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-4).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-24).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Returns the positions changed by pressing this position.
    ///
    /// The first item is the position itself, followed by whichever of its
    /// down, right, up, and left neighbours exist. There is no wraparound, so
    /// corners yield 3 positions, edges 4, and interior tiles 5.
    ///
    /// # Examples
    ///
    /// ```
    /// use flippin_core::Position;
    ///
    /// let area: Vec<_> = Position::new(0, 0).toggle_area().collect();
    /// assert_eq!(area, [Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)]);
    /// assert_eq!(Position::new(2, 2).toggle_area().count(), 5);
    /// ```
    pub fn toggle_area(self) -> impl Iterator<Item = Self> {
        TOGGLE_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            Self::try_new(
                i32::from(self.row) + i32::from(dr),
                i32::from(self.col) + i32::from(dc),
            )
        })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), pos);
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[5], Position::new(1, 0));
        assert_eq!(Position::ALL[24], Position::new(4, 4));
    }

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(Position::try_new(0, 0), Some(Position::new(0, 0)));
        assert_eq!(Position::try_new(4, 4), Some(Position::new(4, 4)));
        assert_eq!(Position::try_new(-1, -1), None);
        assert_eq!(Position::try_new(5, 5), None);
        assert_eq!(Position::try_new(2, 300), None);
    }

    #[test]
    fn test_toggle_area_sizes() {
        for pos in Position::ALL {
            let on_row_edge = pos.row() == 0 || pos.row() == 4;
            let on_col_edge = pos.col() == 0 || pos.col() == 4;
            let expected = match (on_row_edge, on_col_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 4,
                (false, false) => 5,
            };
            assert_eq!(pos.toggle_area().count(), expected, "at {pos}");
        }
    }

    #[test]
    fn test_toggle_area_is_symmetric() {
        // pressing a affects b exactly when pressing b affects a
        for a in Position::ALL {
            for b in a.toggle_area() {
                assert!(b.toggle_area().any(|p| p == a), "{a} -> {b}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "Position out of range: (5, 0)")]
    fn test_new_out_of_range_panics() {
        let _ = Position::new(5, 0);
    }
}
