use std::fmt::{self, Display, Write as _};

use flippin_core::{Board, CELL_COUNT, Position};

/// Per-tile press counts that turn one board into another.
///
/// Each count is in the range 0-2, since three presses of a tile cancel out.
/// The [`cost`](Solution::cost) of a solution is its total number of presses.
///
/// # Examples
///
/// ```
/// use flippin_core::Board;
/// use flippin_solver::minimal_solution;
///
/// let start: Board = "1011110111112101211101210".parse()?;
/// let end: Board = "0202002020000001000101110".parse()?;
///
/// let solution = minimal_solution(&start, &end).expect("puzzle is solvable");
/// assert_eq!(solution.cost(), 10);
/// assert_eq!(solution.apply_to(&start), end);
/// # Ok::<(), flippin_core::BoardParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    counts: [u8; CELL_COUNT],
}

impl Solution {
    /// Builds a solution from a vector already reduced into `[0, 3)`.
    ///
    /// # Panics
    ///
    /// Panics if the vector does not have 25 entries or an entry is out of range.
    pub(crate) fn from_reduced(reduced: &[i64]) -> Self {
        assert_eq!(reduced.len(), CELL_COUNT, "solution vector length");
        let mut counts = [0; CELL_COUNT];
        for (count, x) in counts.iter_mut().zip(reduced) {
            *count = u8::try_from(*x)
                .ok()
                .filter(|count| *count < 3)
                .unwrap_or_else(|| panic!("unreduced press count: {x}"));
        }
        Self { counts }
    }

    /// Returns the press counts in row-major order.
    #[must_use]
    pub fn counts(&self) -> &[u8; CELL_COUNT] {
        &self.counts
    }

    /// Returns the number of presses required at a position.
    #[must_use]
    pub fn count_at(&self, pos: Position) -> u8 {
        self.counts[pos.index()]
    }

    /// Returns the total number of presses.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.counts.iter().copied().map(u32::from).sum()
    }

    /// Returns `true` if no presses are needed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Returns the positions that need pressing, with their counts, in row-major order.
    pub fn presses(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        Position::ALL
            .into_iter()
            .zip(self.counts)
            .filter(|(_, count)| *count > 0)
    }

    /// Returns the board obtained by performing every press on `board`.
    #[must_use]
    pub fn apply_to(&self, board: &Board) -> Board {
        let mut board = *board;
        for (pos, count) in self.presses() {
            for _ in 0..count {
                board.toggle(pos);
            }
        }
        board
    }

    /// Returns the press counts as a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.counts.to_vec()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in self.counts {
            f.write_char(char::from(b'0' + count))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reduced_and_accessors() {
        let mut reduced = [0; CELL_COUNT];
        reduced[0] = 2;
        reduced[6] = 1;
        let solution = Solution::from_reduced(&reduced);

        assert_eq!(solution.cost(), 3);
        assert!(!solution.is_empty());
        assert_eq!(solution.count_at(Position::new(1, 1)), 1);
        assert_eq!(
            solution.presses().collect::<Vec<_>>(),
            [(Position::new(0, 0), 2), (Position::new(1, 1), 1)]
        );
        assert_eq!(solution.to_string(), "2000001000000000000000000");
        assert!(Solution::default().is_empty());
    }

    #[test]
    fn test_apply_to() {
        let mut reduced = [0; CELL_COUNT];
        reduced[0] = 1;
        let solution = Solution::from_reduced(&reduced);
        let board = solution.apply_to(&Board::new());
        assert_eq!(board.to_string(), "1100010000000000000000000");
    }

    #[test]
    #[should_panic(expected = "unreduced press count: 3")]
    fn test_from_reduced_rejects_unreduced() {
        let mut reduced = [0; CELL_COUNT];
        reduced[3] = 3;
        let _ = Solution::from_reduced(&reduced);
    }
}
