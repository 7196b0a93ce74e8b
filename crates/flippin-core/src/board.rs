//! The 5×5 board and its state-string format.
//!
//! A board is serialized as exactly 25 characters in row-major order, each one
//! of `0`, `1`, or `2`, with no separators. [`is_valid_state`] checks this
//! format, [`Board::from_str`] parses it, and the [`Display`] implementation
//! produces it.
//!
//! # Examples
//!
//! ```
//! use flippin_core::{Board, Label, Position};
//!
//! let board: Board = "1011110111112101211101210".parse()?;
//! assert_eq!(board[Position::new(0, 1)], Label::L0);
//! assert_eq!(board.rows()[2], [1, 1, 2, 1, 0].map(Label::from_value));
//! assert_eq!(board.to_string(), "1011110111112101211101210");
//! # Ok::<(), flippin_core::BoardParseError>(())
//! ```

use std::{
    fmt::{self, Display, Write as _},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{BOARD_SIZE, CELL_COUNT, Label, Position};

/// Returns `true` if `state` is a valid serialized board.
///
/// The string must contain exactly 25 characters, each in `0`-`2`.
///
/// # Examples
///
/// ```
/// use flippin_core::is_valid_state;
///
/// assert!(is_valid_state("1011110111112101211101210"));
/// assert!(!is_valid_state("12345"));
/// assert!(!is_valid_state("1011110111112101211101213"));
/// ```
#[must_use]
pub fn is_valid_state(state: &str) -> bool {
    state.chars().count() == CELL_COUNT && state.chars().all(|ch| Label::from_char(ch).is_some())
}

/// Errors that can occur when parsing a board from its state string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The string did not contain exactly 25 characters.
    #[display("invalid board state length: {len}, expected 25")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character was not a valid label.
    #[display("invalid label {ch:?} at index {index}")]
    InvalidLabel {
        /// Row-major index of the character.
        index: usize,
        /// The rejected character.
        ch: char,
    },
}

/// A 5×5 grid of tile labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Label; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with every tile set to [`Label::L0`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from its rows.
    #[must_use]
    pub const fn from_rows(cells: [[Label; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the rows of the board.
    #[must_use]
    pub const fn rows(&self) -> &[[Label; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the label at a position.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Label {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Sets the label at a position.
    #[inline]
    pub fn set(&mut self, pos: Position, label: Label) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = label;
    }

    /// Returns all labels in row-major order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Returns the labels as integers in row-major order.
    #[must_use]
    pub fn to_vector(&self) -> [i64; CELL_COUNT] {
        let mut vector = [0; CELL_COUNT];
        for (slot, label) in vector.iter_mut().zip(self.labels()) {
            *slot = i64::from(label);
        }
        vector
    }

    /// Presses the tile at `pos`.
    ///
    /// The tile and its in-bounds orthogonal neighbours advance to their next label.
    ///
    /// # Examples
    ///
    /// ```
    /// use flippin_core::{Board, Position};
    ///
    /// let mut board = Board::new();
    /// board.toggle(Position::new(4, 4));
    /// assert_eq!(board.to_string(), "0000000000000000000100011");
    /// ```
    pub fn toggle(&mut self, pos: Position) {
        for target in pos.toggle_area() {
            self.set(target, self.get(target).next());
        }
    }

    /// Presses the tile at signed coordinates.
    ///
    /// Returns `false` and leaves the board unchanged when the coordinates are
    /// outside the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use flippin_core::Board;
    ///
    /// let mut board = Board::new();
    /// assert!(!board.toggle_at(-1, -1));
    /// assert!(!board.toggle_at(5, 5));
    /// assert_eq!(board, Board::new());
    /// assert!(board.toggle_at(2, 2));
    /// ```
    pub fn toggle_at(&mut self, row: i32, col: i32) -> bool {
        let Some(pos) = Position::try_new(row, col) else {
            return false;
        };
        self.toggle(pos);
        true
    }
}

impl Index<Position> for Board {
    type Output = Label;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CELL_COUNT {
            return Err(BoardParseError::InvalidLength { len });
        }

        let mut board = Self::new();
        for ((index, ch), pos) in s.chars().enumerate().zip(Position::ALL) {
            let label = Label::from_char(ch).ok_or(BoardParseError::InvalidLabel { index, ch })?;
            board[pos] = label;
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in self.labels() {
            f.write_char(char::from(b'0' + label.value()))?;
        }
        Ok(())
    }
}
