//! Puzzle definitions and validation of imported puzzles.

use std::str::FromStr as _;

use flippin_core::{BOARD_SIZE, Board, BoardParseError, Label};
use serde::{Deserialize, Serialize};

const fn board(rows: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Board {
    let mut cells = [[Label::L0; BOARD_SIZE]; BOARD_SIZE];
    let mut r = 0;
    while r < BOARD_SIZE {
        let mut c = 0;
        while c < BOARD_SIZE {
            cells[r][c] = match Label::try_from_value(rows[r][c]) {
                Some(label) => label,
                None => panic!("invalid built-in label"),
            };
            c += 1;
        }
        r += 1;
    }
    Board::from_rows(cells)
}

/// Title of the built-in freeplay example.
pub const FREEPLAY_EXAMPLE_TITLE: &str = "Example";

/// Start state of the built-in freeplay example.
pub const FREEPLAY_EXAMPLE_START: Board = board([
    [1, 0, 1, 1, 1],
    [1, 0, 1, 1, 1],
    [1, 1, 2, 1, 0],
    [1, 2, 1, 1, 1],
    [0, 1, 2, 1, 0],
]);

/// End state of the built-in freeplay example.
pub const FREEPLAY_EXAMPLE_END: Board = board([
    [0, 2, 0, 2, 0],
    [0, 2, 0, 2, 0],
    [0, 0, 0, 0, 0],
    [1, 0, 0, 0, 1],
    [0, 1, 1, 1, 0],
]);

/// Title of the built-in sandbox puzzle.
pub const SANDBOX_TITLE: &str = "Sandbox";

/// A puzzle with its title and validated start and end boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    title: String,
    start: Board,
    end: Board,
}

impl Puzzle {
    /// Creates a puzzle.
    ///
    /// No solvability check is performed; see [`validate_custom_puzzle`] for
    /// the checks applied to imported puzzles.
    #[must_use]
    pub fn new(title: impl Into<String>, start: Board, end: Board) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// The built-in freeplay example.
    #[must_use]
    pub fn freeplay_example() -> Self {
        Self::new(
            FREEPLAY_EXAMPLE_TITLE,
            FREEPLAY_EXAMPLE_START,
            FREEPLAY_EXAMPLE_END,
        )
    }

    /// A blank puzzle for trying out press combinations.
    #[must_use]
    pub fn sandbox() -> Self {
        Self::new(SANDBOX_TITLE, Board::new(), Board::new())
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the start board.
    #[must_use]
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Returns the end board.
    #[must_use]
    pub fn end(&self) -> &Board {
        &self.end
    }

    /// Returns `true` if the end board is reachable from the start board.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        flippin_solver::is_board_solvable(&self.start, &self.end)
    }

    pub(crate) fn with_title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    /// Returns the puzzle in its serialized form.
    #[must_use]
    pub fn to_serialized(&self) -> SerializedPuzzle {
        SerializedPuzzle {
            title: self.title.clone(),
            start: self.start.to_string(),
            end: self.end.to_string(),
        }
    }
}

impl TryFrom<&SerializedPuzzle> for Puzzle {
    type Error = PuzzleError;

    fn try_from(puzzle: &SerializedPuzzle) -> Result<Self, Self::Error> {
        let start = Board::from_str(&puzzle.start).map_err(PuzzleError::InvalidStart)?;
        let end = Board::from_str(&puzzle.end).map_err(PuzzleError::InvalidEnd)?;
        Ok(Self::new(puzzle.title.clone(), start, end))
    }
}

/// A puzzle in its storage format: a title and two board state strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedPuzzle {
    /// Display title.
    pub title: String,
    /// Start state string.
    pub start: String,
    /// End state string.
    pub end: String,
}

/// The start and end states of an imported custom puzzle.
///
/// Either state may be missing in imported data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleStates {
    /// Start state string.
    #[serde(default)]
    pub start: Option<String>,
    /// End state string.
    #[serde(default)]
    pub end: Option<String>,
}

impl PuzzleStates {
    /// Creates puzzle states from two state strings.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}

/// Reasons a puzzle is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum PuzzleError {
    /// The title is empty.
    #[display("puzzle title is empty")]
    EmptyTitle,
    /// The start state is missing.
    #[display("start state is missing")]
    MissingStart,
    /// The end state is missing.
    #[display("end state is missing")]
    MissingEnd,
    /// The start state is not a valid board state.
    #[display("invalid start state: {_0}")]
    InvalidStart(BoardParseError),
    /// The end state is not a valid board state.
    #[display("invalid end state: {_0}")]
    InvalidEnd(BoardParseError),
    /// The start and end states are the same.
    #[display("puzzle is too easy")]
    TooEasy,
    /// The end state cannot be reached from the start state.
    #[display("puzzle is not solvable")]
    Unsolvable,
}

/// Validates an imported custom puzzle.
///
/// A custom puzzle needs a non-empty title, valid start and end states that
/// differ from each other, and an end state reachable from the start state.
///
/// # Errors
///
/// Returns the first [`PuzzleError`] found, checking in the order listed above.
///
/// # Examples
///
/// ```
/// use flippin_game::{PuzzleError, PuzzleStates, validate_custom_puzzle};
///
/// let states = PuzzleStates::new("1011110111112101211101210", "0202002020000001000101110");
/// let puzzle = validate_custom_puzzle("Mine", &states)?;
/// assert_eq!(puzzle.title(), "Mine");
///
/// let states = PuzzleStates::new("1011110111112101211101210", "1011110111112101211101210");
/// assert_eq!(validate_custom_puzzle("Same", &states), Err(PuzzleError::TooEasy));
/// # Ok::<(), PuzzleError>(())
/// ```
pub fn validate_custom_puzzle(title: &str, states: &PuzzleStates) -> Result<Puzzle, PuzzleError> {
    if title.is_empty() {
        return Err(PuzzleError::EmptyTitle);
    }

    let start = states.start.as_deref().ok_or(PuzzleError::MissingStart)?;
    let start = Board::from_str(start).map_err(PuzzleError::InvalidStart)?;
    let end = states.end.as_deref().ok_or(PuzzleError::MissingEnd)?;
    let end = Board::from_str(end).map_err(PuzzleError::InvalidEnd)?;

    if start == end {
        return Err(PuzzleError::TooEasy);
    }
    if !flippin_solver::is_board_solvable(&start, &end) {
        return Err(PuzzleError::Unsolvable);
    }

    Ok(Puzzle::new(title, start, end))
}
