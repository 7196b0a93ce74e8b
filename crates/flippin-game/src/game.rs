use flippin_core::{Board, Position, is_valid_state};
use flippin_solver::Solution;

use crate::Puzzle;

/// A Flippin game session.
///
/// Tracks the board being played, the puzzle's start and end boards, and
/// counters for presses, resets, and hints.
///
/// # Example
///
/// ```
/// use flippin_game::{Game, Puzzle};
///
/// let mut game = Game::new("", &Puzzle::freeplay_example());
/// assert_eq!(game.serialize_current(), "1011110111112101211101210");
///
/// assert!(game.update(0, 0));
/// assert!(!game.update(5, 5));
/// assert_eq!(game.move_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    title: String,
    start: Board,
    current: Board,
    end: Board,
    move_count: u32,
    reset_count: u32,
    hint_count: u32,
}

impl Game {
    /// Creates a game for `puzzle`, resuming from `current_state` if possible.
    ///
    /// A `current_state` that is not a valid state string (for example an
    /// empty string) is ignored and the game starts from the puzzle's start
    /// board.
    #[must_use]
    pub fn new(current_state: &str, puzzle: &Puzzle) -> Self {
        let current = if is_valid_state(current_state) {
            current_state.parse().ok()
        } else {
            None
        };
        let current = current.unwrap_or_else(|| {
            if !current_state.is_empty() {
                log::debug!("ignoring invalid saved state {current_state:?}");
            }
            *puzzle.start()
        });

        Self {
            title: puzzle.title().to_owned(),
            start: *puzzle.start(),
            current,
            end: *puzzle.end(),
            move_count: 0,
            reset_count: 0,
            hint_count: 0,
        }
    }

    /// Returns the puzzle title.
    #[must_use]
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the board the puzzle started from.
    #[must_use]
    #[inline]
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Returns the board being played.
    #[must_use]
    #[inline]
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Returns the target board.
    #[must_use]
    #[inline]
    pub fn end(&self) -> &Board {
        &self.end
    }

    /// Returns the number of accepted presses since the last reset.
    #[must_use]
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns how many times the game was reset.
    #[must_use]
    #[inline]
    pub fn reset_count(&self) -> u32 {
        self.reset_count
    }

    /// Returns how many hints were given.
    #[must_use]
    #[inline]
    pub fn hint_count(&self) -> u32 {
        self.hint_count
    }

    /// Presses the tile at `(row, col)`.
    ///
    /// Returns `false` and leaves the board untouched if the coordinates are
    /// outside the board.
    pub fn update(&mut self, row: i32, col: i32) -> bool {
        let updated = self.current.toggle_at(row, col);
        if updated {
            self.move_count += 1;
        }
        updated
    }

    /// Presses the tile at `pos`.
    pub fn press(&mut self, pos: Position) {
        self.current.toggle(pos);
        self.move_count += 1;
    }

    /// Returns the current board as a state string.
    #[must_use]
    pub fn serialize_current(&self) -> String {
        self.current.to_string()
    }

    /// Returns the end board as a state string.
    #[must_use]
    pub fn serialize_end(&self) -> String {
        self.end.to_string()
    }

    /// Returns `true` if the current board matches the end board.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.current == self.end
    }

    /// Restores the start board and clears the move count.
    pub fn reset(&mut self) {
        self.current = self.start;
        self.move_count = 0;
        self.reset_count += 1;
    }

    /// Returns the fewest presses that take the current board to the end board.
    ///
    /// Returns `None` if the end board is not reachable from the current one.
    #[must_use]
    pub fn minimal_solution(&self) -> Option<Solution> {
        flippin_solver::minimal_solution(&self.current, &self.end)
    }

    /// Suggests a tile to press next.
    ///
    /// Returns the first position (row-major) pressed by the minimal solution
    /// from the current board, or `None` if the game is already won or the end
    /// board is unreachable.
    pub fn hint(&mut self) -> Option<Position> {
        let (pos, _) = self.minimal_solution()?.presses().next()?;
        self.hint_count += 1;
        log::debug!("hint #{} for {:?}: press {pos}", self.hint_count, self.title);
        Some(pos)
    }
}
