//! Game state for Flippin.
//!
//! A [`Game`] tracks one play-through of a [`Puzzle`]: the board being
//! played, the target board, and the press, reset, and hint counters.
//! [`PuzzleCatalog`] holds the puzzles available to play, including custom
//! puzzles imported from JSON, and [`Stats`] accumulates results across won
//! games.

pub use self::{
    catalog::{CUSTOM_PREFIX, ImportError, PuzzleCatalog},
    game::Game,
    puzzle::{
        FREEPLAY_EXAMPLE_END, FREEPLAY_EXAMPLE_START, FREEPLAY_EXAMPLE_TITLE, Puzzle, PuzzleError,
        PuzzleStates, SANDBOX_TITLE, SerializedPuzzle, validate_custom_puzzle,
    },
    stats::{DISTRIBUTION_LENGTH, Stats, StatsError},
};

mod catalog;
mod game;
mod puzzle;
mod stats;
