//! Solvability and minimal-solution engine for Flippin.
//!
//! Pressing a tile advances it and its orthogonal neighbours by one label
//! (mod 3), so a sequence of presses changes the board by `x · A (mod 3)`,
//! where `x` counts the presses per tile and `A` is the fixed 25×25 ruleset
//! matrix. Solving a puzzle means solving `x · A ≡ end - start (mod 3)`.
//!
//! # Overview
//!
//! - [`is_puzzle_solvable`]: checks whether the end state can be reached
//! - [`find_minimal_solution`]: the fewest-presses solution as a vector of
//!   press counts, or an empty vector for an unsolvable puzzle
//! - [`minimal_solution`]: the same search over typed [`Board`]s, returning a
//!   [`Solution`]
//! - [`tables`]: the precomputed ruleset, solution basis, and kernel vectors
//!
//! All entry points are pure functions over constant tables and may be called
//! concurrently.
//!
//! [`Board`]: flippin_core::Board
//!
//! # Examples
//!
//! ```
//! use flippin_solver::{find_minimal_solution, is_puzzle_solvable};
//!
//! let start = "1011110111112101211101210";
//! let end = "0202002020000001000101110";
//!
//! assert!(is_puzzle_solvable(start, end));
//! let presses = find_minimal_solution(start, end);
//! assert_eq!(presses.iter().map(|&n| u32::from(n)).sum::<u32>(), 10);
//! ```

use flippin_core::ArithmeticError;

pub use self::{
    minimal::{find_minimal_solution, minimal_solution, solve_states},
    solution::Solution,
    solvability::{displacement, is_board_solvable, is_puzzle_solvable, particular_solution},
};

mod minimal;
mod solution;
mod solvability;
pub mod tables;
#[cfg(test)]
mod testing;

/// Errors raised while preparing a solver query from state strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// A state string contained a character that is not a decimal digit.
    #[display("non-digit character {ch:?} at index {index}")]
    NonDigit {
        /// Index of the character.
        index: usize,
        /// The rejected character.
        ch: char,
    },
    /// An arithmetic contract was violated, e.g. mismatched state lengths.
    #[display("arithmetic error: {_0}")]
    Arithmetic(#[from] ArithmeticError),
}
