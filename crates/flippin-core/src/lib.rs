//! Core data structures for Flippin.
//!
//! Flippin is played on a 5×5 board of tiles. Every tile carries one of three
//! labels, and pressing a tile advances it and its orthogonal neighbours to the
//! next label (modulo 3). This crate provides the types shared by the solver
//! and the game-state components.
//!
//! # Overview
//!
//! 1. **Board types**
//!    - [`label`]: Type-safe representation of tile labels 0-2
//!    - [`position`]: Board position (row, column) and the toggle neighbourhood
//!    - [`board`]: The 5×5 grid and its 25-character state string format
//!
//! 2. **Arithmetic**
//!    - [`modular`]: Signless modulo and vector/matrix primitives used by the
//!      solver, with dimension and modulus checks
//!
//! # Examples
//!
//! ```
//! use flippin_core::{Board, Position};
//!
//! let mut board: Board = "1011110111112101211101210".parse()?;
//! board.toggle(Position::new(0, 0));
//! assert_eq!(board.to_string(), "2111120111112101211101210");
//! # Ok::<(), flippin_core::BoardParseError>(())
//! ```

pub mod board;
pub mod label;
pub mod modular;
pub mod position;

pub use self::{
    board::{Board, BoardParseError, is_valid_state},
    label::Label,
    modular::ArithmeticError,
    position::Position,
};

/// Number of rows (and columns) of the board.
pub const BOARD_SIZE: usize = 5;

/// Number of tiles on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of distinct tile labels (colors).
pub const LABEL_COUNT: usize = 3;
