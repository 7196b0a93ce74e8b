//! Precomputed matrices for the 5×5 ruleset over GF(3).
//!
//! The tables are derived offline from the toggle rule and are kept verbatim so
//! that solver results are bit-exact across platforms and releases. The tests
//! at the bottom of this module re-derive the structural facts the solver
//! relies on.

use flippin_core::CELL_COUNT;

/// Number of vectors in the kernel of [`RULESET`] over GF(3), including zero.
pub const KERNEL_SIZE: usize = 27;

/// The ruleset matrix `A`.
///
/// Row `i` marks the tiles (row-major) that advance by one when tile `i` is
/// pressed: the tile itself and its in-bounds orthogonal neighbours.
pub const RULESET: [[i64; CELL_COUNT]; CELL_COUNT] = [
    [1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1],
];

/// The solution basis matrix `M`.
///
/// For a displacement `b` in the image of [`RULESET`], `b · M` is a particular
/// solution `x` with `x · A ≡ b (mod 3)`. The last three rows are zero: they
/// correspond to the three free variables of the system.
pub const SOLUTION_BASIS: [[i64; CELL_COUNT]; CELL_COUNT] = [
    [2, 2, 1, 2, 2, 0, 1, 1, 1, 2, 0, 2, 2, 0, 1, 1, 1, 1, 2, 0, 1, 1, 0, 0, 0],
    [2, 0, 0, 1, 2, 1, 2, 2, 0, 0, 1, 1, 2, 0, 1, 0, 0, 1, 0, 2, 2, 1, 0, 0, 0],
    [1, 0, 2, 1, 2, 2, 0, 1, 1, 0, 0, 0, 2, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0],
    [2, 1, 1, 1, 0, 0, 2, 0, 2, 2, 2, 0, 1, 1, 2, 1, 1, 1, 0, 1, 2, 0, 0, 0, 0],
    [2, 2, 2, 0, 1, 2, 0, 2, 0, 0, 2, 0, 2, 1, 2, 2, 2, 1, 1, 0, 0, 1, 0, 0, 0],
    [0, 1, 2, 0, 2, 2, 0, 0, 2, 1, 2, 0, 2, 0, 1, 2, 2, 1, 1, 1, 0, 1, 0, 0, 0],
    [1, 2, 0, 2, 0, 0, 0, 2, 1, 1, 2, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 0, 0, 0, 0],
    [1, 2, 1, 0, 2, 0, 2, 0, 0, 1, 0, 2, 1, 2, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0],
    [1, 0, 1, 2, 0, 2, 1, 0, 0, 1, 2, 0, 1, 1, 2, 2, 2, 1, 2, 2, 0, 1, 0, 0, 0],
    [2, 0, 0, 2, 0, 1, 1, 1, 1, 1, 2, 0, 0, 1, 2, 0, 0, 1, 2, 2, 1, 2, 0, 0, 0],
    [0, 1, 0, 2, 2, 2, 2, 0, 2, 2, 2, 1, 2, 0, 0, 2, 2, 0, 2, 1, 0, 1, 0, 0, 0],
    [2, 1, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 1, 1, 0, 2, 2, 2, 1, 2, 1, 0, 0, 0, 0],
    [2, 2, 2, 1, 2, 2, 0, 1, 1, 0, 2, 1, 2, 0, 0, 1, 1, 0, 0, 0, 2, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 2, 1, 1, 0, 1, 0, 1, 0, 2, 2, 2, 2, 1, 2, 2, 0, 0, 0],
    [1, 1, 0, 2, 2, 1, 1, 0, 2, 2, 0, 0, 0, 0, 0, 2, 2, 0, 1, 2, 2, 2, 0, 0, 0],
    [1, 0, 1, 1, 2, 2, 1, 1, 2, 0, 2, 2, 1, 2, 2, 0, 0, 0, 2, 2, 2, 1, 0, 0, 0],
    [1, 0, 1, 1, 2, 2, 1, 1, 2, 0, 2, 2, 1, 2, 2, 0, 0, 0, 2, 2, 1, 2, 0, 0, 0],
    [1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 2, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    [2, 0, 0, 0, 1, 1, 1, 0, 2, 2, 2, 1, 0, 2, 1, 2, 2, 0, 1, 1, 0, 1, 0, 0, 0],
    [0, 2, 0, 1, 0, 1, 1, 0, 2, 2, 1, 2, 0, 1, 2, 2, 2, 0, 1, 1, 1, 0, 0, 0, 0],
    [1, 2, 1, 2, 0, 0, 2, 1, 0, 1, 0, 1, 2, 2, 2, 2, 1, 0, 0, 1, 0, 2, 0, 0, 0],
    [1, 1, 1, 0, 1, 1, 0, 1, 1, 2, 1, 0, 0, 2, 2, 1, 2, 0, 1, 0, 2, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Every non-zero vector `k` with `k · A ≡ 0 (mod 3)`.
///
/// The kernel of [`RULESET`] over GF(3) has dimension 3, so it has 27 members.
/// Adding any of these to a solution (mod 3) yields another solution, and
/// together with the zero vector they enumerate the whole solution coset.
pub const KERNEL_VECTORS: [[i64; CELL_COUNT]; KERNEL_SIZE - 1] = [
    [0, 1, 0, 2, 0, 2, 2, 0, 1, 1, 2, 1, 0, 2, 1, 1, 1, 0, 2, 2, 2, 0, 0, 0, 1],
    [0, 2, 0, 1, 0, 1, 1, 0, 2, 2, 1, 2, 0, 1, 2, 2, 2, 0, 1, 1, 1, 0, 0, 0, 2],
    [1, 0, 0, 0, 2, 2, 2, 0, 1, 1, 1, 2, 0, 1, 2, 1, 1, 0, 2, 2, 0, 2, 0, 1, 0],
    [1, 1, 0, 2, 2, 1, 1, 0, 2, 2, 0, 0, 0, 0, 0, 2, 2, 0, 1, 1, 2, 2, 0, 1, 1],
    [1, 2, 0, 1, 2, 0, 0, 0, 0, 0, 2, 1, 0, 2, 1, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2],
    [2, 0, 0, 0, 1, 1, 1, 0, 2, 2, 2, 1, 0, 2, 1, 2, 2, 0, 1, 1, 0, 1, 0, 2, 0],
    [2, 1, 0, 2, 1, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 0, 0, 0, 0, 0, 2, 1, 0, 2, 1],
    [2, 2, 0, 1, 1, 2, 2, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 2, 2, 1, 1, 0, 2, 2],
    [1, 1, 2, 2, 1, 1, 2, 1, 1, 0, 2, 1, 0, 2, 1, 2, 1, 2, 2, 0, 1, 0, 1, 0, 0],
    [1, 2, 2, 1, 1, 0, 1, 1, 2, 1, 1, 2, 0, 1, 2, 0, 2, 2, 1, 2, 0, 0, 1, 0, 1],
    [1, 0, 2, 0, 1, 2, 0, 1, 0, 2, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 2, 0, 1, 0, 2],
    [2, 1, 2, 2, 0, 0, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 2, 2, 1, 2, 1, 2, 1, 1, 0],
    [2, 2, 2, 1, 0, 2, 0, 1, 0, 2, 2, 1, 0, 2, 1, 1, 0, 2, 0, 1, 0, 2, 1, 1, 1],
    [2, 0, 2, 0, 0, 1, 2, 1, 1, 0, 1, 2, 0, 1, 2, 2, 1, 2, 2, 0, 2, 2, 1, 1, 2],
    [0, 1, 2, 2, 2, 2, 0, 1, 0, 2, 1, 2, 0, 1, 2, 1, 0, 2, 0, 1, 1, 1, 1, 2, 0],
    [0, 2, 2, 1, 2, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 2, 1, 2, 2, 0, 0, 1, 1, 2, 1],
    [0, 0, 2, 0, 2, 0, 1, 1, 2, 1, 2, 1, 0, 2, 1, 0, 2, 2, 1, 2, 2, 1, 1, 2, 2],
    [2, 2, 1, 1, 2, 2, 1, 2, 2, 0, 1, 2, 0, 1, 2, 1, 2, 1, 1, 0, 2, 0, 2, 0, 0],
    [2, 0, 1, 0, 2, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 2, 0, 1, 0, 2, 1, 0, 2, 0, 1],
    [2, 1, 1, 2, 2, 0, 2, 2, 1, 2, 2, 1, 0, 2, 1, 0, 1, 1, 2, 1, 0, 0, 2, 0, 2],
    [0, 2, 1, 1, 1, 1, 0, 2, 0, 1, 2, 1, 0, 2, 1, 2, 0, 1, 0, 2, 2, 2, 2, 1, 0],
    [0, 0, 1, 0, 1, 0, 2, 2, 1, 2, 1, 2, 0, 1, 2, 0, 1, 1, 2, 1, 1, 2, 2, 1, 1],
    [0, 1, 1, 2, 1, 2, 1, 2, 2, 0, 0, 0, 0, 0, 0, 1, 2, 1, 1, 0, 0, 2, 2, 1, 2],
    [1, 2, 1, 1, 0, 0, 2, 2, 1, 2, 0, 0, 0, 0, 0, 0, 1, 1, 2, 1, 2, 1, 2, 2, 0],
    [1, 0, 1, 0, 0, 2, 1, 2, 2, 0, 2, 1, 0, 2, 1, 1, 2, 1, 1, 0, 1, 1, 2, 2, 1],
    [1, 1, 1, 2, 0, 1, 0, 2, 0, 1, 1, 2, 0, 1, 2, 2, 0, 1, 0, 2, 0, 1, 2, 2, 2],
];
