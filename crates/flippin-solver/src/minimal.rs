//! Minimum-cost solutions.
//!
//! Any two solutions for the same displacement differ by a member of the
//! kernel of [`RULESET`] over GF(3). Starting from the reduced particular
//! solution, the search adds each vector in [`KERNEL_VECTORS`] and keeps the
//! cheapest result. Since those vectors and zero make up the entire kernel,
//! this visits every solution of the puzzle and the result is a global minimum.
//!
//! [`RULESET`]: crate::tables::RULESET

use flippin_core::{ArithmeticError, Board, modular};

use crate::{
    Solution, SolverError,
    solvability::{self, MODULUS},
    tables::KERNEL_VECTORS,
};

fn cost(v: &[i64]) -> i64 {
    v.iter().sum()
}

/// Picks the cheapest member of the solution coset of `x`.
///
/// Ties keep the earliest candidate: the reduced particular solution first,
/// then the kernel vectors in table order.
fn cheapest_in_coset(x: &[i64]) -> Result<Vec<i64>, ArithmeticError> {
    let base = modular::signless_mod_vector(x, MODULUS)?;
    let base_cost = cost(&base);

    let mut best = base.clone();
    let mut best_cost = base_cost;
    for k in &KERNEL_VECTORS {
        let alternative = modular::signless_mod_vector(&modular::add_vectors(&base, k)?, MODULUS)?;
        let alternative_cost = cost(&alternative);
        if alternative_cost < best_cost {
            best = alternative;
            best_cost = alternative_cost;
        }
    }

    log::debug!("minimal solution costs {best_cost} presses (particular solution: {base_cost})");
    Ok(best)
}

/// Finds the minimal solution between two state strings, reporting malformed input.
///
/// Unlike [`find_minimal_solution`], this distinguishes an unsolvable puzzle
/// (`Ok(None)`) from input that cannot be processed.
///
/// # Errors
///
/// Returns [`SolverError::NonDigit`] if a state contains a non-digit character,
/// and [`SolverError::Arithmetic`] if the states do not both have 25 characters.
pub fn solve_states(start: &str, end: &str) -> Result<Option<Solution>, SolverError> {
    let Some(x) = solvability::particular_solution_for_states(start, end)? else {
        return Ok(None);
    };
    Ok(Some(Solution::from_reduced(&cheapest_in_coset(&x)?)))
}

/// Finds the minimal solution for a puzzle if a solution exists.
///
/// Returns 25 press counts (row-major, each 0-2) whose sum is as small as
/// possible, or an empty vector if `end` cannot be reached from `start`.
/// An unsolvable puzzle is an expected outcome; it is logged as a warning.
///
/// Malformed input (a non-digit character, or states that are not both 25
/// characters long) also yields an empty vector, with the reason logged as an
/// error. Use [`solve_states`] to tell the two cases apart.
///
/// # Examples
///
/// ```
/// use flippin_solver::find_minimal_solution;
///
/// assert_eq!(
///     find_minimal_solution("1011110111112101211101210", "0202002020000001000101110"),
///     [2, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0],
/// );
/// assert!(find_minimal_solution("1011110111112101211101210", "0011110111112101211101210").is_empty());
/// ```
#[must_use]
pub fn find_minimal_solution(start: &str, end: &str) -> Vec<u8> {
    match solve_states(start, end) {
        Ok(Some(solution)) => solution.to_vec(),
        Ok(None) => {
            log::warn!("cannot find minimal solution for a puzzle without any solutions");
            Vec::new()
        }
        Err(err) => {
            log::error!("cannot find minimal solution for {start:?} -> {end:?}: {err}");
            Vec::new()
        }
    }
}

/// Finds the minimal solution between two boards.
///
/// Returns `None` if `end` cannot be reached from `start`.
#[must_use]
pub fn minimal_solution(start: &Board, end: &Board) -> Option<Solution> {
    let x = solvability::particular_solution_for_boards(start, end)?;
    match cheapest_in_coset(&x) {
        Ok(best) => Some(Solution::from_reduced(&best)),
        Err(err) => unreachable!("board vectors always match the tables: {err}"),
    }
}
