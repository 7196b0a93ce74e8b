//! Reachability of a target state under the toggle rule.
//!
//! Pressing tiles changes the board by `x · A (mod 3)`, where `x` holds the
//! press counts and `A` is [`RULESET`]. A target is reachable from a start
//! exactly when the displacement `b = end - start` lies in the image of `A`
//! over GF(3).
//!
//! The check does not run an elimination per query. It multiplies `b` by the
//! precomputed [`SOLUTION_BASIS`] to get a candidate `x`, then verifies that
//! `x · A ≡ b (mod 3)`. If the candidate fails, nothing in its coset can
//! succeed either, so the puzzle is unsolvable.

use flippin_core::{ArithmeticError, Board, modular};

use crate::{
    SolverError,
    tables::{RULESET, SOLUTION_BASIS},
};

/// Modulus of the label arithmetic.
pub(crate) const MODULUS: i64 = 3;

/// Converts a state string into its digit values.
///
/// Digits outside the label range are kept as-is; only non-digit characters
/// are rejected.
pub(crate) fn parse_digits(state: &str) -> Result<Vec<i64>, SolverError> {
    state
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            ch.to_digit(10)
                .map(i64::from)
                .ok_or(SolverError::NonDigit { index, ch })
        })
        .collect()
}

/// Returns the unreduced displacement `end - start`.
///
/// # Errors
///
/// Returns [`ArithmeticError::LengthMismatch`] if the vectors differ in length.
pub fn displacement(start: &[i64], end: &[i64]) -> Result<Vec<i64>, ArithmeticError> {
    modular::subtract_vectors(end, start)
}

/// Computes a particular solution for a displacement, if one exists.
///
/// The returned vector is not reduced modulo 3; callers that need press counts
/// should reduce it.
///
/// # Errors
///
/// Returns [`ArithmeticError::LengthMismatch`] if `displacement` does not have
/// 25 entries.
///
/// # Examples
///
/// ```
/// use flippin_solver::particular_solution;
///
/// // a single press at the top-left corner
/// let mut b = [0; 25];
/// b[0] = 1;
/// b[1] = 1;
/// b[5] = 1;
/// assert!(particular_solution(&b)?.is_some());
///
/// // a lone tile change is not reachable
/// let mut b = [0; 25];
/// b[0] = 1;
/// assert!(particular_solution(&b)?.is_none());
/// # Ok::<(), flippin_core::ArithmeticError>(())
/// ```
pub fn particular_solution(displacement: &[i64]) -> Result<Option<Vec<i64>>, ArithmeticError> {
    let x = modular::left_multiply(displacement, &SOLUTION_BASIS)?;
    let image = modular::left_multiply(&x, &RULESET)?;
    let verified = modular::vectors_congruent(&image, displacement, MODULUS)?;
    Ok(verified.then_some(x))
}

/// Parses two state strings and computes a particular solution between them.
pub(crate) fn particular_solution_for_states(
    start: &str,
    end: &str,
) -> Result<Option<Vec<i64>>, SolverError> {
    let start = parse_digits(start)?;
    let end = parse_digits(end)?;
    let b = displacement(&start, &end)?;
    Ok(particular_solution(&b)?)
}

/// Computes a particular solution between two boards.
pub(crate) fn particular_solution_for_boards(start: &Board, end: &Board) -> Option<Vec<i64>> {
    let result = displacement(&start.to_vector(), &end.to_vector())
        .and_then(|b| particular_solution(&b));
    match result {
        Ok(x) => x,
        Err(err) => unreachable!("board vectors always match the tables: {err}"),
    }
}

/// Checks if a puzzle end state is reachable from a start state.
///
/// Both states are 25-character strings in the board state format. Inputs that
/// cannot be processed (a non-digit character or mismatched lengths) are
/// reported as not solvable, and the reason is logged.
///
/// Note that reachability is checked in one direction only; callers should not
/// assume `is_puzzle_solvable(a, b) == is_puzzle_solvable(b, a)`.
///
/// # Examples
///
/// ```
/// use flippin_solver::is_puzzle_solvable;
///
/// assert!(is_puzzle_solvable(
///     "1011110111112101211101210",
///     "0202002020000001000101110",
/// ));
/// assert!(!is_puzzle_solvable(
///     "1011110111112101211101210",
///     "0011110111112101211101210",
/// ));
/// ```
#[must_use]
pub fn is_puzzle_solvable(start: &str, end: &str) -> bool {
    match particular_solution_for_states(start, end) {
        Ok(x) => x.is_some(),
        Err(err) => {
            log::error!("cannot check solvability of {start:?} -> {end:?}: {err}");
            false
        }
    }
}

/// Checks if `end` is reachable from `start`.
#[must_use]
pub fn is_board_solvable(start: &Board, end: &Board) -> bool {
    particular_solution_for_boards(start, end).is_some()
}

#[cfg(test)]
mod tests {
    use flippin_core::Position;
    use proptest::prelude::*;

    use super::*;

    const START: &str = "1011110111112101211101210";
    const SOLVABLE_END: &str = "0202002020000001000101110";
    const UNSOLVABLE_END: &str = "0011110111112101211101210";

    #[test]
    fn test_known_puzzles() {
        assert!(is_puzzle_solvable(START, SOLVABLE_END));
        assert!(!is_puzzle_solvable(START, UNSOLVABLE_END));
    }

    #[test]
    fn test_known_puzzles_reversed() {
        assert!(is_puzzle_solvable(SOLVABLE_END, START));
        assert!(!is_puzzle_solvable(UNSOLVABLE_END, START));
    }

    #[test]
    fn test_same_state_is_solvable() {
        assert!(is_puzzle_solvable(START, START));
        assert!(is_puzzle_solvable(SOLVABLE_END, SOLVABLE_END));
    }

    #[test]
    fn test_malformed_input_is_not_solvable() {
        // non-digit characters
        assert!(!is_puzzle_solvable("x011110111112101211101210", SOLVABLE_END));
        assert!(!is_puzzle_solvable(START, "020200202000000100010111 "));
        // mismatched or wrong lengths
        assert!(!is_puzzle_solvable(START, "0202"));
        assert!(!is_puzzle_solvable("0202", "0202"));
        assert!(!is_puzzle_solvable("", ""));
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("0129"), Ok(vec![0, 1, 2, 9]));
        assert_eq!(
            parse_digits("01a"),
            Err(SolverError::NonDigit { index: 2, ch: 'a' })
        );
    }

    #[test]
    fn test_particular_solution_errors() {
        assert_eq!(
            particular_solution(&[0; 24]),
            Err(ArithmeticError::LengthMismatch { left: 24, right: 25 })
        );
        assert_eq!(
            particular_solution_for_states(START, "0"),
            Err(SolverError::Arithmetic(ArithmeticError::LengthMismatch {
                left: 1,
                right: 25
            }))
        );
    }

    #[test]
    fn test_single_tile_change_is_reachable_only_at_center() {
        for pos in Position::ALL {
            let mut end = Board::new();
            end[pos] = end[pos].next();
            let expected = pos == Position::new(2, 2);
            assert_eq!(is_board_solvable(&Board::new(), &end), expected, "at {pos}");
        }
    }

    proptest! {
        #[test]
        fn prop_pressed_boards_are_reachable(
            start in "[0-2]{25}",
            presses in prop::collection::vec(0usize..25, 0..40),
        ) {
            let start: Board = start.parse().unwrap();
            let mut end = start;
            for index in presses {
                end.toggle(Position::from_index(index));
            }
            prop_assert!(is_board_solvable(&start, &end));
            prop_assert!(is_puzzle_solvable(&start.to_string(), &end.to_string()));
            prop_assert!(is_puzzle_solvable(&end.to_string(), &start.to_string()));
        }

        #[test]
        fn prop_string_and_board_checks_agree(start in "[0-2]{25}", end in "[0-2]{25}") {
            let start_board: Board = start.parse().unwrap();
            let end_board: Board = end.parse().unwrap();
            prop_assert_eq!(
                is_puzzle_solvable(&start, &end),
                is_board_solvable(&start_board, &end_board)
            );
        }
    }
}
