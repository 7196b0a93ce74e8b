//! Modular arithmetic over integer vectors.
//!
//! These primitives back the solver's linear algebra over GF(3). Vectors are
//! plain `i64` slices so that unreduced displacements (which can be negative)
//! flow through unchanged; reduction only happens where a caller asks for it.
//!
//! Matrices use the row-vector convention: [`left_multiply`] computes `v · M`.
//!
//! Every primitive checks its contract and reports violations through
//! [`ArithmeticError`] instead of clamping or truncating.
//!
//! # Examples
//!
//! ```
//! use flippin_core::modular;
//!
//! assert_eq!(modular::signless_mod(-1, 3)?, 2);
//! assert_eq!(modular::signless_mod_vector(&[5, -2], 3)?, vec![2, 1]);
//!
//! let identity = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];
//! assert_eq!(modular::left_multiply(&[3, 3, 3], &identity)?, vec![3, 3, 3]);
//! # Ok::<(), flippin_core::ArithmeticError>(())
//! ```

/// Errors raised when an arithmetic contract is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ArithmeticError {
    /// The modulus was less than one.
    #[display("the modulus should be greater than 0, got {modulus}")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: i64,
    },
    /// Two operands had different lengths.
    #[display("the operand lengths must be the same: {left} != {right}")]
    LengthMismatch {
        /// Length of the left operand (vector).
        left: usize,
        /// Length of the right operand (vector, or matrix row count).
        right: usize,
    },
    /// A matrix row had a different length from the first row.
    #[display("matrix row {row} has {len} columns, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
}

fn check_modulus(n: i64) -> Result<(), ArithmeticError> {
    if n < 1 {
        return Err(ArithmeticError::InvalidModulus { modulus: n });
    }
    Ok(())
}

fn check_lengths(left: usize, right: usize) -> Result<(), ArithmeticError> {
    if left != right {
        return Err(ArithmeticError::LengthMismatch { left, right });
    }
    Ok(())
}

/// Reduces `x` into `[0, n)`.
///
/// Unlike the `%` operator this never returns a negative value.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidModulus`] if `n < 1`.
///
/// # Examples
///
/// ```
/// use flippin_core::modular::signless_mod;
///
/// assert_eq!(signless_mod(5, 3)?, 2);
/// assert_eq!(signless_mod(-1, 3)?, 2);
/// assert!(signless_mod(3, -1).is_err());
/// # Ok::<(), flippin_core::ArithmeticError>(())
/// ```
#[inline]
pub fn signless_mod(x: i64, n: i64) -> Result<i64, ArithmeticError> {
    check_modulus(n)?;
    Ok(x.rem_euclid(n))
}

/// Applies [`signless_mod`] to every element of `v`.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidModulus`] if `n < 1`.
pub fn signless_mod_vector(v: &[i64], n: i64) -> Result<Vec<i64>, ArithmeticError> {
    check_modulus(n)?;
    Ok(v.iter().map(|x| x.rem_euclid(n)).collect())
}

/// Adds two vectors elementwise.
///
/// # Errors
///
/// Returns [`ArithmeticError::LengthMismatch`] if the lengths differ.
pub fn add_vectors(v1: &[i64], v2: &[i64]) -> Result<Vec<i64>, ArithmeticError> {
    check_lengths(v1.len(), v2.len())?;
    Ok(v1.iter().zip(v2).map(|(a, b)| a + b).collect())
}

/// Subtracts `v2` from `v1` elementwise.
///
/// # Errors
///
/// Returns [`ArithmeticError::LengthMismatch`] if the lengths differ.
pub fn subtract_vectors(v1: &[i64], v2: &[i64]) -> Result<Vec<i64>, ArithmeticError> {
    check_lengths(v1.len(), v2.len())?;
    Ok(v1.iter().zip(v2).map(|(a, b)| a - b).collect())
}

/// Left multiplies a matrix by a row vector: `result[c] = Σ_r v[r] * m[r][c]`.
///
/// The result has as many elements as the matrix has columns. An empty matrix
/// multiplied by an empty vector yields an empty vector.
///
/// # Errors
///
/// Returns [`ArithmeticError::LengthMismatch`] if the vector length differs from
/// the matrix row count, and [`ArithmeticError::RaggedMatrix`] if the rows do
/// not all have the same length.
pub fn left_multiply<R>(v: &[i64], m: &[R]) -> Result<Vec<i64>, ArithmeticError>
where
    R: AsRef<[i64]>,
{
    check_lengths(v.len(), m.len())?;

    let columns = m.first().map_or(0, |row| row.as_ref().len());
    let mut result = vec![0; columns];
    for (r, (x, row)) in v.iter().zip(m).enumerate() {
        let row = row.as_ref();
        if row.len() != columns {
            return Err(ArithmeticError::RaggedMatrix {
                row: r,
                len: row.len(),
                expected: columns,
            });
        }
        for (acc, entry) in result.iter_mut().zip(row) {
            *acc += x * entry;
        }
    }
    Ok(result)
}

/// Checks whether two vectors are congruent elementwise modulo `n`.
///
/// # Errors
///
/// Returns [`ArithmeticError::LengthMismatch`] if the lengths differ, and
/// [`ArithmeticError::InvalidModulus`] if `n < 1`.
///
/// # Examples
///
/// ```
/// use flippin_core::modular::vectors_congruent;
///
/// assert!(vectors_congruent(&[1, 1, 1], &[4, 4, -2], 3)?);
/// assert!(!vectors_congruent(&[1, 1, 1], &[4, 4, 4], 2)?);
/// # Ok::<(), flippin_core::ArithmeticError>(())
/// ```
pub fn vectors_congruent(v1: &[i64], v2: &[i64], n: i64) -> Result<bool, ArithmeticError> {
    check_lengths(v1.len(), v2.len())?;
    check_modulus(n)?;
    Ok(v1
        .iter()
        .zip(v2)
        .all(|(a, b)| a.rem_euclid(n) == b.rem_euclid(n)))
}
