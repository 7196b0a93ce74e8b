//! GF(3) elimination helpers for tests.
//!
//! These derive facts about the ruleset from scratch, without consulting the
//! precomputed tables.

use flippin_core::CELL_COUNT;

/// Reduces `rows` to reduced row echelon form over GF(3).
///
/// Returns the pivot column of each non-zero row, in order.
pub(crate) fn row_reduce_mod3(rows: &mut [[i64; CELL_COUNT]]) -> Vec<usize> {
    for row in rows.iter_mut() {
        for x in row.iter_mut() {
            *x = x.rem_euclid(3);
        }
    }

    let mut pivots = Vec::new();
    for col in 0..CELL_COUNT {
        let rank = pivots.len();
        let Some(pivot) = (rank..rows.len()).find(|&r| rows[r][col] != 0) else {
            continue;
        };
        rows.swap(rank, pivot);
        // 1 and 2 are their own inverses mod 3
        let inverse = rows[rank][col];
        for x in &mut rows[rank] {
            *x = (*x * inverse) % 3;
        }
        let pivot_row = rows[rank];
        for (r, row) in rows.iter_mut().enumerate() {
            if r != rank && row[col] != 0 {
                let factor = row[col];
                for (x, p) in row.iter_mut().zip(pivot_row) {
                    *x = (*x - factor * p).rem_euclid(3);
                }
            }
        }
        pivots.push(col);
    }
    pivots
}

/// Rank of a matrix over GF(3).
pub(crate) fn rank_mod3(matrix: &[[i64; CELL_COUNT]]) -> usize {
    let mut rows = matrix.to_vec();
    row_reduce_mod3(&mut rows).len()
}

/// A basis of `{ x | x · matrix ≡ 0 (mod 3) }`.
pub(crate) fn left_kernel_basis_mod3(
    matrix: &[[i64; CELL_COUNT]; CELL_COUNT],
) -> Vec<[i64; CELL_COUNT]> {
    // x · A = 0  <=>  Aᵀ · xᵀ = 0
    let mut rows = [[0; CELL_COUNT]; CELL_COUNT];
    for (i, row) in matrix.iter().enumerate() {
        for (j, x) in row.iter().enumerate() {
            rows[j][i] = *x;
        }
    }
    let pivots = row_reduce_mod3(&mut rows);

    (0..CELL_COUNT)
        .filter(|col| !pivots.contains(col))
        .map(|free| {
            let mut v = [0; CELL_COUNT];
            v[free] = 1;
            for (row, &pivot) in rows.iter().zip(&pivots) {
                v[pivot] = (-row[free]).rem_euclid(3);
            }
            v
        })
        .collect()
}

/// Every member of the left kernel of `matrix` over GF(3), zero included.
pub(crate) fn left_kernel_mod3(matrix: &[[i64; CELL_COUNT]; CELL_COUNT]) -> Vec<[i64; CELL_COUNT]> {
    let basis = left_kernel_basis_mod3(matrix);
    let mut members = vec![[0; CELL_COUNT]];
    for b in &basis {
        members = members
            .iter()
            .flat_map(|m| {
                (0..3).map(move |c| {
                    let mut v = *m;
                    for (x, y) in v.iter_mut().zip(b) {
                        *x = (*x + c * y) % 3;
                    }
                    v
                })
            })
            .collect();
    }
    members
}
