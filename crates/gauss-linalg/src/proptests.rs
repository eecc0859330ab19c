//! Property-based tests for elimination and the derived operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Matrix, SolveOutcome, EPSILON};

    // Strategy for generating small integer entries
    fn small_entry() -> impl Strategy<Value = f64> {
        (-9i32..=9).prop_map(f64::from)
    }

    // Strategy for generating rectangular matrices up to 4x4
    fn small_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(small_entry(), rows * cols)
                .prop_map(move |data| Matrix::from_parts(rows, cols, data))
        })
    }

    // Strategy for generating a square matrix with a matching right-hand side
    fn square_system() -> impl Strategy<Value = (Matrix, Matrix)> {
        (1usize..=4).prop_flat_map(|n| {
            (
                proptest::collection::vec(small_entry(), n * n),
                proptest::collection::vec(small_entry(), n),
            )
                .prop_map(move |(a, b)| (Matrix::from_parts(n, n, a), Matrix::from_parts(n, 1, b)))
        })
    }

    // Strategy for generating a square matrix of size >= 2 with two distinct row indices
    fn swappable_square() -> impl Strategy<Value = (Matrix, usize, usize)> {
        (2usize..=4).prop_flat_map(|n| {
            (
                proptest::collection::vec(small_entry(), n * n),
                0..n,
                1..n,
            )
                .prop_map(move |(data, i, offset)| {
                    (Matrix::from_parts(n, n, data), i, (i + offset) % n)
                })
        })
    }

    // Strategy for generating strictly diagonally dominant (so invertible) matrices
    fn dominant_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=4).prop_flat_map(|n| {
            (
                proptest::collection::vec(small_entry(), n * n),
                proptest::collection::vec(1i32..=5, n),
                proptest::bool::ANY,
            )
                .prop_map(move |(data, extra, negate)| {
                    let mut m = Matrix::from_parts(n, n, data);
                    for i in 0..n {
                        let off: f64 = (0..n).filter(|&j| j != i).map(|j| m[(i, j)].abs()).sum();
                        let diag = off + f64::from(extra[i]);
                        m[(i, i)] = if negate { -diag } else { diag };
                    }
                    m
                })
        })
    }

    fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    proptest! {
        #[test]
        fn transpose_is_involution(a in small_matrix()) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        #[test]
        fn matrix_times_inverse_is_identity(a in dominant_matrix()) {
            let inv = a.inverse().unwrap();
            let id = Matrix::identity(a.rows()).unwrap();
            prop_assert!(max_abs_diff(&a.multiply(&inv).unwrap(), &id) < EPSILON);
        }

        #[test]
        fn row_swap_negates_determinant((a, i, j) in swappable_square()) {
            let mut swapped = a.clone();
            swapped.swap_rows(i, j);
            let det = a.determinant().unwrap();
            let det_swapped = swapped.determinant().unwrap();
            prop_assert!((det + det_swapped).abs() <= 1e-9 * det.abs().max(1.0));
        }

        #[test]
        fn augmentation_never_lowers_rank((a, b) in square_system()) {
            let ab = a.augment(&b).unwrap();
            prop_assert!(ab.rank() >= a.rank());
        }

        #[test]
        fn rank_is_stable_under_echelon_form(a in small_matrix()) {
            prop_assert_eq!(a.rank(), a.forward_echelon().rank());
        }

        #[test]
        fn rank_bounded_by_shape(a in small_matrix()) {
            prop_assert!(a.rank() <= a.rows().min(a.cols()));
        }

        #[test]
        fn solve_classification_matches_ranks((a, b) in square_system()) {
            let rank_a = a.rank();
            let rank_ab = a.augment(&b).unwrap().rank();
            match a.solve(&b) {
                Ok(SolveOutcome::NoSolution) => prop_assert!(rank_ab > rank_a),
                Ok(SolveOutcome::Infinite) => {
                    prop_assert_eq!(rank_ab, rank_a);
                    prop_assert!(rank_a < a.cols());
                }
                Ok(SolveOutcome::Unique(x)) => {
                    prop_assert_eq!(rank_a, a.cols());
                    prop_assert_eq!(x.shape(), (a.cols(), 1));
                }
                Err(err) => prop_assert!(false, "unexpected error: {}", err),
            }
        }

        #[test]
        fn unique_solution_satisfies_system(a in dominant_matrix(), seed in proptest::collection::vec(small_entry(), 4)) {
            let n = a.rows();
            let b = Matrix::from_parts(n, 1, seed[..n].to_vec());
            let outcome = a.solve(&b).unwrap();
            let x = outcome.solution().unwrap();
            prop_assert!(max_abs_diff(&a.multiply(x).unwrap(), &b) < EPSILON);
        }
    }
}
