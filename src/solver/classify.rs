use approx::relative_eq;
use tracing::debug;

use crate::system::CoefficientMatrix;

/// Solvability of a 2x2 system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Consistency {
    Unique { determinant: f64 },
    /// Determinant 0 and every row proportional: infinitely many solutions.
    Dependent,
    /// Determinant 0 with contradicting constants: no solution.
    Inconsistent,
}

/// Relative tolerance for comparing two products of coefficients.
const PRODUCT_TOLERANCE: f64 = 1e-12;

/// `p == q` up to rounding in the last few bits. Exact zeros still only match zero.
fn products_match(p: f64, q: f64) -> bool {
    relative_eq!(p, q, epsilon = 0.0, max_relative = PRODUCT_TOLERANCE)
}

/// Determinant test shared by every strategy. Proportionality is checked with cross
/// products, so zero coefficients never divide. Products are compared with a relative
/// tolerance so decimal input such as `0.1x + 0.2y = 0.3` and `0.3x + 0.6y = 0.9` is
/// recognized as the same line.
pub fn classify(matrix: &CoefficientMatrix<2>) -> Consistency {
    let [a1, b1] = matrix.row(0).coeffs;
    let [a2, b2] = matrix.row(1).coeffs;
    let (c1, c2) = (matrix.constant(0), matrix.constant(1));

    let determinant = matrix.determinant();
    if !products_match(a1 * b2, a2 * b1) {
        debug!(determinant, "unique solution");
        return Consistency::Unique { determinant };
    }

    // 0 = c with c != 0 contradicts itself regardless of the other row.
    let contradiction = |a: f64, b: f64, c: f64| a == 0.0 && b == 0.0 && c != 0.0;
    let consistency = if contradiction(a1, b1, c1) || contradiction(a2, b2, c2) {
        Consistency::Inconsistent
    } else if products_match(a1 * c2, a2 * c1) && products_match(b1 * c2, b2 * c1) {
        Consistency::Dependent
    } else {
        Consistency::Inconsistent
    };
    debug!(?consistency, "singular system");
    consistency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::Row;

    fn matrix(r1: (f64, f64, f64), r2: (f64, f64, f64)) -> CoefficientMatrix<2> {
        CoefficientMatrix::from_rows(vec![
            Row {
                coeffs: [r1.0, r1.1],
                constant: r1.2,
            },
            Row {
                coeffs: [r2.0, r2.1],
                constant: r2.2,
            },
        ])
        .unwrap()
    }

    #[test]
    fn nonzero_determinant_is_unique() {
        let result = classify(&matrix((2.0, 1.0, 5.0), (1.0, -1.0, 1.0)));
        assert_eq!(result, Consistency::Unique { determinant: -3.0 });
    }

    #[test]
    fn proportional_rows_are_dependent() {
        let result = classify(&matrix((2.0, 1.0, 5.0), (4.0, 2.0, 10.0)));
        assert_eq!(result, Consistency::Dependent);
    }

    #[test]
    fn parallel_rows_are_inconsistent() {
        let result = classify(&matrix((2.0, 1.0, 5.0), (2.0, 1.0, 8.0)));
        assert_eq!(result, Consistency::Inconsistent);
    }

    #[test]
    fn zero_coefficients_do_not_divide() {
        // x = 3 and 2x = 6: both y-coefficients are 0.
        assert_eq!(
            classify(&matrix((1.0, 0.0, 3.0), (2.0, 0.0, 6.0))),
            Consistency::Dependent
        );
        assert_eq!(
            classify(&matrix((1.0, 0.0, 3.0), (2.0, 0.0, 7.0))),
            Consistency::Inconsistent
        );
    }

    #[test]
    fn decimal_rounding_does_not_break_proportionality() {
        assert_eq!(
            classify(&matrix((0.1, 0.2, 0.3), (0.3, 0.6, 0.9))),
            Consistency::Dependent
        );
        assert_eq!(
            classify(&matrix((0.1, 0.2, 0.3), (0.3, 0.6, 1.0))),
            Consistency::Inconsistent
        );
    }

    #[test]
    fn tiny_nonzero_determinant_is_still_unique() {
        let result = classify(&matrix((1e-9, 0.0, 1.0), (0.0, 1e-9, 1.0)));
        assert!(matches!(result, Consistency::Unique { .. }));
    }

    #[test]
    fn empty_rows() {
        assert_eq!(
            classify(&matrix((0.0, 0.0, 0.0), (0.0, 0.0, 0.0))),
            Consistency::Dependent
        );
        assert_eq!(
            classify(&matrix((0.0, 0.0, 5.0), (0.0, 0.0, 5.0))),
            Consistency::Inconsistent
        );
        assert_eq!(
            classify(&matrix((1.0, 1.0, 2.0), (0.0, 0.0, 0.0))),
            Consistency::Dependent
        );
    }
}
