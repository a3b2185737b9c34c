use super::{Method, Opening, Solution, Strategy, open};
use crate::error::Result;
use crate::format::format_matrix;
use crate::format::number::{compact, operand};
use crate::system::{CoefficientMatrix, ParsedSystem};

/// Cramer's rule: `x = det(A_x) / det(A)`, `y = det(A_y) / det(A)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cramer;

impl Strategy for Cramer {
    fn method(&self) -> Method {
        Method::Matrices
    }

    fn solve(&self, system: &ParsedSystem) -> Result<Solution> {
        let (mut trace, matrix, det) = match open(system)? {
            Opening::Settled(solution) => return Ok(solution),
            Opening::Proceed {
                trace,
                matrix,
                determinant,
            } => (trace, matrix, determinant),
        };
        let vx = trace.vx().to_string();
        let vy = trace.vy().to_string();

        let constants: Vec<Vec<f64>> = matrix.constants().into_iter().map(|c| vec![c]).collect();
        trace.push(
            "Write the system in matrix form A·X = B",
            format!(
                "{}\n\n{}",
                format_matrix("A", &matrix.coefficient_rows()),
                format_matrix("B", &constants)
            ),
        );

        trace.push(
            "Compute the determinant of A",
            determinant_line("A", &matrix),
        );

        let ax = matrix.with_constants_in_column(0);
        let ax_name = format!("A_{vx}");
        let det_x = ax.determinant();
        trace.push(
            format!("Replace the {vx}-column of A with B and compute det({ax_name})"),
            format!(
                "{}\n{}",
                format_matrix(&ax_name, &ax.coefficient_rows()),
                determinant_line(&ax_name, &ax)
            ),
        );

        let ay = matrix.with_constants_in_column(1);
        let ay_name = format!("A_{vy}");
        let det_y = ay.determinant();
        trace.push(
            format!("Replace the {vy}-column of A with B and compute det({ay_name})"),
            format!(
                "{}\n{}",
                format_matrix(&ay_name, &ay.coefficient_rows()),
                determinant_line(&ay_name, &ay)
            ),
        );

        let x = det_x / det;
        let y = det_y / det;
        trace.push(
            "Apply Cramer's rule",
            format!(
                "{vx} = det({ax_name}) / det(A) = {} / {} = {}\n\
                 {vy} = det({ay_name}) / det(A) = {} / {} = {}",
                compact(det_x),
                operand(det),
                compact(x),
                compact(det_y),
                operand(det),
                compact(y)
            ),
        );

        trace.unique(x, y)
    }
}

/// `det(M) = a·d - c·b = value` for a 2x2 matrix.
fn determinant_line(name: &str, matrix: &CoefficientMatrix<2>) -> String {
    let [a, b] = matrix.row(0).coeffs;
    let [c, d] = matrix.row(1).coeffs;
    format!(
        "det({name}) = {}·{} - {}·{} = {}",
        operand(a),
        operand(d),
        operand(c),
        operand(b),
        compact(matrix.determinant())
    )
}
