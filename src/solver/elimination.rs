use tracing::debug;

use super::{Method, Opening, Solution, Strategy, back_substitution_lines, division_lines, open};
use crate::error::Result;
use crate::format::format_equation;
use crate::format::number::{compact, operand};
use crate::system::ParsedSystem;

/// Largest magnitude for which the integer LCM is used; beyond it the product stands in.
const EXACT_LCM_LIMIT: f64 = 2_147_483_648.0;

/// Scale the equations so the x-coefficients cancel, add them, then back-substitute.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elimination;

impl Strategy for Elimination {
    fn method(&self) -> Method {
        Method::Elimination
    }

    fn solve(&self, system: &ParsedSystem) -> Result<Solution> {
        let (mut trace, matrix) = match open(system)? {
            Opening::Settled(solution) => return Ok(solution),
            Opening::Proceed { trace, matrix, .. } => (trace, matrix),
        };
        let vx = trace.vx().to_string();
        let vy = trace.vy().to_string();
        let (eq1, eq2) = (&system.equations[0], &system.equations[1]);
        let [a1, b1] = matrix.row(0).coeffs;
        let [a2, b2] = matrix.row(1).coeffs;
        let (c1, c2) = (matrix.constant(0), matrix.constant(1));

        let (y_coef, y_const) = if a1 == 0.0 || a2 == 0.0 {
            let (idx, eq) = if a1 == 0.0 { (1, eq1) } else { (2, eq2) };
            trace.push(
                format!("Equation {idx} has no {vx}-term, so it already involves {vy} alone"),
                format_equation(eq),
            );
            if a1 == 0.0 { (b1, c1) } else { (b2, c2) }
        } else {
            let lcm = lcm(a1.abs(), a2.abs());
            let m1 = lcm / a1.abs();
            let mut m2 = lcm / a2.abs();
            if a1.signum() == a2.signum() {
                m2 = -m2;
            }
            debug!(lcm, m1, m2, "scaling factors");

            let s1 = eq1.scaled(m1);
            let s2 = eq2.scaled(m2);
            trace.push(
                format!(
                    "Multiply equation 1 by {} and equation 2 by {} so the {vx}-coefficients \
                     become {} and {}",
                    compact(m1),
                    compact(m2),
                    compact(m1 * a1),
                    compact(m2 * a2)
                ),
                format!(
                    "{} × ({})\n{} × ({})\n\n{}\n{}",
                    operand(m1),
                    format_equation(eq1),
                    operand(m2),
                    format_equation(eq2),
                    format_equation(&s1),
                    format_equation(&s2)
                ),
            );

            let sum = s1.added(&s2);
            trace.push(
                format!("Add the equations to eliminate {vx}"),
                format!(
                    "({}) + ({})\n{}",
                    format_equation(&s1),
                    format_equation(&s2),
                    format_equation(&sum)
                ),
            );
            (sum.coefficient(vy.as_str()), sum.constant())
        };

        let y = y_const / y_coef;
        trace.push(
            format!("Divide both sides by {} to solve for {vy}", compact(y_coef)),
            division_lines(&vy, y_const, y_coef),
        );

        let (idx, row) = if a1 != 0.0 {
            (1, (a1, b1, c1))
        } else {
            (2, (a2, b2, c2))
        };
        let x = (row.2 - row.1 * y) / row.0;
        trace.push(
            format!(
                "Substitute {vy} = {} into equation {idx} and solve for {vx}",
                compact(y)
            ),
            back_substitution_lines(&vx, row, y),
        );

        trace.unique(x, y)
    }
}

/// Least common multiple of two magnitudes. Falls back to their product when either is not
/// a whole number.
fn lcm(a: f64, b: f64) -> f64 {
    let whole = |v: f64| v.fract() == 0.0 && v > 0.0 && v < EXACT_LCM_LIMIT;
    if whole(a) && whole(b) {
        num_integer::lcm(a as i64, b as i64) as f64
    } else {
        a * b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_system;

    #[test]
    fn lcm_of_whole_and_fractional_magnitudes() {
        assert_eq!(lcm(4.0, 6.0), 12.0);
        assert_eq!(lcm(2.0, 1.0), 2.0);
        assert_eq!(lcm(0.5, 3.0), 1.5);
    }

    #[test]
    fn scales_to_opposite_x_coefficients() {
        let system = parse_system("2x + y = 5\nx - y = 1").unwrap();
        let solution = Elimination.solve(&system).unwrap();
        let scale = &solution.steps[1];
        assert!(scale.explanation.contains("become 2 and -2"), "{}", scale.explanation);
        assert!(scale.equations.ends_with("2x + y = 5\n-2x + 2y = -2"));
        assert_eq!(solution.steps[2].equations.lines().last(), Some("3y = 3"));
    }

    #[test]
    fn equation_without_x_skips_scaling() {
        let system = parse_system("2y = 4\nx + y = 3").unwrap();
        let solution = Elimination.solve(&system).unwrap();
        assert!(solution.steps[1].explanation.starts_with("Equation 1 has no x-term"));
        assert!(solution.steps[3].explanation.contains("into equation 2"));
        assert_eq!(solution.result.as_deref(), Some("x = 1.0000, y = 2.0000"));
    }
}
