use super::{Method, Opening, Solution, Strategy, division_lines, open};
use crate::error::Result;
use crate::format::{format_equation, format_terms};
use crate::format::number::compact;
use crate::system::ParsedSystem;

/// Isolate x in one equation, substitute the expression into the other, solve for y, then
/// back-substitute.
#[derive(Debug, Clone, Copy, Default)]
pub struct Substitution;

impl Strategy for Substitution {
    fn method(&self) -> Method {
        Method::Substitution
    }

    fn solve(&self, system: &ParsedSystem) -> Result<Solution> {
        let (mut trace, matrix) = match open(system)? {
            Opening::Settled(solution) => return Ok(solution),
            Opening::Proceed { trace, matrix, .. } => (trace, matrix),
        };
        let vx = trace.vx().to_string();
        let vy = trace.vy().to_string();

        let i = isolation_row(matrix.get(0, 0), matrix.get(1, 0));
        let j = 1 - i;
        let [ai, bi] = matrix.row(i).coeffs;
        let ci = matrix.constant(i);
        let [aj, bj] = matrix.row(j).coeffs;
        let cj = matrix.constant(j);

        // x = p + q*y
        let p = ci / ai;
        let q = -bi / ai;
        let expr = format_terms(&[(p, ""), (q, vy.as_str())]);

        let source = format_equation(&system.equations[i]);
        if bi == 0.0 {
            trace.push(
                format!("Equation {} has no {vy}-term, so {vx} is a constant", i + 1),
                format!("{source}\n{vx} = {}", compact(p)),
            );
        } else {
            // Show `ai*x = ci - bi*y` only when dividing by ai is a real step.
            let moved = if ai == 1.0 {
                String::new()
            } else {
                format!(
                    "{} = {}\n",
                    format_terms(&[(ai, vx.as_str())]),
                    format_terms(&[(ci, ""), (-bi, vy.as_str())])
                )
            };
            trace.push(
                format!("Isolate {vx} in equation {} in terms of {vy}", i + 1),
                format!("{source}\n{moved}{vx} = {expr}"),
            );
        }

        let grouped = format!("({expr})");
        trace.push(
            format!("Substitute {vx} = {expr} into equation {}", j + 1),
            format!(
                "{} = {}",
                format_terms(&[(aj, grouped.as_str()), (bj, vy.as_str())]),
                compact(cj)
            ),
        );

        trace.push(
            format!("Expand {}", format_terms(&[(aj, grouped.as_str())])),
            format!(
                "{} = {}",
                format_terms(&[(aj * p, ""), (aj * q, vy.as_str()), (bj, vy.as_str())]),
                compact(cj)
            ),
        );

        let y_coef = aj * q + bj;
        let y_const = cj - aj * p;
        trace.push(
            format!("Collect the {vy}-terms and move the constant to the right-hand side"),
            format!(
                "{} = {}\n{} = {}",
                format_terms(&[(y_coef, vy.as_str()), (aj * p, "")]),
                compact(cj),
                format_terms(&[(y_coef, vy.as_str())]),
                compact(y_const)
            ),
        );

        let y = y_const / y_coef;
        trace.push(
            format!("Divide both sides by {} to solve for {vy}", compact(y_coef)),
            division_lines(&vy, y_const, y_coef),
        );

        let x = p + q * y;
        let substituted = format!("({})", compact(y));
        trace.push(
            format!("Substitute {vy} = {} into {vx} = {expr}", compact(y)),
            format!(
                "{vx} = {}\n{vx} = {}",
                format_terms(&[(p, ""), (q, substituted.as_str())]),
                compact(x)
            ),
        );

        trace.unique(x, y)
    }
}

/// Row to isolate x from: the smaller nonzero x-coefficient, first row on ties.
fn isolation_row(a1: f64, a2: f64) -> usize {
    if a1 != 0.0 && (a2 == 0.0 || a1.abs() <= a2.abs()) {
        0
    } else {
        1
    }
}
