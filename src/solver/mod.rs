//! Step-by-step solving strategies for systems of two linear equations.

mod classify;
mod cramer;
mod elimination;
mod substitution;
mod trace;

use std::fmt;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::{Result, SolveError};
use crate::format::format_terms;
use crate::format::number::{compact, operand};
use crate::system::{CoefficientMatrix, ParsedSystem};

pub use classify::{Consistency, classify};
pub use cramer::Cramer;
pub use elimination::Elimination;
pub use substitution::Substitution;
pub use trace::{GraphPayload, INFINITE_SOLUTIONS, Point, Solution, Step};

pub(crate) use trace::Trace;

/// Solving method selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Elimination,
    Substitution,
    Matrices,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Elimination, Method::Substitution, Method::Matrices];

    /// Map a selector string to a method. Anything unrecognized selects elimination.
    pub fn from_selector(selector: &str) -> Method {
        let trimmed = selector.trim();
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| {
                warn!(selector, "unknown method, falling back to elimination");
                Method::Elimination
            })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Elimination => "elimination",
            Method::Substitution => "substitution",
            Method::Matrices => "matrices",
        }
    }

    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Method::Elimination => &Elimination,
            Method::Substitution => &Substitution,
            Method::Matrices => &Cramer,
        }
    }
}

impl From<&str> for Method {
    fn from(selector: &str) -> Self {
        Method::from_selector(selector)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A solving method that turns a system into an ordered step trace.
///
/// Implementations validate the system, emit the starting step and run [`classify`] before
/// any method-specific work, so degenerate systems end the same way under every method.
pub trait Strategy {
    fn method(&self) -> Method;

    fn solve(&self, system: &ParsedSystem) -> Result<Solution>;
}

/// Solve `system` with `method`.
///
/// Fails with a validation error unless the system has exactly two equations over exactly
/// two variables. No-solution and infinite-solution systems are not errors; they end in a
/// terminal step.
#[instrument(skip(system), fields(equations = system.equations.len()))]
pub fn solve_system(system: &ParsedSystem, method: Method) -> Result<Solution> {
    let solution = method.strategy().solve(system)?;
    info!(
        steps = solution.steps.len(),
        result = solution.result.as_deref().unwrap_or("no solution"),
        "system solved"
    );
    Ok(solution)
}

pub fn validate(system: &ParsedSystem) -> Result<()> {
    if system.equations.is_empty() {
        return Err(SolveError::validation("System has no equations"));
    }
    if system.equations.len() != 2 {
        return Err(SolveError::validation(format!(
            "Expected exactly 2 equations, found {}",
            system.equations.len()
        )));
    }
    if system.variables.len() != 2 {
        return Err(SolveError::validation(format!(
            "Expected exactly 2 variables, found {}",
            system.variables.len()
        )));
    }
    Ok(())
}

/// State after the shared opening steps of every strategy.
pub(crate) enum Opening {
    /// Degenerate system; the trace already ends in its terminal step.
    Settled(Solution),
    Proceed {
        trace: Trace,
        matrix: CoefficientMatrix<2>,
        determinant: f64,
    },
}

pub(crate) fn open(system: &ParsedSystem) -> Result<Opening> {
    validate(system)?;
    let matrix = CoefficientMatrix::<2>::from_system(system)?;
    let determinant = matrix.determinant();
    if !determinant.is_finite() {
        return Err(SolveError::validation(format!(
            "Determinant overflows: coefficients are too large ({determinant})"
        )));
    }
    let trace = Trace::start(system);
    Ok(match classify(&matrix) {
        Consistency::Unique { determinant } => Opening::Proceed {
            trace,
            matrix,
            determinant,
        },
        Consistency::Dependent => Opening::Settled(trace.dependent()),
        Consistency::Inconsistent => Opening::Settled(trace.inconsistent()),
    })
}

/// `lhs = value / divisor` followed by the quotient.
pub(crate) fn division_lines(lhs: &str, value: f64, divisor: f64) -> String {
    format!(
        "{lhs} = {} / {}\n{lhs} = {}",
        compact(value),
        operand(divisor),
        compact(value / divisor)
    )
}

/// `a·vx + b·(value) = c`, then `a·vx = c - b·value`, then `vx = x`.
pub(crate) fn back_substitution_lines(
    vx: &str,
    (a, b, c): (f64, f64, f64),
    value: f64,
) -> String {
    let substituted = format!("({})", compact(value));
    let remainder = c - b * value;
    format!(
        "{} = {}\n{} = {}\n{vx} = {}",
        format_terms(&[(a, vx), (b, substituted.as_str())]),
        compact(c),
        format_terms(&[(a, vx)]),
        compact(remainder),
        compact(remainder / a)
    )
}
