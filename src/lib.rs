//! Parser and step-by-step solver for systems of two linear equations.
//!
//! Text such as `"2x + y = 5\nx - y = 1"` is parsed into a [`ParsedSystem`], then solved by
//! elimination, substitution or Cramer's rule into a [`Solution`]: an ordered trace of
//! algebra steps ending in a unique solution, no solution, or infinitely many solutions.

pub mod error;
pub mod format;
pub mod parser;
pub mod playback;
pub mod prelude;
pub mod solver;
pub mod system;
mod ui;

pub use error::{Result, SolveError};
pub use format::number::DISPLAY_DECIMALS;
pub use format::{format_equation, format_matrix, format_system, pretty_solution};
pub use parser::{parse_equation, parse_system};
pub use playback::StepCursor;
pub use solver::{
    Consistency, Cramer, Elimination, GraphPayload, INFINITE_SOLUTIONS, Method, Point, Solution,
    Step, Strategy, Substitution, classify, solve_system,
};
pub use system::{CoefficientMatrix, DEFAULT_VARIABLES, ParsedEquation, ParsedSystem, Row};
