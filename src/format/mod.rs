//! Formatting helpers for rendering equations, matrices and solver output.

pub mod equation;
pub mod matrix;
pub mod number;
pub mod solution;

pub use equation::{format_equation, format_system, format_terms};
pub use matrix::format_matrix;
pub use solution::pretty_solution;
