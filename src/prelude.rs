//! String-based convenience API for quick experimentation.

pub use crate::ui::{parse, solve, solve_json, solve_lines};
