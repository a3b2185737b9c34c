//! String-based UI helpers: text and a method selector in, a step trace out.

use crate::error::Result;
use crate::format::pretty_solution;
use crate::parser::parse_system;
use crate::solver::{Method, Solution, solve_system};
use crate::system::ParsedSystem;

pub fn parse(input: &str) -> Result<ParsedSystem> {
    parse_system(input)
}

/// Parse `input` and solve it with the method named by `method`. Unknown method names fall
/// back to elimination.
pub fn solve(input: &str, method: &str) -> Result<Solution> {
    let system = parse_system(input)?;
    solve_system(&system, Method::from_selector(method))
}

pub fn solve_lines(input: &str, method: &str) -> Result<Vec<String>> {
    Ok(pretty_solution(&solve(input, method)?))
}

pub fn solve_json(input: &str, method: &str) -> Result<String> {
    solve(input, method)?.to_json()
}
