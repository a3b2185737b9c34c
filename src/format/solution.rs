use crate::solver::Solution;

/// Render a `Solution` into numbered, human-readable lines for CLI/examples.
pub fn pretty_solution(solution: &Solution) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, step) in solution.steps.iter().enumerate() {
        lines.push(format!("Step {}: {}", i + 1, step.explanation));
        lines.extend(step.equations.lines().map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {line}")
            }
        }));
    }
    lines.push(match &solution.result {
        Some(result) => format!("Result: {result}"),
        None => "Result: no solution".to_string(),
    });
    lines
}
