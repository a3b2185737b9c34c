//! Step trace types handed to playback consumers, and the builder strategies use to emit them.

use serde::Serialize;

use crate::error::{Result, SolveError};
use crate::format::number::{fixed, round};
use crate::format::{format_equation, format_system};
use crate::system::ParsedSystem;

/// Result text for dependent systems.
pub const INFINITE_SOLUTIONS: &str = "Infinitely many solutions";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// What a 2D renderer needs to draw a step: the lines, and the intersection once it is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPayload {
    pub equations: Vec<String>,
    pub point: Option<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub explanation: String,
    pub equations: String,
    pub graph: Option<GraphPayload>,
}

/// Ordered steps plus the final result: `"x = …, y = …"`, [`INFINITE_SOLUTIONS`], or `None`
/// when the system has no solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub steps: Vec<Step>,
    pub result: Option<String>,
}

impl Solution {
    /// Solution point carried by the terminal step, if the system has a unique solution.
    pub fn point(&self) -> Option<Point> {
        self.steps
            .last()
            .and_then(|step| step.graph.as_ref())
            .and_then(|graph| graph.point)
    }

    pub fn is_unique(&self) -> bool {
        self.point().is_some()
    }

    pub fn is_infinite(&self) -> bool {
        self.result.as_deref() == Some(INFINITE_SOLUTIONS)
    }

    pub fn is_inconsistent(&self) -> bool {
        self.result.is_none()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub(crate) struct Trace {
    steps: Vec<Step>,
    rendered: Vec<String>,
    system_text: String,
    vx: String,
    vy: String,
}

impl Trace {
    /// Open a trace with the "starting system" step. `system` must already be validated.
    pub(crate) fn start(system: &ParsedSystem) -> Self {
        let rendered: Vec<String> = system.equations.iter().map(format_equation).collect();
        let system_text = format_system(system);
        let mut trace = Trace {
            steps: Vec::new(),
            rendered,
            system_text: system_text.clone(),
            vx: system.variables[0].clone(),
            vy: system.variables[1].clone(),
        };
        trace.push_graph("Starting system of equations", system_text, None);
        trace
    }

    pub(crate) fn vx(&self) -> &str {
        &self.vx
    }

    pub(crate) fn vy(&self) -> &str {
        &self.vy
    }

    pub(crate) fn push(&mut self, explanation: impl Into<String>, equations: impl Into<String>) {
        self.steps.push(Step {
            explanation: explanation.into(),
            equations: equations.into(),
            graph: None,
        });
    }

    fn push_graph(
        &mut self,
        explanation: impl Into<String>,
        equations: impl Into<String>,
        point: Option<Point>,
    ) {
        self.steps.push(Step {
            explanation: explanation.into(),
            equations: equations.into(),
            graph: Some(GraphPayload {
                equations: self.rendered.clone(),
                point,
            }),
        });
    }

    /// Close the trace with the solution point. Fails when either value overflowed the `f64`
    /// range on the way.
    pub(crate) fn unique(mut self, x: f64, y: f64) -> Result<Solution> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SolveError::validation(
                "Solution is not representable as a finite number",
            ));
        }
        let result = format!("{} = {}, {} = {}", self.vx, fixed(x), self.vy, fixed(y));
        let equations = format!("{} = {}\n{} = {}", self.vx, fixed(x), self.vy, fixed(y));
        let point = Point {
            x: round(x),
            y: round(y),
        };
        self.push_graph("Solution found", equations, Some(point));
        Ok(Solution {
            steps: self.steps,
            result: Some(result),
        })
    }

    pub(crate) fn dependent(mut self) -> Solution {
        let equations = format!("{}\ndet = 0", self.system_text);
        self.push_graph(
            "The determinant is 0 and the equations are proportional, so they describe the same \
             line: the system has infinitely many solutions",
            equations,
            None,
        );
        Solution {
            steps: self.steps,
            result: Some(INFINITE_SOLUTIONS.to_string()),
        }
    }

    pub(crate) fn inconsistent(mut self) -> Solution {
        let equations = format!("{}\ndet = 0", self.system_text);
        self.push_graph(
            "The determinant is 0 but the constants are not proportional, so the lines are \
             parallel: the system has no solution",
            equations,
            None,
        );
        Solution {
            steps: self.steps,
            result: None,
        }
    }
}
