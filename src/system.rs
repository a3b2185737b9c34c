//! Coefficient model for parsed linear systems.

use serde::Serialize;

use crate::error::{Result, SolveError};

/// Variable names used when parsing free text.
pub const DEFAULT_VARIABLES: [&str; 2] = ["x", "y"];

/// One linear equation in `a*x + b*y + ... = c` form.
///
/// Coefficients are keyed by variable name in the order of the system's variable list. A
/// variable that never appeared in the source text has coefficient 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedEquation {
    coefficients: Vec<(String, f64)>,
    constant: f64,
    source: String,
}

impl ParsedEquation {
    pub fn new<S: AsRef<str>>(
        variables: &[S],
        coefficients: &[f64],
        constant: f64,
        source: impl Into<String>,
    ) -> Self {
        let coefficients = variables
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let value = coefficients.get(i).copied().unwrap_or(0.0);
                (v.as_ref().to_string(), value)
            })
            .collect();
        ParsedEquation {
            coefficients,
            constant,
            source: source.into(),
        }
    }

    /// Build an equation from `(variable, coefficient)` pairs with no source text.
    pub fn from_terms(terms: &[(&str, f64)], constant: f64) -> Self {
        ParsedEquation {
            coefficients: terms
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
            constant,
            source: String::new(),
        }
    }

    pub fn coefficient(&self, variable: &str) -> f64 {
        self.coefficients
            .iter()
            .find(|(name, _)| name == variable)
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }

    pub fn coefficients(&self) -> impl Iterator<Item = (&str, f64)> {
        self.coefficients
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.coefficients.iter().map(|(name, _)| name.as_str())
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// The text this equation was parsed from. Empty for derived equations.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Multiply both sides by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        ParsedEquation {
            coefficients: self
                .coefficients
                .iter()
                .map(|(name, value)| (name.clone(), value * factor))
                .collect(),
            constant: self.constant * factor,
            source: String::new(),
        }
    }

    /// Add `other` to this equation side by side. Variables missing from `self` are appended.
    pub fn added(&self, other: &ParsedEquation) -> Self {
        let mut coefficients = self.coefficients.clone();
        for (name, value) in other.coefficients() {
            match coefficients.iter_mut().find(|(n, _)| n == name) {
                Some((_, existing)) => *existing += value,
                None => coefficients.push((name.to_string(), value)),
            }
        }
        ParsedEquation {
            coefficients,
            constant: self.constant + other.constant,
            source: String::new(),
        }
    }
}

/// An ordered list of equations over an ordered list of variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedSystem {
    pub equations: Vec<ParsedEquation>,
    pub variables: Vec<String>,
}

impl ParsedSystem {
    pub fn new(equations: Vec<ParsedEquation>, variables: Vec<String>) -> Self {
        ParsedSystem {
            equations,
            variables,
        }
    }
}

/// One row of a coefficient matrix: `coeffs · X = constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<const N: usize> {
    pub coeffs: [f64; N],
    pub constant: f64,
}

/// Square coefficient matrix stored as an arena of fixed-width rows, with the constant
/// column kept alongside each row.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientMatrix<const N: usize> {
    rows: Vec<Row<N>>,
}

impl<const N: usize> CoefficientMatrix<N> {
    pub fn from_rows(rows: Vec<Row<N>>) -> Result<Self> {
        if rows.len() != N {
            return Err(SolveError::validation(format!(
                "expected {N} equations, found {}",
                rows.len()
            )));
        }
        Ok(CoefficientMatrix { rows })
    }

    /// Read the coefficients of `system` in variable order.
    pub fn from_system(system: &ParsedSystem) -> Result<Self> {
        if system.variables.len() != N {
            return Err(SolveError::validation(format!(
                "expected {N} variables, found {}",
                system.variables.len()
            )));
        }
        let rows = system
            .equations
            .iter()
            .map(|eq| {
                let mut coeffs = [0.0; N];
                for (slot, var) in coeffs.iter_mut().zip(system.variables.iter()) {
                    *slot = eq.coefficient(var);
                }
                Row {
                    coeffs,
                    constant: eq.constant(),
                }
            })
            .collect();
        Self::from_rows(rows)
    }

    pub fn row(&self, row: usize) -> &Row<N> {
        &self.rows[row]
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row].coeffs[col]
    }

    pub fn constant(&self, row: usize) -> f64 {
        self.rows[row].constant
    }

    pub fn column(&self, col: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r.coeffs[col]).collect()
    }

    pub fn constants(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.constant).collect()
    }

    /// Copy of this matrix with coefficient column `col` replaced by the constant column.
    pub fn with_constants_in_column(&self, col: usize) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|r| {
                let mut coeffs = r.coeffs;
                coeffs[col] = r.constant;
                Row {
                    coeffs,
                    constant: r.constant,
                }
            })
            .collect();
        CoefficientMatrix { rows }
    }

    /// Coefficient rows as nested vectors, for rendering.
    pub fn coefficient_rows(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|r| r.coeffs.to_vec()).collect()
    }
}

impl CoefficientMatrix<2> {
    pub fn determinant(&self) -> f64 {
        let [a1, b1] = self.rows[0].coeffs;
        let [a2, b2] = self.rows[1].coeffs;
        a1 * b2 - a2 * b1
    }
}
