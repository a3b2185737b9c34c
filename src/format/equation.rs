use crate::format::number::{compact, is_display_zero};
use crate::system::{ParsedEquation, ParsedSystem};

/// Render a signed sum such as `2x - y + 3`.
///
/// Each term is `(coefficient, variable)`; an empty variable marks a constant. Zero terms are
/// dropped, a unit coefficient on a variable is omitted, and an empty sum renders as `0`.
pub fn format_terms(terms: &[(f64, &str)]) -> String {
    let mut out = String::new();
    for &(coefficient, variable) in terms {
        if is_display_zero(coefficient) {
            continue;
        }
        let negative = coefficient < 0.0;
        let magnitude = compact(coefficient.abs());
        let body = if variable.is_empty() {
            magnitude
        } else if magnitude == "1" {
            variable.to_string()
        } else {
            format!("{magnitude}{variable}")
        };

        if out.is_empty() {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }
        out.push_str(&body);
    }

    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// Canonical `a x + b y = c` rendering. Spacing and term order follow the variable list, not
/// the source text.
pub fn format_equation(equation: &ParsedEquation) -> String {
    let terms: Vec<(f64, &str)> = equation
        .coefficients()
        .map(|(name, value)| (value, name))
        .collect();
    format!("{} = {}", format_terms(&terms), compact(equation.constant()))
}

/// One rendered equation per line.
pub fn format_system(system: &ParsedSystem) -> String {
    system
        .equations
        .iter()
        .map(format_equation)
        .collect::<Vec<_>>()
        .join("\n")
}
