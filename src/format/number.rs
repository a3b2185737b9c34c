//! Shared display rounding. Every number that reaches step text or a result string goes
//! through this module.

/// Number of decimals shown in results and step text.
pub const DISPLAY_DECIMALS: usize = 4;

const SCALE: f64 = 10_000.0;

/// Round to [`DISPLAY_DECIMALS`] places, mapping `-0` to `0`.
pub fn round(value: f64) -> f64 {
    let rounded = (value * SCALE).round() / SCALE;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Exactly [`DISPLAY_DECIMALS`] decimals: `2.0000`, `-0.3333`.
pub fn fixed(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, round(value))
}

/// Rounded like [`fixed`] with trailing zeros trimmed: `2`, `0.5`, `-0.3333`.
pub fn compact(value: f64) -> String {
    let text = fixed(value);
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// [`compact`], wrapped in parentheses when negative so it can follow an operator.
pub fn operand(value: f64) -> String {
    let text = compact(value);
    if text.starts_with('-') {
        format!("({text})")
    } else {
        text
    }
}

/// True when `value` displays as zero.
pub fn is_display_zero(value: f64) -> bool {
    round(value) == 0.0
}
