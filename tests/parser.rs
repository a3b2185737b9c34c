use eqtrace::{SolveError, parse_equation, parse_system};

const XY: [&str; 2] = ["x", "y"];

fn coefficients(line: &str) -> (f64, f64, f64) {
    let eq = parse_equation(line, &XY).expect("parse equation");
    (eq.coefficient("x"), eq.coefficient("y"), eq.constant())
}

fn expect_parse_error(line: &str) {
    match parse_equation(line, &XY) {
        Err(SolveError::Parse(_)) => {}
        other => panic!("expected parse error for {line:?}, got {other:?}"),
    }
}

#[test]
fn reads_signed_coefficients_and_constant() {
    assert_eq!(coefficients("3x - 2y = 7"), (3.0, -2.0, 7.0));
    assert_eq!(coefficients("-x + y = -4"), (-1.0, 1.0, -4.0));
    assert_eq!(coefficients("0.5x + 1.25y = .75"), (0.5, 1.25, 0.75));
    assert_eq!(coefficients("2*x - 3*y = 1"), (2.0, -3.0, 1.0));
}

#[test]
fn absent_variable_has_zero_coefficient() {
    assert_eq!(coefficients("4y = 8"), (0.0, 4.0, 8.0));
    assert_eq!(coefficients("x = 2"), (1.0, 0.0, 2.0));
}

#[test]
fn moves_terms_across_the_equals_sign() {
    assert_eq!(coefficients("2x = 3y + 4"), (2.0, -3.0, 4.0));
    assert_eq!(coefficients("x + 3 = y - 1"), (1.0, -1.0, -4.0));
    assert_eq!(coefficients("5 = x"), (-1.0, 0.0, -5.0));
}

#[test]
fn repeated_variable_terms_are_summed() {
    assert_eq!(coefficients("x + 2x - y = 5"), (3.0, -1.0, 5.0));
    assert_eq!(coefficients("x - 3x + y + y = 0"), (-2.0, 2.0, 0.0));
    assert_eq!(coefficients("x = 4x + 6"), (-3.0, 0.0, 6.0));
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(coefficients("  3 x-2  y=  7 "), (3.0, -2.0, 7.0));
}

#[test]
fn unknown_variables_are_ignored() {
    assert_eq!(coefficients("x + 3z = 4"), (1.0, 0.0, 4.0));
    assert_eq!(coefficients("2x + w - y = 1"), (2.0, -1.0, 1.0));
}

#[test]
fn equation_needs_exactly_one_equals_sign() {
    for line in ["x + y", "x = y = 2", "2x + y == 5"] {
        match parse_equation(line, &XY) {
            Err(SolveError::Parse(msg)) => assert_eq!(msg, "Invalid equation format"),
            other => panic!("expected format error for {line:?}, got {other:?}"),
        }
    }
}

#[test]
fn malformed_terms_are_hard_errors() {
    expect_parse_error("2$x = 3");
    expect_parse_error("x + = 2");
    expect_parse_error("x = ");
    expect_parse_error("= 4");
    expect_parse_error("2x + 3y = 5+");
    expect_parse_error("1.2.3x = 1");
}

#[test]
fn empty_input_is_rejected() {
    for input in ["", "   ", "\n\n  \n"] {
        match parse_system(input) {
            Err(SolveError::Parse(msg)) => assert_eq!(msg, "No equations provided"),
            other => panic!("expected parse error for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn system_skips_blank_lines_and_fixes_variables() {
    let system = parse_system("\n  2x + y = 5  \n\n x - y = 1\n").expect("parse system");
    assert_eq!(system.variables, vec!["x".to_string(), "y".to_string()]);
    assert_eq!(system.equations.len(), 2);
    assert_eq!(system.equations[0].source(), "2x + y = 5");
    assert_eq!(system.equations[1].coefficient("y"), -1.0);
}

#[test]
fn system_reports_the_failing_line() {
    assert!(matches!(
        parse_system("2x + y = 5\nx - y"),
        Err(SolveError::Parse(_))
    ));
}

#[test]
fn custom_variable_names() {
    let eq = parse_equation("2a - b = 3", &["a", "b"]).expect("parse equation");
    assert_eq!(eq.coefficient("a"), 2.0);
    assert_eq!(eq.coefficient("b"), -1.0);
    assert_eq!(eq.coefficient("x"), 0.0);
}

#[test]
fn exponent_literals_are_numbers() {
    assert_eq!(coefficients("x + y = 1e3"), (1.0, 1.0, 1000.0));
    assert_eq!(coefficients("2e3x - 1.5E-1y = 0"), (2000.0, -0.15, 0.0));
    assert_eq!(coefficients("x = 2e+2"), (1.0, 0.0, 200.0));
}

#[test]
fn number_followed_by_identifier() {
    // `e` with no digits after it is a variable name, not an exponent.
    assert_eq!(coefficients("2e + x = 1"), (1.0, 0.0, 1.0));
    assert_eq!(coefficients("3x2 + y = 1"), (0.0, 1.0, 1.0));
    assert_eq!(coefficients("4xy + y = 2"), (0.0, 1.0, 2.0));
}

#[test]
fn out_of_range_numbers_are_rejected() {
    let huge = format!("{}x + y = 1", "9".repeat(400));
    expect_parse_error(&huge);
    expect_parse_error("x + y = 1e999");
    expect_parse_error("1e400x = 1");
}

#[test]
fn accumulated_overflow_is_rejected() {
    match parse_equation("1e308x + 1e308x = 1", &XY) {
        Err(SolveError::Parse(msg)) => assert!(msg.contains("out of range"), "{msg}"),
        other => panic!("expected out-of-range error, got {other:?}"),
    }
    expect_parse_error("x = 1e308 + 1e308");
}
