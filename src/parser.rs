use crate::error::{Result, SolveError};
use crate::system::{DEFAULT_VARIABLES, ParsedEquation, ParsedSystem};
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{alpha1, alphanumeric0, char, digit0, digit1, one_of};
use nom::combinator::{all_consuming, map, map_opt, opt, recognize};
use nom::error::{VerboseError, convert_error};
use nom::multi::many0;
use nom::sequence::{pair, preceded, tuple};
use tracing::debug;

/// A signed monomial as written on one side of an equation.
#[derive(Debug, Clone, PartialEq)]
enum Term<'a> {
    Variable { coefficient: f64, name: &'a str },
    Constant(f64),
}

/// Parse one equation per non-empty line over the fixed variables `x` and `y`.
pub fn parse_system(text: &str) -> Result<ParsedSystem> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(SolveError::parse("No equations provided"));
    }

    let equations = lines
        .iter()
        .map(|line| parse_equation(line, &DEFAULT_VARIABLES))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParsedSystem::new(
        equations,
        DEFAULT_VARIABLES.iter().map(|v| v.to_string()).collect(),
    ))
}

/// Parse `line` into `a*x + b*y = c` form over `variables`.
///
/// Terms on the right-hand side move to the left with their sign flipped and constants move
/// to the right. A variable written more than once on a side has its signed contributions
/// summed, so `x + 2x - y = 5` yields `x: 3, y: -1`. Identifiers that are not in `variables`
/// are ignored.
pub fn parse_equation<S: AsRef<str>>(line: &str, variables: &[S]) -> Result<ParsedEquation> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let sides: Vec<&str> = compact.split('=').collect();
    let [lhs, rhs] = sides.as_slice() else {
        return Err(SolveError::parse("Invalid equation format"));
    };

    let mut coefficients = vec![0.0; variables.len()];
    let mut constant = 0.0;
    for (side, sign) in [(*lhs, 1.0), (*rhs, -1.0)] {
        for term in parse_side(side)? {
            match term {
                Term::Variable { coefficient, name } => {
                    match variables.iter().position(|v| v.as_ref() == name) {
                        Some(idx) => coefficients[idx] += sign * coefficient,
                        None => debug!(term = name, line, "ignoring unknown variable"),
                    }
                }
                Term::Constant(value) => constant -= sign * value,
            }
        }
    }

    if !constant.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
        return Err(SolveError::parse(format!(
            "Numeric value out of range in \"{}\"",
            line.trim()
        )));
    }

    Ok(ParsedEquation::new(variables, &coefficients, constant, line.trim()))
}

fn parse_side(side: &str) -> Result<Vec<Term<'_>>> {
    match all_consuming(terms)(side) {
        Ok((_, terms)) => Ok(terms),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(SolveError::parse(format!(
            "Invalid expression \"{side}\":\n{}",
            convert_error(side, e)
        ))),
        Err(nom::Err::Incomplete(_)) => {
            Err(SolveError::parse(format!("Incomplete expression \"{side}\"")))
        }
    }
}

fn terms(input: &str) -> IResult<&str, Vec<Term<'_>>, VerboseError<&str>> {
    let (rest, first) = pair(opt(sign), term)(input)?;
    let (rest, tail) = many0(pair(map(sign, Some), term))(rest)?;

    let terms = std::iter::once(first)
        .chain(tail)
        .map(|(sign, term)| match sign {
            Some('-') => negate(term),
            _ => term,
        })
        .collect();
    Ok((rest, terms))
}

fn negate(term: Term<'_>) -> Term<'_> {
    match term {
        Term::Variable { coefficient, name } => Term::Variable {
            coefficient: -coefficient,
            name,
        },
        Term::Constant(value) => Term::Constant(-value),
    }
}

fn sign(input: &str) -> IResult<&str, char, VerboseError<&str>> {
    alt((char('+'), char('-')))(input)
}

/// A coefficient, a variable, or both (`3`, `x`, `3x`, `3*x`, `2.5y`).
fn term(input: &str) -> IResult<&str, Term<'_>, VerboseError<&str>> {
    map_opt(
        pair(opt(number), opt(preceded(opt(char('*')), identifier))),
        |(value, name)| match (value, name) {
            (value, Some(name)) => Some(Term::Variable {
                coefficient: value.unwrap_or(1.0),
                name,
            }),
            (Some(value), None) => Some(Term::Constant(value)),
            (None, None) => None,
        },
    )(input)
}

/// Decimal literal with an optional exponent (`2`, `2.5`, `.5`, `1e3`, `2.5E-2`). Literals
/// outside the finite `f64` range are rejected.
fn number(input: &str) -> IResult<&str, f64, VerboseError<&str>> {
    map_opt(
        recognize(pair(
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        )),
        |text: &str| text.parse::<f64>().ok().filter(|v| v.is_finite()),
    )(input)
}

fn identifier(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(pair(alpha1, alphanumeric0))(input)
}
