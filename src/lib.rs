//! # infixa
//!
//! infixa evaluates infix arithmetic expressions written as text.
//! It tokenizes the input, resolves operator precedence with one of two
//! interchangeable algorithms, and returns the result as an integer when it
//! is a whole number or as a float otherwise.
//!
//! Supported syntax: decimal literals (`12`, `3.5`), the binary operators
//! `+ - * / ^`, prefix `-` and parentheses. `^` is right-associative and
//! prefix `-` binds tighter than `^`, so `-2 ^ 2` is `4`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type shared by every evaluation stage.
///
/// This module defines [`EvalError`], the flat taxonomy of failures that the
/// tokenizer and both evaluators can report, and the [`error::EvalResult`]
/// alias. Errors carry enough detail (such as the offending character and its
/// offset) to be shown to a user directly.
pub mod error;
/// Tokenizing, operator table, evaluation strategies and result values.
///
/// This module ties together every stage between the raw expression string
/// and the final [`Number`]. Each stage is usable on its own, which is what
/// the tests and benchmarks rely on.
///
/// # Responsibilities
/// - Converts expression text into tokens.
/// - Defines operator precedence, associativity and arity.
/// - Evaluates tokens with precedence climbing or shunting-yard.
/// - Normalizes the raw `f64` outcome into an integer or a float.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use error::EvalError;
pub use interpreter::{
    evaluator::{Algorithm, Evaluator},
    lexer::{Token, tokenize},
    value::core::{Number, normalize},
};

/// Evaluates one arithmetic expression with the selected algorithm.
///
/// The expression is tokenized once, evaluated by the chosen strategy and
/// normalized: whole results that fit in an `i64` come back as
/// [`Number::Integer`], everything else as [`Number::Float`]. No state is
/// kept between calls.
///
/// # Errors
/// Returns the first [`EvalError`] encountered scanning the expression left
/// to right.
///
/// # Examples
/// ```
/// use infixa::{Algorithm, EvalError, Number, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4", Algorithm::PrecedenceClimbing),
///            Ok(Number::Integer(14)));
/// assert_eq!(evaluate("5 / 2", Algorithm::ShuntingYard),
///            Ok(Number::Float(2.5)));
///
/// // Errors are values, not panics.
/// assert_eq!(evaluate("1 / 0", Algorithm::default()),
///            Err(EvalError::DivisionByZero));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(%algorithm))]
pub fn evaluate(expression: &str, algorithm: Algorithm) -> Result<Number, EvalError> {
    let outcome = tokenize(expression).and_then(|tokens| algorithm.evaluator().evaluate(&tokens));

    match outcome {
        Ok(raw) => {
            let number = normalize(raw);
            tracing::debug!(raw, %number, "evaluated expression");
            Ok(number)
        },
        Err(e) => {
            tracing::debug!(error = %e, "evaluation failed");
            Err(e)
        },
    }
}
