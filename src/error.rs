use thiserror::Error;

/// Result type used by the tokenizer and both evaluators.
///
/// Every fallible step returns either a value of type `T` or the first
/// [`EvalError`] encountered while scanning the expression left to right.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents every way an expression can fail to evaluate.
///
/// The taxonomy is flat: no variant wraps another error. Malformed input is
/// always the caller's fault, so nothing here is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A character that is not whitespace, a digit, `.`, an operator or a
    /// parenthesis, or a `.` that is not part of a decimal literal.
    #[error("Unexpected character '{character}' at position {position}.")]
    UnexpectedChar {
        /// Zero-based offset of the character, counted in `char`s.
        position:  usize,
        /// The offending character.
        character: char,
    },
    /// A `(` was never closed, or a `)` has no matching `(`.
    #[error("Unbalanced parentheses.")]
    UnbalancedParens,
    /// An operand was expected but a binary operator, `)` or the end of the
    /// expression was found instead.
    #[error("Missing operand.")]
    MissingOperand,
    /// The expression was complete but more tokens followed it.
    #[error("Extra tokens after expression.")]
    TrailingTokens,
    /// The right operand of `/` was exactly zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The input was empty or contained only whitespace.
    #[error("Empty expression.")]
    EmptyExpression,
}
