use std::iter::Peekable;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::Evaluator,
        lexer::Token,
        operator::{apply_binary, apply_unary},
    },
    util::stack::ensure_sufficient_stack,
};

/// Precedence-climbing strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecedenceClimbing;

impl Evaluator for PrecedenceClimbing {
    fn evaluate(&self, tokens: &[Token]) -> EvalResult<f64> {
        evaluate_pc(tokens)
    }
}

/// Evaluates a token sequence by precedence climbing.
///
/// The whole sequence must form exactly one expression.
///
/// # Errors
/// - [`EvalError::MissingOperand`] where an operand was expected but not found.
/// - [`EvalError::UnbalancedParens`] for an unclosed `(` or a stray `)`.
/// - [`EvalError::TrailingTokens`] if tokens remain after a complete
///   expression.
/// - [`EvalError::DivisionByZero`] from `/`.
///
/// # Example
/// ```
/// use infixa::interpreter::{evaluator::evaluate_pc, lexer::tokenize};
///
/// let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
/// assert_eq!(evaluate_pc(&tokens), Ok(512.0));
/// ```
pub fn evaluate_pc(tokens: &[Token]) -> EvalResult<f64> {
    let mut iter = tokens.iter().peekable();
    let value = parse_expr(&mut iter, 0)?;

    match iter.peek() {
        None => Ok(value),
        Some(Token::RightParen) => Err(EvalError::UnbalancedParens),
        Some(_) => Err(EvalError::TrailingTokens),
    }
}

/// Parses and evaluates an expression whose binary operators all have a
/// precedence of at least `min_prec`.
///
/// Grammar:
/// ```text
///     expr(p) := primary (binop expr(q))*
///                where prec(binop) >= p
///                and q = prec(binop) + 1 for left-associative binop
///                    q = prec(binop)     for right-associative binop
/// ```
/// Stops at the first token that is not a qualifying binary operator, which
/// leaves a closing `)` for the enclosing group to consume.
///
/// Each call is one level of nesting, so the body runs under
/// [`ensure_sufficient_stack`].
fn parse_expr<'a, I>(tokens: &mut Peekable<I>, min_prec: u8) -> EvalResult<f64>
    where I: Iterator<Item = &'a Token>
{
    ensure_sufficient_stack(|| {
        let mut left = parse_primary(tokens)?;

        while let Some(&&Token::Operator(op)) = tokens.peek()
              && op.is_binary()
              && op.spec().precedence >= min_prec
        {
            tokens.next();
            let right = parse_expr(tokens, op.spec().right_min_precedence())?;
            left = apply_binary(op.symbol, left, right)?;
        }

        Ok(left)
    })
}

/// Parses and evaluates a primary expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | "-" expr(prec(unary -))
///              | "(" expr(0) ")"
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Number(n)) => Ok(*n),
        Some(Token::Operator(op)) if !op.is_binary() => {
            let operand = parse_expr(tokens, op.spec().precedence)?;
            Ok(apply_unary(op.symbol, operand))
        },
        Some(Token::LeftParen) => {
            let value = parse_expr(tokens, 0)?;
            match tokens.next() {
                Some(Token::RightParen) => Ok(value),
                _ => Err(EvalError::UnbalancedParens),
            }
        },
        Some(Token::Operator(_) | Token::RightParen) | None => Err(EvalError::MissingOperand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn eval(source: &str) -> EvalResult<f64> {
        evaluate_pc(&tokenize(source)?)
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
        assert_eq!(eval("10 - 4 - 3"), Ok(3.0));
        assert_eq!(eval("64 / 4 / 2"), Ok(8.0));
        assert_eq!(eval("2 ^ 3 ^ 2"), Ok(512.0));
        assert_eq!(eval("(2 ^ 3) ^ 2"), Ok(64.0));
    }

    #[test]
    fn unary_minus_applies_to_the_immediate_primary() {
        assert_eq!(eval("-2 ^ 2"), Ok(4.0));
        assert_eq!(eval("-(2 ^ 2)"), Ok(-4.0));
        assert_eq!(eval("2 ^ -1"), Ok(0.5));
        assert_eq!(eval("--3"), Ok(3.0));
        assert_eq!(eval("1 - -2 * 3"), Ok(7.0));
    }

    #[test]
    fn missing_operands() {
        assert_eq!(eval("1 +"), Err(EvalError::MissingOperand));
        assert_eq!(eval("* 2"), Err(EvalError::MissingOperand));
        assert_eq!(eval("()"), Err(EvalError::MissingOperand));
        assert_eq!(eval("-"), Err(EvalError::MissingOperand));
    }

    #[test]
    fn parentheses_must_balance() {
        assert_eq!(eval("(2 + 3"), Err(EvalError::UnbalancedParens));
        assert_eq!(eval("2 + 3)"), Err(EvalError::UnbalancedParens));
        assert_eq!(eval("(2 3)"), Err(EvalError::UnbalancedParens));
    }

    #[test]
    fn trailing_tokens() {
        assert_eq!(eval("12 34"), Err(EvalError::TrailingTokens));
        assert_eq!(eval("(1)(2)"), Err(EvalError::TrailingTokens));
    }

    #[test]
    fn deep_nesting_grows_the_stack() {
        let depth = 50_000;
        let parens = format!("{}2{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(eval(&parens), Ok(2.0));
        assert_eq!(eval(&format!("{}2", "-".repeat(depth + 1))), Ok(-2.0));
    }

    #[test]
    fn empty_token_slice_is_missing_operand() {
        assert_eq!(evaluate_pc(&[]), Err(EvalError::MissingOperand));
    }
}
