use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::Evaluator,
        lexer::Token,
        operator::{Operator, apply_binary, apply_unary},
    },
};

/// Shunting-yard strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuntingYard;

impl Evaluator for ShuntingYard {
    fn evaluate(&self, tokens: &[Token]) -> EvalResult<f64> {
        evaluate_sy(tokens)
    }
}

/// Evaluates a token sequence with the shunting-yard algorithm.
///
/// Reports the same error kinds as precedence climbing for the same
/// malformed input, so callers can switch algorithms without changing their
/// error handling.
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
/// use infixa::interpreter::{evaluator::evaluate_sy, lexer::tokenize};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// assert_eq!(evaluate_sy(&tokens), Ok(14.0));
/// ```
pub fn evaluate_sy(tokens: &[Token]) -> EvalResult<f64> {
    let mut yard = Yard::new();
    for token in tokens {
        yard.push(*token)?;
    }
    yard.finish()
}

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Held {
    Operator(Operator),
    LeftParen,
}

/// The two stacks plus the bookkeeping needed to reject malformed input as
/// soon as it is seen.
struct Yard {
    operators:         Vec<Held>,
    values:            Vec<f64>,
    /// `(` currently on the operator stack.
    open_groups:       usize,
    /// `true` at the start and after an operator or `(`.
    expecting_operand: bool,
}

impl Yard {
    const fn new() -> Self {
        Self { operators:         Vec::new(),
               values:            Vec::new(),
               open_groups:       0,
               expecting_operand: true, }
    }

    fn push(&mut self, token: Token) -> EvalResult<()> {
        match token {
            Token::Number(n) => {
                self.operand_slot()?;
                self.values.push(n);
                self.expecting_operand = false;
            },
            Token::Operator(op) if !op.is_binary() => {
                // Binds tighter than anything already held, so nothing to pop.
                self.operand_slot()?;
                self.operators.push(Held::Operator(op));
            },
            Token::Operator(op) => {
                if self.expecting_operand {
                    return Err(EvalError::MissingOperand);
                }
                let incoming = op.spec();
                while let Some(&Held::Operator(top)) = self.operators.last()
                      && top.spec().reduces_before(incoming)
                {
                    self.operators.pop();
                    self.apply(top)?;
                }
                self.operators.push(Held::Operator(op));
                self.expecting_operand = true;
            },
            Token::LeftParen => {
                self.operand_slot()?;
                self.operators.push(Held::LeftParen);
                self.open_groups += 1;
            },
            Token::RightParen => {
                if self.expecting_operand {
                    return Err(EvalError::MissingOperand);
                }
                self.close_group()?;
            },
        }
        Ok(())
    }

    /// Checks that an operand may start here.
    ///
    /// An operand right after a complete operand means a missing operator:
    /// inside a group the `)` is what is missing, at top level the
    /// expression already ended. Held operators of the current group are
    /// applied first, so an error they raise (such as a division by zero to
    /// the left) is the one reported.
    fn operand_slot(&mut self) -> EvalResult<()> {
        if self.expecting_operand {
            return Ok(());
        }
        self.reduce_group()?;
        if self.open_groups > 0 {
            Err(EvalError::UnbalancedParens)
        } else {
            Err(EvalError::TrailingTokens)
        }
    }

    /// Applies held operators down to the nearest `(`, leaving it in place.
    fn reduce_group(&mut self) -> EvalResult<()> {
        while let Some(&Held::Operator(op)) = self.operators.last() {
            self.operators.pop();
            self.apply(op)?;
        }
        Ok(())
    }

    /// Applies held operators down to the nearest `(` and discards it.
    fn close_group(&mut self) -> EvalResult<()> {
        self.reduce_group()?;
        match self.operators.pop() {
            Some(Held::LeftParen) => {
                self.open_groups -= 1;
                Ok(())
            },
            _ => Err(EvalError::UnbalancedParens),
        }
    }

    /// Pops the operands of `op` off the value stack and pushes the result.
    fn apply(&mut self, op: Operator) -> EvalResult<()> {
        let result = if op.is_binary() {
            let right = self.values.pop().ok_or(EvalError::MissingOperand)?;
            let left = self.values.pop().ok_or(EvalError::MissingOperand)?;
            apply_binary(op.symbol, left, right)?
        } else {
            let operand = self.values.pop().ok_or(EvalError::MissingOperand)?;
            apply_unary(op.symbol, operand)
        };
        self.values.push(result);
        Ok(())
    }

    /// Drains the operator stack and returns the single remaining value.
    fn finish(mut self) -> EvalResult<f64> {
        if self.expecting_operand {
            return Err(EvalError::MissingOperand);
        }
        while let Some(held) = self.operators.pop() {
            match held {
                Held::Operator(op) => self.apply(op)?,
                Held::LeftParen => return Err(EvalError::UnbalancedParens),
            }
        }
        match self.values.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvalError::MissingOperand),
            _ => Err(EvalError::TrailingTokens),
        }
    }
}
