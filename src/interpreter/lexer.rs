use logos::Logos;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::operator::{Operator, Symbol},
};

/// Raw lexical unit as recognized by the Logos state machine.
///
/// This enum only knows spelling. Whether a `-` is a prefix or an infix
/// operator is decided afterwards by [`tokenize`], which looks at the
/// previous token.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
enum Lexeme {
    /// Numeric literal tokens, such as `42` or `3.14`. No exponent, no sign
    /// and no bare leading or trailing `.`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// A token of an arithmetic expression.
///
/// Produced by [`tokenize`] in exactly the left-to-right order of the input.
/// Every `-` already carries its role, so evaluators never need to look
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, converted to `f64` at tokenization time.
    Number(f64),
    /// One of `+ - * / ^`, with its role at this position.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Returns `true` if a `-` right after this token is a prefix negation.
    const fn opens_operand(self) -> bool {
        matches!(self, Self::Operator(_) | Self::LeftParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Converts an expression string into its token sequence.
///
/// Whitespace between tokens is skipped. A `-` is classified as a prefix
/// negation when it is the first token or directly follows an operator or
/// `(`; otherwise it is binary.
///
/// # Errors
/// - [`EvalError::UnexpectedChar`] for the first character that cannot start
///   a token, with its zero-based `char` offset.
/// - [`EvalError::EmptyExpression`] if the input holds no tokens at all.
///
/// # Example
/// ```
/// use infixa::{
///     EvalError,
///     interpreter::{
///         lexer::{Token, tokenize},
///         operator::{Operator, Symbol},
///     },
/// };
///
/// let tokens = tokenize("-1 - 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Operator(Operator::negate()),
///                 Token::Number(1.0),
///                 Token::Operator(Operator::binary(Symbol::Minus)),
///                 Token::Number(2.0)]);
///
/// assert_eq!(tokenize("   "), Err(EvalError::EmptyExpression));
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            let span = lexer.span();
            return Err(unexpected_char(source, span.start));
        };

        let token = match lexeme {
            Lexeme::Number(n) => Token::Number(n),
            Lexeme::Plus => Token::Operator(Operator::binary(Symbol::Plus)),
            Lexeme::Minus => {
                let unary = tokens.last().is_none_or(|prev| prev.opens_operand());
                if unary {
                    Token::Operator(Operator::negate())
                } else {
                    Token::Operator(Operator::binary(Symbol::Minus))
                }
            },
            Lexeme::Star => Token::Operator(Operator::binary(Symbol::Star)),
            Lexeme::Slash => Token::Operator(Operator::binary(Symbol::Slash)),
            Lexeme::Caret => Token::Operator(Operator::binary(Symbol::Caret)),
            Lexeme::LParen => Token::LeftParen,
            Lexeme::RParen => Token::RightParen,
        };
        tokens.push(token);
    }

    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Builds the error for the character starting at byte offset `start`.
///
/// Logos reports byte spans; the error reports the offset in characters so
/// that it lines up with what the user typed.
fn unexpected_char(source: &str, start: usize) -> EvalError {
    let position = source[..start].chars().count();
    let character = source[start..].chars().next().unwrap_or('\0');
    EvalError::UnexpectedChar { position, character }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bin(symbol: Symbol) -> Token {
        Token::Operator(Operator::binary(symbol))
    }

    #[test]
    fn integers_and_whitespace() {
        assert_eq!(tokenize("12").unwrap(), vec![Token::Number(12.0)]);
        assert_eq!(tokenize("  12 ").unwrap(), vec![Token::Number(12.0)]);
        assert_eq!(tokenize(" \t 12").unwrap(), vec![Token::Number(12.0)]);
        assert_eq!(tokenize(" 12\n34  ").unwrap(),
                   vec![Token::Number(12.0), Token::Number(34.0)]);
    }

    #[test]
    fn decimals() {
        assert_eq!(tokenize("1.2").unwrap(), vec![Token::Number(1.2)]);
        assert_eq!(tokenize(" 1.2\n3.4  ").unwrap(),
                   vec![Token::Number(1.2), Token::Number(3.4)]);
    }

    #[test]
    fn operators_in_order() {
        assert_eq!(tokenize(" 10 + 20 * 30 / 40 - 50 ^ 2").unwrap(),
                   vec![Token::Number(10.0),
                        bin(Symbol::Plus),
                        Token::Number(20.0),
                        bin(Symbol::Star),
                        Token::Number(30.0),
                        bin(Symbol::Slash),
                        Token::Number(40.0),
                        bin(Symbol::Minus),
                        Token::Number(50.0),
                        bin(Symbol::Caret),
                        Token::Number(2.0)]);
    }

    #[test]
    fn trailing_operator_is_still_tokenized() {
        assert_eq!(tokenize("1+").unwrap(),
                   vec![Token::Number(1.0), bin(Symbol::Plus)]);
    }

    #[test]
    fn minus_role_depends_on_previous_token() {
        let tokens = tokenize("-(2)-3*-4").unwrap();
        assert_eq!(tokens,
                   vec![Token::Operator(Operator::negate()),
                        Token::LeftParen,
                        Token::Number(2.0),
                        Token::RightParen,
                        bin(Symbol::Minus),
                        Token::Number(3.0),
                        bin(Symbol::Star),
                        Token::Operator(Operator::negate()),
                        Token::Number(4.0)]);
    }

    #[test]
    fn double_minus_is_binary_then_unary() {
        let tokens = tokenize("1--1").unwrap();
        assert_eq!(tokens[1], bin(Symbol::Minus));
        assert_eq!(tokens[2], Token::Operator(Operator::negate()));
    }

    #[test]
    fn unexpected_character_reports_offset() {
        assert_eq!(tokenize("2 & 3"),
                   Err(EvalError::UnexpectedChar { position:  2,
                                                   character: '&', }));
    }

    #[test]
    fn offset_counts_characters_not_bytes() {
        assert_eq!(tokenize("π + x"),
                   Err(EvalError::UnexpectedChar { position:  0,
                                                   character: 'π', }));
        assert_eq!(tokenize("1 × 2"),
                   Err(EvalError::UnexpectedChar { position:  2,
                                                   character: '×', }));
    }

    #[test]
    fn malformed_decimal_literals_are_rejected() {
        assert_eq!(tokenize(".5"),
                   Err(EvalError::UnexpectedChar { position:  0,
                                                   character: '.', }));
        assert!(matches!(tokenize("1."), Err(EvalError::UnexpectedChar { .. })));
        assert!(matches!(tokenize("1e5"), Err(EvalError::UnexpectedChar { .. })));
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(tokenize(""), Err(EvalError::EmptyExpression));
        assert_eq!(tokenize(" \t\n "), Err(EvalError::EmptyExpression));
    }
}
