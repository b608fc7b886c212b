use crate::error::{EvalError, EvalResult};

/// The five operator spellings recognized by the tokenizer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
}

impl Symbol {
    /// Returns the source character for this symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Caret => '^',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Whether an operator token sits between two operands or in front of one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Infix operator taking a left and a right operand.
    Binary,
    /// Prefix operator taking the operand to its right.
    UnaryPrefix,
}

/// Grouping direction for a chain of operators of equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Static description of one operator: how tightly it binds, which way it
/// groups and how many operands it consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperatorSpec {
    /// Binding strength; larger binds tighter.
    pub precedence:    u8,
    /// Grouping direction among equal precedences.
    pub associativity: Associativity,
    /// Number of operands (1 or 2).
    pub arity:         u8,
}

impl OperatorSpec {
    /// Returns `true` for left-associative operators.
    #[must_use]
    pub const fn is_left_assoc(self) -> bool {
        matches!(self.associativity, Associativity::Left)
    }

    /// Minimum precedence allowed on the right-hand side of this operator
    /// during precedence climbing.
    ///
    /// Left-associative operators forbid their own level on the right so that
    /// `a - b - c` folds leftwards; right-associative ones allow it.
    #[must_use]
    pub const fn right_min_precedence(self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence + 1,
            Associativity::Right => self.precedence,
        }
    }

    /// Decides whether an operator already on the shunting-yard stack (`self`)
    /// must be applied before `incoming` is pushed.
    #[must_use]
    pub const fn reduces_before(self, incoming: Self) -> bool {
        self.precedence > incoming.precedence
        || (self.precedence == incoming.precedence && incoming.is_left_assoc())
    }
}

/// Unary `-`: binds tighter than every binary operator, including `^`.
pub const UNARY_MINUS: OperatorSpec = OperatorSpec { precedence:    4,
                                                     associativity: Associativity::Right,
                                                     arity:         1, };
/// `^`
pub const POWER: OperatorSpec = OperatorSpec { precedence:    3,
                                               associativity: Associativity::Right,
                                               arity:         2, };
/// `*` and `/`
pub const MULTIPLICATIVE: OperatorSpec = OperatorSpec { precedence:    2,
                                                        associativity: Associativity::Left,
                                                        arity:         2, };
/// `+` and `-`
pub const ADDITIVE: OperatorSpec = OperatorSpec { precedence:    1,
                                                  associativity: Associativity::Left,
                                                  arity:         2, };

/// The complete operator table, one row per supported symbol and role.
///
/// This is the only place precedence and associativity are defined; both
/// evaluators read it through [`lookup`].
pub static OPERATOR_TABLE: [(Symbol, Role, OperatorSpec); 6] =
    [(Symbol::Minus, Role::UnaryPrefix, UNARY_MINUS),
     (Symbol::Caret, Role::Binary, POWER),
     (Symbol::Star, Role::Binary, MULTIPLICATIVE),
     (Symbol::Slash, Role::Binary, MULTIPLICATIVE),
     (Symbol::Plus, Role::Binary, ADDITIVE),
     (Symbol::Minus, Role::Binary, ADDITIVE)];

/// Returns the [`OperatorSpec`] for a symbol in a given role.
///
/// The tokenizer only ever emits `-` in the unary role, so every pair it can
/// produce has a row in [`OPERATOR_TABLE`]. Asking for any other unary symbol
/// is a caller bug.
///
/// # Example
/// ```
/// use infixa::interpreter::operator::{Associativity, Role, Symbol, lookup};
///
/// let pow = lookup(Symbol::Caret, Role::Binary);
/// assert_eq!(pow.precedence, 3);
/// assert_eq!(pow.associativity, Associativity::Right);
/// ```
#[must_use]
pub fn lookup(symbol: Symbol, role: Role) -> OperatorSpec {
    match role {
        Role::UnaryPrefix => {
            debug_assert_eq!(symbol, Symbol::Minus, "only '-' has a unary form");
            UNARY_MINUS
        },
        Role::Binary => match symbol {
            Symbol::Caret => POWER,
            Symbol::Star | Symbol::Slash => MULTIPLICATIVE,
            Symbol::Plus | Symbol::Minus => ADDITIVE,
        },
    }
}

/// An operator token: a symbol together with the role it plays at its
/// position in the expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    /// Source spelling.
    pub symbol: Symbol,
    /// Prefix or infix.
    pub role:   Role,
}

impl Operator {
    /// Binary form of `symbol`.
    #[must_use]
    pub const fn binary(symbol: Symbol) -> Self {
        Self { symbol,
               role: Role::Binary }
    }

    /// Prefix negation.
    #[must_use]
    pub const fn negate() -> Self {
        Self { symbol: Symbol::Minus,
               role:   Role::UnaryPrefix, }
    }

    /// Table entry for this operator.
    #[must_use]
    pub fn spec(self) -> OperatorSpec {
        lookup(self.symbol, self.role)
    }

    /// Returns `true` if this operator takes two operands.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self.role, Role::Binary)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Applies a binary operator to two operands.
///
/// `/` rejects a right operand that is exactly zero (either sign). `^` uses
/// [`f64::powf`], so a negative base with a fractional exponent yields `NaN`
/// rather than an error.
///
/// # Example
/// ```
/// use infixa::{
///     EvalError,
///     interpreter::operator::{Symbol, apply_binary},
/// };
///
/// assert_eq!(apply_binary(Symbol::Caret, 2.0, 10.0), Ok(1024.0));
/// assert_eq!(apply_binary(Symbol::Slash, 1.0, 0.0), Err(EvalError::DivisionByZero));
/// ```
pub fn apply_binary(symbol: Symbol, left: f64, right: f64) -> EvalResult<f64> {
    match symbol {
        Symbol::Plus => Ok(left + right),
        Symbol::Minus => Ok(left - right),
        Symbol::Star => Ok(left * right),
        Symbol::Slash => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        Symbol::Caret => Ok(left.powf(right)),
    }
}

/// Applies a prefix operator to its operand.
#[must_use]
pub fn apply_unary(symbol: Symbol, operand: f64) -> f64 {
    debug_assert_eq!(symbol, Symbol::Minus, "only '-' has a unary form");
    -operand
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_agrees_with_table() {
        for (symbol, role, spec) in &OPERATOR_TABLE {
            assert_eq!(lookup(*symbol, *role), *spec, "{symbol} {role:?}");
        }
    }

    #[test]
    fn arity_matches_role() {
        for (_, role, spec) in &OPERATOR_TABLE {
            let expected = if *role == Role::Binary { 2 } else { 1 };
            assert_eq!(spec.arity, expected);
        }
    }

    #[test]
    fn unary_minus_binds_tightest() {
        let unary = lookup(Symbol::Minus, Role::UnaryPrefix);
        for (_, role, spec) in &OPERATOR_TABLE {
            if *role == Role::Binary {
                assert!(unary.precedence > spec.precedence);
            }
        }
    }

    #[test]
    fn right_min_precedence_follows_associativity() {
        assert_eq!(ADDITIVE.right_min_precedence(), 2);
        assert_eq!(MULTIPLICATIVE.right_min_precedence(), 3);
        assert_eq!(POWER.right_min_precedence(), 3);
    }

    #[test]
    fn reduction_rule() {
        // Equal precedence: left-assoc reduces, right-assoc stacks.
        assert!(ADDITIVE.reduces_before(ADDITIVE));
        assert!(!POWER.reduces_before(POWER));
        assert!(MULTIPLICATIVE.reduces_before(ADDITIVE));
        assert!(!ADDITIVE.reduces_before(MULTIPLICATIVE));
        assert!(UNARY_MINUS.reduces_before(POWER));
    }

    #[test]
    fn division_by_negative_zero_is_rejected() {
        assert_eq!(apply_binary(Symbol::Slash, 3.0, -0.0),
                   Err(EvalError::DivisionByZero));
    }

    #[test]
    fn negative_base_fractional_exponent_is_nan() {
        let value = apply_binary(Symbol::Caret, -8.0, 0.5).unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn unary_negation() {
        assert_eq!(apply_unary(Symbol::Minus, 2.5), -2.5);
    }
}
