/// Precedence-climbing evaluation.
///
/// Recursive descent over the token slice, bounded by a minimum-precedence
/// threshold. Parses and evaluates in a single pass without building a tree.
pub mod precedence_climbing;

/// Shunting-yard evaluation.
///
/// Iterative, two-stack evaluation: operators are held back until precedence
/// and associativity say they can be applied to the value stack.
pub mod shunting_yard;

use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

pub use self::{
    precedence_climbing::{PrecedenceClimbing, evaluate_pc},
    shunting_yard::{ShuntingYard, evaluate_sy},
};
use crate::{error::EvalResult, interpreter::lexer::Token};

/// A strategy that turns a token sequence into a raw `f64` result.
///
/// Both implementations read the same operator table and apply operators
/// through the same arithmetic, so they agree bit-for-bit on every valid
/// expression.
pub trait Evaluator {
    /// Evaluates a complete token sequence.
    ///
    /// # Errors
    /// Returns the first [`crate::EvalError`] found scanning left to right.
    fn evaluate(&self, tokens: &[Token]) -> EvalResult<f64>;
}

/// Selects which [`Evaluator`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Algorithm {
    /// Recursive precedence climbing (the default).
    #[default]
    #[value(name = "pc", alias = "precedence-climbing")]
    PrecedenceClimbing,
    /// Two-stack shunting-yard.
    #[value(name = "sy", aliases = ["sh", "shunting-yard"])]
    ShuntingYard,
}

impl Algorithm {
    /// Returns the evaluator implementing this algorithm.
    #[must_use]
    pub fn evaluator(self) -> &'static dyn Evaluator {
        match self {
            Self::PrecedenceClimbing => &PrecedenceClimbing,
            Self::ShuntingYard => &ShuntingYard,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PrecedenceClimbing => write!(f, "precedence-climbing"),
            Self::ShuntingYard => write!(f, "shunting-yard"),
        }
    }
}

/// Returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown algorithm '{0}'. Expected 'pc' or 'sy'.")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Accepts `pc`, `precedence-climbing`, `sy`, `sh` and `shunting-yard`,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_precedence_climbing() {
        assert_eq!(Algorithm::default(), Algorithm::PrecedenceClimbing);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("pc".parse(), Ok(Algorithm::PrecedenceClimbing));
        assert_eq!("Precedence-Climbing".parse(), Ok(Algorithm::PrecedenceClimbing));
        assert_eq!("sy".parse(), Ok(Algorithm::ShuntingYard));
        assert_eq!("sh".parse(), Ok(Algorithm::ShuntingYard));
        assert_eq!("shunting-yard".parse(), Ok(Algorithm::ShuntingYard));
        assert_eq!("rpn".parse::<Algorithm>(),
                   Err(UnknownAlgorithm("rpn".to_string())));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for algorithm in [Algorithm::PrecedenceClimbing, Algorithm::ShuntingYard] {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }
}
