/// The evaluator module turns tokens into a numeric result.
///
/// Two interchangeable strategies implement the [`evaluator::Evaluator`]
/// trait: precedence climbing and shunting-yard. Both consume the same
/// tokens and the same operator table, which is what keeps their results
/// identical.
///
/// # Responsibilities
/// - Resolves precedence and associativity from the operator table.
/// - Applies operators as soon as their operands are known.
/// - Reports missing operands, unbalanced parentheses, trailing tokens and
///   division by zero.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw expression and produces numbers, operators and
/// parentheses in source order. It is the only stage that looks at
/// characters.
///
/// # Responsibilities
/// - Skips whitespace and converts numeric literals to `f64`.
/// - Classifies each `-` as prefix negation or binary subtraction.
/// - Reports the first unexpected character with its offset.
pub mod lexer;
/// The operator module holds the operator table.
///
/// Precedence, associativity and arity of every operator live here as
/// constants, together with the arithmetic that applies them.
pub mod operator;
/// The value module defines the caller-facing numeric result.
pub mod value;
