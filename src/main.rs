use std::process::ExitCode;

use clap::Parser;
use infixa::{Algorithm, EvalError, evaluate};
use tracing_subscriber::{EnvFilter, fmt};

/// infixa evaluates an infix arithmetic expression and prints the result.
/// Supports the operators + - * / ^, prefix minus and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluator algorithm: pc for precedence climbing, sy for shunting-yard.
    #[arg(short, long, value_enum, default_value_t, env = "INFIXA_ALGO")]
    algo: Algorithm,

    /// Log evaluation steps to standard error.
    #[arg(short, long)]
    verbose: bool,

    /// Expression to evaluate. Several words are joined without spaces, so
    /// the expression does not need to be quoted. Quote characters are
    /// ignored; error positions still count them.
    #[arg(required = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` only warnings are shown, or debug output when
/// `--verbose` is given.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();
}

/// The expression built from the positional words.
///
/// Words are joined and `'`/`"` are stripped. For every character kept,
/// `typed_offsets` records its offset in the joined words as typed, so
/// error positions can be reported against what the user wrote.
struct Expression {
    text:          String,
    typed_offsets: Vec<usize>,
}

impl Expression {
    fn from_words(words: &[String]) -> Self {
        let mut text = String::new();
        let mut typed_offsets = Vec::new();
        for (offset, c) in words.iter().flat_map(|word| word.chars()).enumerate() {
            if matches!(c, '\'' | '"') {
                continue;
            }
            text.push(c);
            typed_offsets.push(offset);
        }
        Self { text, typed_offsets }
    }

    /// Moves an `UnexpectedChar` position from the stripped text back onto
    /// the typed text.
    fn locate(&self, error: EvalError) -> EvalError {
        match error {
            EvalError::UnexpectedChar { position, character } => {
                let position = self.typed_offsets.get(position).copied().unwrap_or(position);
                EvalError::UnexpectedChar { position, character }
            },
            other => other,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let expression = Expression::from_words(&args.expression);

    match evaluate(&expression.text, args.algo).map_err(|e| expression.locate(e)) {
        Ok(number) => {
            println!("{number}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}
