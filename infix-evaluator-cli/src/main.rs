use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use infix_evaluator::interpreter::config::{Config, DEFAULT_MAX_TOKEN_LENGTH};
use infix_evaluator::interpreter::error::ExpressionError;
use infix_evaluator::interpreter::{
    convert_with_config, evaluate_with_config, tokenize_with_config, tokens_to_string,
};
use log::{info, LevelFilter};

/// Expressions evaluated when none are given on the command line.
const SAMPLE_EXPRESSIONS: [&str; 13] = [
    "234",
    "-49",
    "234.567",
    "2+3",
    "2^3",
    "2+3*4",
    "2+3*4^5",
    "(13 + 2) / 3",
    "\"abc\"",
    "'abd\\\"asra'",
    "int(13 / 4) + 1.0",
    "$a[17, int(3/-7)]",
    "(2+3",
];

/// Which pipeline stage's tokens to print.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Stage {
    /// The tokens in infix order
    Tokens,
    /// The tokens in postfix order
    Postfix,
    /// The reduced evaluation stack
    Result,
}

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expressions to evaluate (a built-in sample list when omitted)
    expressions: Vec<String>,

    /// The pipeline stage to print
    #[clap(short, long, value_enum, default_value = "result")]
    stage: Stage,

    /// The longest allowed token, in bytes
    #[clap(long, default_value_t = DEFAULT_MAX_TOKEN_LENGTH)]
    max_token_length: usize,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(
            args.verbose
                .log_level()
                .map_or(LevelFilter::Off, |level| level.to_level_filter()),
        )
        .init();

    let config = Config::with_max_token_length(args.max_token_length);
    let expressions: Vec<String> = if args.expressions.is_empty() {
        SAMPLE_EXPRESSIONS.iter().map(|e| e.to_string()).collect()
    } else {
        args.expressions
    };

    let mut failures = 0;
    for expression in &expressions {
        match run_stage(expression, args.stage, &config)? {
            Ok(tokens) => println!("{} = [{}]", expression, tokens),
            Err(error) => {
                failures += 1;
                println!("{}", render_error(expression, &error));
            }
        }
    }

    info!("evaluated {} expression(s)", expressions.len());
    if failures > 0 {
        bail!("{} of {} expression(s) failed", failures, expressions.len());
    }
    Ok(())
}

/// Runs the pipeline up to `stage`, returning the printed tokens or the expression's error.
fn run_stage(
    expression: &str,
    stage: Stage,
    config: &Config,
) -> Result<Result<String, ExpressionError>> {
    let tokens = match stage {
        Stage::Tokens => tokenize_with_config(expression, config).map(|t| t.into_tokens()),
        Stage::Postfix => convert_with_config(expression, config).map(|t| t.into_tokens()),
        Stage::Result => evaluate_with_config(expression, config).map(|t| t.into_tokens()),
    };
    match tokens {
        Ok(tokens) => Ok(Ok(tokens_to_string(tokens)?)),
        Err(error) => Ok(Err(error)),
    }
}

/// Renders an error with a caret under the offending character of the expression.
fn render_error(expression: &str, error: &ExpressionError) -> String {
    format!(
        "{} = Error: {}\n{}\n{}^",
        expression,
        error,
        expression,
        " ".repeat(error.offset)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use infix_evaluator::interpreter::error::ErrorKind;

    #[test]
    fn error_caret_points_at_offset() {
        let error = ExpressionError::new(ErrorKind::UnbalancedParen, 4);
        assert_eq!(
            render_error("(2+3", &error),
            "(2+3 = Error: Unbalanced parenthesis at 4\n(2+3\n    ^"
        );
    }

    #[test]
    fn each_stage_prints_its_tokens() {
        let config = Config::default();
        let run = |stage| run_stage("-2+3", stage, &config).unwrap().unwrap();
        assert_eq!(run(Stage::Tokens), "-u 2 + 3");
        assert_eq!(run(Stage::Postfix), "2 -u 3 +");
        assert_eq!(run(Stage::Result), "1");
    }

    #[test]
    fn sample_expressions_are_independent() {
        let config = Config::default();
        let failed: Vec<&str> = SAMPLE_EXPRESSIONS
            .iter()
            .copied()
            .filter(|e| run_stage(e, Stage::Result, &config).unwrap().is_err())
            .collect();
        assert_eq!(failed, vec!["(2+3"]);
    }

    #[test]
    fn arguments_parse() {
        let args = Arguments::parse_from(["infix-evaluator", "--stage", "postfix", "2+3"]);
        assert_eq!(args.stage, Stage::Postfix);
        assert_eq!(args.expressions, vec!["2+3".to_string()]);
        assert_eq!(args.max_token_length, DEFAULT_MAX_TOKEN_LENGTH);
    }
}
