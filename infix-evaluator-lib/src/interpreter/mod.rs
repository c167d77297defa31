pub mod config;
pub mod error;
pub mod evaluator;
mod function;
pub mod lexer;
mod operator;
pub mod parser;
pub mod stack;
pub mod token;

use crate::interpreter::config::Config;
use crate::interpreter::error::ExpressionError;
use crate::interpreter::stack::{TokenSequence, WorkingStack};
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Evaluates the given infix expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The reduced evaluation stack, normally holding a single token.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::evaluate;
///
/// let result = evaluate("2+3*4^5").unwrap();
/// assert_eq!(result.to_string(), "258");
/// ```
pub fn evaluate(expression: &str) -> Result<WorkingStack, ExpressionError> {
    evaluate_with_config(expression, &Config::default())
}

pub fn evaluate_with_config(
    expression: &str,
    config: &Config,
) -> Result<WorkingStack, ExpressionError> {
    let postfix = parser::parse(expression, config)?;
    evaluator::evaluate(postfix).map_err(|kind| {
        let error = ExpressionError::new(kind, expression.chars().count());
        debug!("failed to evaluate {:?}: {}", expression, error);
        error
    })
}

/// Converts the given infix expression into the equivalent postfix token sequence.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in postfix order.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::convert;
///
/// let postfix = convert("(13 + 2) / 3").unwrap();
/// assert_eq!(postfix.to_string(), "13 2 + 3 /");
/// ```
pub fn convert(expression: &str) -> Result<TokenSequence, ExpressionError> {
    convert_with_config(expression, &Config::default())
}

pub fn convert_with_config(
    expression: &str,
    config: &Config,
) -> Result<TokenSequence, ExpressionError> {
    parser::parse(expression, config)
}

/// Splits the given expression into its tokens, in infix order.
pub fn tokenize(expression: &str) -> Result<TokenSequence, ExpressionError> {
    tokenize_with_config(expression, &Config::default())
}

pub fn tokenize_with_config(
    expression: &str,
    config: &Config,
) -> Result<TokenSequence, ExpressionError> {
    lexer::tokenize(expression, config)
}

/// Pretty-prints the given tokens, separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::tokens_to_string;
/// use infix_evaluator::interpreter::token::{Token, TokenKind};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::new(TokenKind::Number, "2"),
///     Token::new(TokenKind::Number, "3"),
///     Token::new(TokenKind::Operator, "+"),
/// ];
/// let pretty_printed_tokens = tokens_to_string(tokens)?;
/// assert_eq!(pretty_printed_tokens, "2 3 +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: impl IntoIterator<Item = Token>) -> Result<String> {
    let tokens: Vec<Token> = tokens.into_iter().collect();
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.lexeme());
    }

    builder.string().context("Failed to build token string")
}
