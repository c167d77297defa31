mod infix_converter;

use crate::interpreter::config::Config;
use crate::interpreter::error::ExpressionError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::stack::TokenSequence;
use log::debug;

/// Parses the given infix expression into the equivalent postfix token sequence,
/// which can be evaluated without regard to precedence.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
/// * `config`: Limits applied while lexing.
///
/// returns: The tokens of the expression, in postfix order.
///
/// # Examples
///
/// ```
/// # use infix_evaluator::interpreter::error::ExpressionError;
/// # fn main() -> Result<(), ExpressionError> {
/// use infix_evaluator::interpreter::config::Config;
/// use infix_evaluator::interpreter::parser::parse;
///
/// let postfix = parse("2+3*4^5", &Config::default())?;
/// assert_eq!(postfix.to_string(), "2 3 4 5 ^ * +");
/// # Ok(()) }
/// ```
pub fn parse(expression: &str, config: &Config) -> Result<TokenSequence, ExpressionError> {
    let postfix = infix_to_postfix(expression, config).map_err(|error| {
        debug!("failed to convert {:?}: {}", expression, error);
        error
    })?;
    debug!("converted {:?} into postfix [{}]", expression, postfix);
    Ok(postfix)
}
