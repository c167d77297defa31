use crate::interpreter::error::ErrorKind;
use crate::interpreter::function::BuiltinFunction;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::stack::{TokenSequence, WorkingStack};
use crate::interpreter::token::{Token, TokenKind};
use log::{debug, trace};

/// Reduces a postfix token sequence with a stack machine.
///
/// # Arguments
///
/// * `postfix`: The tokens of an expression, in postfix order.
///
/// returns: The evaluation stack after every token was consumed. A well-formed expression
/// leaves exactly one token on it.
///
/// # Examples
///
/// ```
/// # use infix_evaluator::interpreter::error::ExpressionError;
/// # fn main() -> Result<(), ExpressionError> {
/// use infix_evaluator::interpreter::config::Config;
/// use infix_evaluator::interpreter::evaluator::evaluate;
/// use infix_evaluator::interpreter::parser::parse;
///
/// let postfix = parse("(13 + 2) / 3", &Config::default())?;
/// let result = evaluate(postfix).expect("a converted expression evaluates");
/// assert_eq!(result.to_string(), "5");
/// # Ok(()) }
/// ```
pub fn evaluate(postfix: TokenSequence) -> Result<WorkingStack, ErrorKind> {
    let mut operands = WorkingStack::new();

    for token in postfix {
        trace!("evaluating {:?} onto [{}]", token, operands);
        match token.kind() {
            TokenKind::Number | TokenKind::String | TokenKind::Variable => {
                operands.push(token)?
            }
            // Indexing cannot be resolved without variable storage, so it is kept as written.
            TokenKind::LeftBracket | TokenKind::RightBracket => operands.push(token)?,
            TokenKind::Unary => {
                operands.push(token)?;
                reduce_unary(&mut operands)?;
            }
            TokenKind::Operator => {
                operands.push(token)?;
                reduce_binary(&mut operands)?;
            }
            TokenKind::Function => {
                operands.push(token)?;
                reduce_call(&mut operands)?;
            }
            TokenKind::Comma | TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(ErrorKind::SyntaxError)
            }
            TokenKind::End | TokenKind::Error => return Err(ErrorKind::SyntaxError),
        }
    }

    debug!("reduced to [{}]", operands);
    Ok(operands)
}

fn numeric_operand(operand: &Token) -> Result<f64, ErrorKind> {
    operand.as_number().ok_or(ErrorKind::TypeMismatch)
}

fn reduce_unary(operands: &mut WorkingStack) -> Result<(), ErrorKind> {
    let operator = operands.pop()?;
    let operand = operands.pop()?;

    let operator: UnaryOperator = operator.lexeme().parse()?;
    let result = operator.evaluate(numeric_operand(&operand)?);
    operands.push(Token::number(result))
}

/// Pops the operator, then the right operand (pushed last), then the left operand.
fn reduce_binary(operands: &mut WorkingStack) -> Result<(), ErrorKind> {
    let operator = operands.pop()?;
    let right_operand = operands.pop()?;
    let left_operand = operands.pop()?;

    let operator: BinaryOperator = operator.lexeme().parse()?;
    let result = operator.evaluate(
        numeric_operand(&left_operand)?,
        numeric_operand(&right_operand)?,
    );
    operands.push(Token::number(result))
}

fn reduce_call(operands: &mut WorkingStack) -> Result<(), ErrorKind> {
    let function = operands.pop()?;
    let function: BuiltinFunction = function.name().ok_or(ErrorKind::SyntaxError)?.parse()?;

    let mut arguments = vec![0.0; function.arity()];
    for argument in arguments.iter_mut().rev() {
        *argument = numeric_operand(&operands.pop()?)?;
    }
    operands.push(Token::number(function.evaluate(&arguments)?))
}
