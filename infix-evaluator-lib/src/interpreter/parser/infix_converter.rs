use crate::interpreter::config::Config;
use crate::interpreter::error::{ErrorKind, ExpressionError};
use crate::interpreter::function::BuiltinFunction;
use crate::interpreter::lexer::{next_token, ParseContext};
use crate::interpreter::operator::should_pop_before;
use crate::interpreter::stack::{TokenSequence, WorkingStack};
use crate::interpreter::token::{Token, TokenKind};

/// A parenthesis or bracket group that is still open.
#[derive(Debug)]
struct Group {
    opener: TokenKind,
    /// The builtin applied to the group's arguments, when the group is a call.
    call: Option<BuiltinFunction>,
    arguments: usize,
}

impl Group {
    /// Fails unless a call group held exactly as many arguments as its function takes.
    fn check_arity(&self) -> Result<(), ErrorKind> {
        match self.call {
            Some(function) if function.arity() != self.arguments => {
                Err(ErrorKind::InvalidFunction)
            }
            _ => Ok(()),
        }
    }
}

/// Open parenthesis and bracket groups seen by the converter, innermost last.
#[derive(Debug, Default)]
struct Nesting {
    groups: Vec<Group>,
}

impl Nesting {
    fn open(
        &mut self,
        opener: TokenKind,
        call: Option<BuiltinFunction>,
    ) -> Result<(), ErrorKind> {
        self.groups
            .try_reserve(1)
            .map_err(|_| ErrorKind::OutOfMemory)?;
        self.groups.push(Group {
            opener,
            call,
            arguments: 1,
        });
        Ok(())
    }

    fn separate_argument(&mut self) {
        if let Some(group) = self.groups.last_mut() {
            group.arguments += 1;
        }
    }

    fn close(&mut self, opener: TokenKind) -> Result<Group, ErrorKind> {
        match self.groups.pop() {
            Some(group) if group.opener == opener => Ok(group),
            _ => Err(ErrorKind::SyntaxError),
        }
    }

    fn is_balanced(&self) -> bool {
        self.groups.is_empty()
    }
}

pub(super) fn infix_to_postfix(
    expression: &str,
    config: &Config,
) -> Result<TokenSequence, ExpressionError> {
    let mut context = ParseContext::new(config);
    let mut operators = WorkingStack::new();
    let mut output = TokenSequence::new();
    let mut nesting = Nesting::default();

    loop {
        let token = next_token(&mut context, expression)?;
        if token.is_kind(TokenKind::End) {
            break;
        }
        convert_token(token, &mut operators, &mut output, &mut nesting)
            .map_err(|kind| ExpressionError::new(kind, context.offset()))?;
    }

    if !nesting.is_balanced() {
        return Err(ExpressionError::new(
            ErrorKind::SyntaxError,
            context.offset(),
        ));
    }
    transfer_leftover_operators(&mut operators, &mut output)
        .map_err(|kind| ExpressionError::new(kind, context.offset()))?;

    Ok(output)
}

fn convert_token(
    token: Token,
    operators: &mut WorkingStack,
    output: &mut TokenSequence,
    nesting: &mut Nesting,
) -> Result<(), ErrorKind> {
    match token.kind() {
        TokenKind::Number | TokenKind::String | TokenKind::Variable => output.append(token),
        TokenKind::Function | TokenKind::Unary => operators.push(token),
        TokenKind::Operator => parse_operator_token(operators, output, token),
        TokenKind::LeftParen => {
            // Unknown names are left for the evaluator to reject.
            let call = operators
                .peek()
                .filter(|top| top.is_kind(TokenKind::Function))
                .and_then(Token::name)
                .and_then(|name| name.parse::<BuiltinFunction>().ok());
            nesting.open(TokenKind::LeftParen, call)?;
            operators.push(token)
        }
        TokenKind::RightParen => {
            parse_closing_parenthesis_token(operators, output)?;
            nesting.close(TokenKind::LeftParen)?.check_arity()
        }
        TokenKind::LeftBracket => {
            nesting.open(TokenKind::LeftBracket, None)?;
            // Brackets are kept in the output so that indexing survives the conversion.
            output.append(token.clone())?;
            operators.push(token)
        }
        TokenKind::RightBracket => {
            parse_closing_bracket_token(operators, output, token)?;
            nesting.close(TokenKind::LeftBracket).map(|_| ())
        }
        TokenKind::Comma => {
            parse_comma_token(operators, output)?;
            nesting.separate_argument();
            Ok(())
        }
        TokenKind::End | TokenKind::Error => Err(ErrorKind::SyntaxError),
    }
}

fn is_group_opener(token: &Token) -> bool {
    token.is_kind(TokenKind::LeftParen) || token.is_kind(TokenKind::LeftBracket)
}

fn parse_operator_token(
    operators: &mut WorkingStack,
    output: &mut TokenSequence,
    token: Token,
) -> Result<(), ErrorKind> {
    while let Some(top_of_operator_stack) = operators.peek() {
        if is_group_opener(top_of_operator_stack)
            || !should_pop_before(top_of_operator_stack, &token)
        {
            break;
        }
        output.append(operators.pop()?)?;
    }

    operators.push(token)
}

/// Moves operators to the output until `opener` is on top of the operator stack.
fn transfer_until_opener(
    operators: &mut WorkingStack,
    output: &mut TokenSequence,
    opener: TokenKind,
) -> Result<(), ErrorKind> {
    loop {
        match operators.peek() {
            None => return Err(ErrorKind::SyntaxError),
            Some(top_of_operator_stack) if top_of_operator_stack.is_kind(opener) => return Ok(()),
            // A parenthesis closed inside a bracket, or the other way around.
            Some(top_of_operator_stack) if is_group_opener(top_of_operator_stack) => {
                return Err(ErrorKind::SyntaxError)
            }
            Some(_) => output.append(operators.pop()?)?,
        }
    }
}

fn parse_closing_parenthesis_token(
    operators: &mut WorkingStack,
    output: &mut TokenSequence,
) -> Result<(), ErrorKind> {
    transfer_until_opener(operators, output, TokenKind::LeftParen)?;
    // Discard the open parenthesis.
    operators.pop()?;

    // The group was the argument list of a call, so the call follows its arguments.
    let closes_call = operators
        .peek()
        .map_or(false, |top| top.is_kind(TokenKind::Function));
    if closes_call {
        output.append(operators.pop()?)?;
    }
    Ok(())
}

fn parse_closing_bracket_token(
    operators: &mut WorkingStack,
    output: &mut TokenSequence,
    token: Token,
) -> Result<(), ErrorKind> {
    transfer_until_opener(operators, output, TokenKind::LeftBracket)?;
    output.append(token)?;
    // Discard the open bracket; its copy is already in the output.
    operators.pop()?;
    Ok(())
}

/// Completes the current argument, leaving the enclosing group open.
fn parse_comma_token(
    operators: &mut WorkingStack,
    output: &mut TokenSequence,
) -> Result<(), ErrorKind> {
    loop {
        match operators.peek() {
            None => return Err(ErrorKind::SyntaxError),
            Some(top_of_operator_stack) if is_group_opener(top_of_operator_stack) => return Ok(()),
            Some(_) => output.append(operators.pop()?)?,
        }
    }
}

fn transfer_leftover_operators(
    operators: &mut WorkingStack,
    output: &mut TokenSequence,
) -> Result<(), ErrorKind> {
    while let Ok(operator) = operators.pop() {
        if is_group_opener(&operator) {
            return Err(ErrorKind::SyntaxError);
        }
        output.append(operator)?;
    }
    Ok(())
}
