use thiserror::Error;

/// Every way evaluating an expression can fail.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("Invalid character")]
    InvalidCharacter,

    #[error("Invalid number")]
    InvalidNumber,

    #[error("Invalid string")]
    InvalidString,

    #[error("Invalid variable")]
    InvalidVariable,

    #[error("Invalid function")]
    InvalidFunction,

    #[error("Unbalanced parenthesis")]
    UnbalancedParen,

    #[error("Unbalanced brackets")]
    UnbalancedBracket,

    #[error("Unbalanced quotes")]
    UnbalancedQuote,

    #[error("Out of memory")]
    OutOfMemory,

    #[error("Stack underflow")]
    StackUnderflow,

    #[error("Unknown operator")]
    UnknownOperator,

    #[error("Syntax error")]
    SyntaxError,

    #[error("Type mismatch")]
    TypeMismatch,
}

/// An error located at a character offset of the source expression.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[error("{kind} at {offset}")]
pub struct ExpressionError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl ExpressionError {
    pub fn new(kind: ErrorKind, offset: usize) -> ExpressionError {
        ExpressionError { kind, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_error_displays_message_and_offset() {
        let error = ExpressionError::new(ErrorKind::UnbalancedParen, 4);
        assert_eq!(error.to_string(), "Unbalanced parenthesis at 4");
    }
}
