use crate::interpreter::error::ErrorKind;
use crate::interpreter::token::Token;
use itertools::Itertools;
use std::fmt;
use std::fmt::Formatter;

/// An ordered, append-only list of tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new() -> TokenSequence {
        TokenSequence { tokens: Vec::new() }
    }

    pub fn append(&mut self, token: Token) -> Result<(), ErrorKind> {
        reserve_one(&mut self.tokens)?;
        self.tokens.push(token);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn lexemes(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::lexeme).collect()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl IntoIterator for TokenSequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenSequence {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}

/// A last-in-first-out stack of tokens, used while converting and while evaluating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingStack {
    tokens: Vec<Token>,
}

impl WorkingStack {
    pub fn new() -> WorkingStack {
        WorkingStack { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) -> Result<(), ErrorKind> {
        reserve_one(&mut self.tokens)?;
        self.tokens.push(token);
        Ok(())
    }

    /// Removes the top of the stack, failing with [`ErrorKind::StackUnderflow`] when empty.
    pub fn pop(&mut self) -> Result<Token, ErrorKind> {
        self.tokens.pop().ok_or(ErrorKind::StackUnderflow)
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn lexemes(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::lexeme).collect()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl fmt::Display for WorkingStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}

fn reserve_one(tokens: &mut Vec<Token>) -> Result<(), ErrorKind> {
    tokens.try_reserve(1).map_err(|_| ErrorKind::OutOfMemory)
}
