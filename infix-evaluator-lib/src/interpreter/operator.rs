use crate::interpreter::error::ErrorKind;
use crate::interpreter::token::{Token, TokenKind};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// A binary arithmetic operator the evaluator can apply.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    Remainder,
}

/// A prefix sign operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Identity,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Exponentiate => "^",
            BinaryOperator::Remainder => "%",
        }
    }

    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => a / b,
            BinaryOperator::Exponentiate => a.powf(b),
            BinaryOperator::Remainder => a % b,
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = ErrorKind;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(BinaryOperator::Add),
            "-" => Ok(BinaryOperator::Subtract),
            "*" => Ok(BinaryOperator::Multiply),
            "/" => Ok(BinaryOperator::Divide),
            "^" => Ok(BinaryOperator::Exponentiate),
            "%" => Ok(BinaryOperator::Remainder),
            _ => Err(ErrorKind::UnknownOperator),
        }
    }
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-u",
            UnaryOperator::Identity => "+u",
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -x,
            UnaryOperator::Identity => x,
        }
    }
}

impl FromStr for UnaryOperator {
    type Err = ErrorKind;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "-u" => Ok(UnaryOperator::Negate),
            "+u" => Ok(UnaryOperator::Identity),
            _ => Err(ErrorKind::UnknownOperator),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How tightly a token on the operator stack binds. Higher binds tighter.
///
/// Unary signs bind as tightly as `^`, so `-2^2` negates the power while `-2+3` adds to the
/// negated number. A table that ranks unary signs at 0 instead would make `-2+3` negate
/// the whole sum. Tokens that are not operators have precedence 0.
pub(crate) fn precedence(token: &Token) -> u8 {
    match token.kind() {
        TokenKind::Unary => 5,
        TokenKind::Operator => match token.lexeme() {
            "^" => 5,
            "*" | "/" | "%" => 4,
            "+" | "-" => 3,
            ">" | ">=" | "<" | "<=" | "==" | "!=" => 2,
            "=" => 1,
            _ => 0,
        },
        _ => 0,
    }
}

pub(crate) fn associativity(token: &Token) -> Associativity {
    match token.kind() {
        TokenKind::Unary => Associativity::Right,
        TokenKind::Operator if token.lexeme() == "^" => Associativity::Right,
        _ => Associativity::Left,
    }
}

/// Whether `top` of the operator stack must be output before `incoming` is pushed.
pub(crate) fn should_pop_before(top: &Token, incoming: &Token) -> bool {
    let top_precedence = precedence(top);
    let incoming_precedence = precedence(incoming);
    top_precedence > incoming_precedence
        || (top_precedence == incoming_precedence
            && associativity(top) == Associativity::Left)
}
