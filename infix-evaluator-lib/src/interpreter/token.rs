use std::fmt;
use std::fmt::Formatter;

/// The syntactic category of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    End,
    Unary,
    Number,
    String,
    Operator,
    Variable,
    Function,
    Comma,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::End => "End of expression",
            TokenKind::Unary => "Unary operator",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Operator => "Operator",
            TokenKind::Variable => "Variable",
            TokenKind::Function => "Function",
            TokenKind::Comma => "Comma",
            TokenKind::LeftParen => "Left parenthesis",
            TokenKind::RightParen => "Right parenthesis",
            TokenKind::LeftBracket => "Left bracket",
            TokenKind::RightBracket => "Right bracket",
            TokenKind::Error => "Error",
        };
        write!(f, "{}", text)
    }
}

/// The typed payload of a token, decided when the token is created.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Punctuation and operators carry no payload beyond their lexeme.
    None,
    Number(f64),
    /// The contents of a string literal, without delimiters and with escapes resolved.
    Text(String),
    /// The name of a variable (without its sigil) or of a function.
    Name(String),
}

/// A discrete part of an expression.
///
/// Tokens are never mutated after creation; evaluation produces new tokens instead.
#[derive(Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    value: Value,
}

impl Token {
    /// Creates a token from its kind and exact source text, deriving its typed payload.
    ///
    /// # Arguments
    ///
    /// * `kind`: The syntactic category of the token.
    /// * `lexeme`: The characters the token was made from.
    ///
    /// returns: The new token.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_evaluator::interpreter::token::{Token, TokenKind, Value};
    ///
    /// let token = Token::new(TokenKind::Number, "234.5");
    /// assert_eq!(token.value(), &Value::Number(234.5));
    /// ```
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Token {
        let lexeme = lexeme.into();
        let value = match kind {
            TokenKind::Number => lexeme
                .parse::<f64>()
                .map(Value::Number)
                .unwrap_or(Value::None),
            TokenKind::String => Value::Text(unquote(&lexeme)),
            TokenKind::Variable => Value::Name(lexeme.trim_start_matches('$').to_string()),
            TokenKind::Function => Value::Name(lexeme.clone()),
            _ => Value::None,
        };
        Token {
            kind,
            lexeme,
            value,
        }
    }

    /// Creates a number token holding a computed result.
    pub fn number(value: f64) -> Token {
        Token {
            kind: TokenKind::Number,
            lexeme: format!("{}", value),
            value: Value::Number(value),
        }
    }

    pub fn end() -> Token {
        Token::new(TokenKind::End, "")
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    /// The name of a variable (without its sigil) or of a function.
    pub fn name(&self) -> Option<&str> {
        match &self.value {
            Value::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

fn unquote(lexeme: &str) -> String {
    let mut characters = lexeme.chars();
    let delimiter = match characters.next() {
        Some(quote @ ('\'' | '"')) if lexeme.len() >= 2 && lexeme.ends_with(quote) => quote,
        _ => return lexeme.to_string(),
    };
    let inner = &lexeme[1..lexeme.len() - 1];
    if delimiter == '\'' {
        return inner.to_string();
    }

    let mut text = String::with_capacity(inner.len());
    let mut inner_characters = inner.chars();
    while let Some(character) = inner_characters.next() {
        match character {
            '\\' => {
                if let Some(escaped) = inner_characters.next() {
                    text.push(escaped);
                }
            }
            character => text.push(character),
        }
    }
    text
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.lexeme)
    }
}
