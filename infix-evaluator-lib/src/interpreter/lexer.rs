use crate::interpreter::config::Config;
use crate::interpreter::error::{ErrorKind, ExpressionError};
use crate::interpreter::stack::TokenSequence;
use crate::interpreter::token::{Token, TokenKind};
use log::trace;

static WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];
static UNARY_SIGNS: [char; 3] = ['+', '-', '!'];
static OPERATOR_START: [char; 11] = ['+', '-', '*', '/', '%', '^', '#', '<', '>', '=', '!'];
static OPERATOR_CONTINUATION: [char; 2] = ['=', '>'];
const VARIABLE_SIGIL: char = '$';
const DECIMAL_POINT: char = '.';

/// The lexer's cursor over one expression.
///
/// A context belongs to exactly one expression; create a new one (or [`reset`](ParseContext::reset)
/// it) before lexing another.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Byte position into the source.
    position: usize,
    /// Character offset into the source, reported in errors.
    offset: usize,
    paren_depth: usize,
    bracket_depth: usize,
    /// `None` at the start of an expression.
    previous: Option<TokenKind>,
    max_token_length: usize,
}

impl ParseContext {
    pub fn new(config: &Config) -> ParseContext {
        ParseContext {
            position: 0,
            offset: 0,
            paren_depth: 0,
            bracket_depth: 0,
            previous: None,
            max_token_length: config.max_token_length,
        }
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.offset = 0;
        self.paren_depth = 0;
        self.bracket_depth = 0;
        self.previous = None;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn paren_depth(&self) -> usize {
        self.paren_depth
    }

    pub fn bracket_depth(&self) -> usize {
        self.bracket_depth
    }

    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.previous
    }

    fn peek(&self, source: &str) -> Option<char> {
        source.get(self.position..)?.chars().next()
    }

    fn advance(&mut self, character: char) {
        self.position += character.len_utf8();
        self.offset += 1;
    }

    fn error(&self, kind: ErrorKind) -> ExpressionError {
        ExpressionError::new(kind, self.offset)
    }

    /// Fails with an invalid character unless `is_legal` accepts the previous token kind.
    fn expect_previous(
        &self,
        is_legal: fn(Option<TokenKind>) -> bool,
    ) -> Result<(), ExpressionError> {
        if is_legal(self.previous) {
            Ok(())
        } else {
            Err(self.error(ErrorKind::InvalidCharacter))
        }
    }

    /// Consumes `character` into `lexeme`, failing with `overflow` once the lexeme is full.
    fn consume(
        &mut self,
        lexeme: &mut String,
        character: char,
        overflow: ErrorKind,
    ) -> Result<(), ExpressionError> {
        if lexeme.len() + character.len_utf8() > self.max_token_length {
            return Err(self.error(overflow));
        }
        lexeme.push(character);
        self.advance(character);
        Ok(())
    }

    fn consume_while(
        &mut self,
        source: &str,
        lexeme: &mut String,
        accept: fn(char) -> bool,
        overflow: ErrorKind,
    ) -> Result<(), ExpressionError> {
        while let Some(character) = self.peek(source).filter(|&c| accept(c)) {
            self.consume(lexeme, character, overflow)?;
        }
        Ok(())
    }

    fn skip_whitespace(&mut self, source: &str) {
        while let Some(character) = self.peek(source).filter(|c| WHITESPACE.contains(c)) {
            self.advance(character);
        }
    }
}

/// Tokens after which an operand is still required, so the expression cannot end.
fn awaits_operand(previous: Option<TokenKind>) -> bool {
    matches!(
        previous,
        Some(TokenKind::Unary | TokenKind::Operator | TokenKind::Function)
    )
}

/// Unary signs may only open an expression or follow an operator or group opener.
fn accepts_unary(previous: Option<TokenKind>) -> bool {
    matches!(
        previous,
        None | Some(
            TokenKind::Operator | TokenKind::LeftParen | TokenKind::LeftBracket | TokenKind::Comma
        )
    )
}

/// Numbers, strings, variables and function names.
fn accepts_operand(previous: Option<TokenKind>) -> bool {
    previous == Some(TokenKind::Unary) || accepts_unary(previous)
}

/// Binary operators and closing parentheses/brackets.
fn follows_operand(previous: Option<TokenKind>) -> bool {
    matches!(
        previous,
        Some(
            TokenKind::Number
                | TokenKind::String
                | TokenKind::Variable
                | TokenKind::RightParen
                | TokenKind::RightBracket
        )
    )
}

fn accepts_comma(previous: Option<TokenKind>) -> bool {
    previous == Some(TokenKind::Function) || follows_operand(previous)
}

fn accepts_left_paren(previous: Option<TokenKind>) -> bool {
    previous == Some(TokenKind::Function) || accepts_operand(previous)
}

/// Indexing must follow a variable.
fn accepts_left_bracket(previous: Option<TokenKind>) -> bool {
    previous == Some(TokenKind::Variable)
}

fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == DECIMAL_POINT
}

fn is_variable_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

fn is_function_character(character: char) -> bool {
    character.is_ascii_lowercase()
}

fn is_operator_continuation(character: char) -> bool {
    OPERATOR_CONTINUATION.contains(&character)
}

/// Reads the next token of `source`, advancing `context` past it.
///
/// The legality of every token depends on the kind of the token before it, e.g. a binary
/// operator must follow an operand while a unary sign must not.
///
/// # Arguments
///
/// * `context`: The cursor of the expression being lexed.
/// * `source`: The expression text.
///
/// returns: The next token, or a token of kind [`TokenKind::End`] once only whitespace remains.
///
/// # Examples
///
/// ```
/// # use infix_evaluator::interpreter::error::ExpressionError;
/// # fn main() -> Result<(), ExpressionError> {
/// use infix_evaluator::interpreter::config::Config;
/// use infix_evaluator::interpreter::lexer::{next_token, ParseContext};
/// use infix_evaluator::interpreter::token::TokenKind;
///
/// let source = "-49";
/// let mut context = ParseContext::new(&Config::default());
///
/// assert_eq!(next_token(&mut context, source)?.lexeme(), "-u");
/// assert_eq!(next_token(&mut context, source)?.lexeme(), "49");
/// assert_eq!(next_token(&mut context, source)?.kind(), TokenKind::End);
/// # Ok(()) }
/// ```
pub fn next_token(context: &mut ParseContext, source: &str) -> Result<Token, ExpressionError> {
    context.skip_whitespace(source);

    let character = match context.peek(source) {
        None => return end_of_input(context),
        Some(character) => character,
    };

    let token = if UNARY_SIGNS.contains(&character) && accepts_unary(context.previous) {
        context.advance(character);
        Token::new(TokenKind::Unary, format!("{}u", character))
    } else if is_number_character(character) {
        lex_number(context, source)?
    } else if character == '\'' {
        lex_single_quoted_string(context, source)?
    } else if character == '"' {
        lex_double_quoted_string(context, source)?
    } else if OPERATOR_START.contains(&character) {
        lex_operator(context, source)?
    } else if character == VARIABLE_SIGIL {
        lex_variable(context, source)?
    } else if character.is_ascii_alphabetic() {
        lex_function(context, source)?
    } else {
        lex_punctuation(context, character)?
    };

    trace!("lexed {:?} ending at offset {}", token, context.offset);
    context.previous = Some(token.kind());
    Ok(token)
}

fn end_of_input(context: &ParseContext) -> Result<Token, ExpressionError> {
    if awaits_operand(context.previous) {
        return Err(context.error(ErrorKind::InvalidCharacter));
    }
    if context.paren_depth != 0 {
        return Err(context.error(ErrorKind::UnbalancedParen));
    }
    if context.bracket_depth != 0 {
        return Err(context.error(ErrorKind::UnbalancedBracket));
    }
    Ok(Token::end())
}

fn lex_number(context: &mut ParseContext, source: &str) -> Result<Token, ExpressionError> {
    context.expect_previous(accepts_operand)?;

    let mut lexeme = String::new();
    let mut seen_decimal_point = false;
    while let Some(character) = context.peek(source).filter(|&c| is_number_character(c)) {
        if character == DECIMAL_POINT {
            if seen_decimal_point {
                return Err(context.error(ErrorKind::InvalidNumber));
            }
            seen_decimal_point = true;
        }
        context.consume(&mut lexeme, character, ErrorKind::InvalidNumber)?;
    }

    if !lexeme.chars().any(|c| c.is_ascii_digit()) {
        return Err(context.error(ErrorKind::InvalidNumber));
    }
    Ok(Token::new(TokenKind::Number, lexeme))
}

fn lex_single_quoted_string(
    context: &mut ParseContext,
    source: &str,
) -> Result<Token, ExpressionError> {
    context.expect_previous(accepts_operand)?;

    let mut lexeme = String::new();
    context.consume(&mut lexeme, '\'', ErrorKind::UnbalancedQuote)?;
    loop {
        match context.peek(source) {
            None => return Err(context.error(ErrorKind::UnbalancedQuote)),
            Some('\'') => {
                context.consume(&mut lexeme, '\'', ErrorKind::UnbalancedQuote)?;
                break;
            }
            Some(character) => {
                context.consume(&mut lexeme, character, ErrorKind::UnbalancedQuote)?
            }
        }
    }
    Ok(Token::new(TokenKind::String, lexeme))
}

/// Like a single-quoted string, except that a backslash escapes the character after it.
fn lex_double_quoted_string(
    context: &mut ParseContext,
    source: &str,
) -> Result<Token, ExpressionError> {
    context.expect_previous(accepts_operand)?;

    let mut lexeme = String::new();
    context.consume(&mut lexeme, '"', ErrorKind::UnbalancedQuote)?;
    loop {
        match context.peek(source) {
            None => return Err(context.error(ErrorKind::UnbalancedQuote)),
            Some('"') => {
                context.consume(&mut lexeme, '"', ErrorKind::UnbalancedQuote)?;
                break;
            }
            Some('\\') => {
                context.consume(&mut lexeme, '\\', ErrorKind::UnbalancedQuote)?;
                let escaped = context
                    .peek(source)
                    .ok_or_else(|| context.error(ErrorKind::InvalidString))?;
                context.consume(&mut lexeme, escaped, ErrorKind::UnbalancedQuote)?;
            }
            Some(character) => {
                context.consume(&mut lexeme, character, ErrorKind::UnbalancedQuote)?
            }
        }
    }
    Ok(Token::new(TokenKind::String, lexeme))
}

fn lex_operator(context: &mut ParseContext, source: &str) -> Result<Token, ExpressionError> {
    context.expect_previous(follows_operand)?;

    let mut lexeme = String::new();
    if let Some(first) = context.peek(source) {
        context.consume(&mut lexeme, first, ErrorKind::UnknownOperator)?;
    }
    context.consume_while(
        source,
        &mut lexeme,
        is_operator_continuation,
        ErrorKind::UnknownOperator,
    )?;
    Ok(Token::new(TokenKind::Operator, lexeme))
}

fn lex_variable(context: &mut ParseContext, source: &str) -> Result<Token, ExpressionError> {
    context.expect_previous(accepts_operand)?;

    let mut lexeme = String::new();
    context.consume(&mut lexeme, VARIABLE_SIGIL, ErrorKind::InvalidVariable)?;
    context.consume_while(
        source,
        &mut lexeme,
        is_variable_character,
        ErrorKind::InvalidVariable,
    )?;

    if lexeme.len() == VARIABLE_SIGIL.len_utf8() {
        return Err(context.error(ErrorKind::InvalidVariable));
    }
    Ok(Token::new(TokenKind::Variable, lexeme))
}

/// Function names start with any letter and continue with lowercase letters.
fn lex_function(context: &mut ParseContext, source: &str) -> Result<Token, ExpressionError> {
    context.expect_previous(accepts_operand)?;

    let mut lexeme = String::new();
    if let Some(first) = context.peek(source) {
        context.consume(&mut lexeme, first, ErrorKind::InvalidFunction)?;
    }
    context.consume_while(
        source,
        &mut lexeme,
        is_function_character,
        ErrorKind::InvalidFunction,
    )?;
    Ok(Token::new(TokenKind::Function, lexeme))
}

fn lex_punctuation(context: &mut ParseContext, character: char) -> Result<Token, ExpressionError> {
    let kind = match character {
        ',' => {
            context.expect_previous(accepts_comma)?;
            TokenKind::Comma
        }
        '(' => {
            context.expect_previous(accepts_left_paren)?;
            context.paren_depth += 1;
            TokenKind::LeftParen
        }
        ')' => {
            context.expect_previous(follows_operand)?;
            let depth = context
                .paren_depth
                .checked_sub(1)
                .ok_or_else(|| context.error(ErrorKind::UnbalancedParen))?;
            context.paren_depth = depth;
            TokenKind::RightParen
        }
        '[' => {
            context.expect_previous(accepts_left_bracket)?;
            context.bracket_depth += 1;
            TokenKind::LeftBracket
        }
        ']' => {
            context.expect_previous(follows_operand)?;
            let depth = context
                .bracket_depth
                .checked_sub(1)
                .ok_or_else(|| context.error(ErrorKind::UnbalancedBracket))?;
            context.bracket_depth = depth;
            TokenKind::RightBracket
        }
        _ => return Err(context.error(ErrorKind::InvalidCharacter)),
    };
    context.advance(character);
    Ok(Token::new(kind, character.to_string()))
}

/// Splits the whole expression into its infix tokens, without the final end token.
///
/// # Arguments
///
/// * `source`: The expression text.
/// * `config`: Limits applied while lexing.
///
/// returns: The tokens in the order they appear in the expression.
pub fn tokenize(source: &str, config: &Config) -> Result<TokenSequence, ExpressionError> {
    let mut context = ParseContext::new(config);
    let mut tokens = TokenSequence::new();
    loop {
        let token = next_token(&mut context, source)?;
        if token.is_kind(TokenKind::End) {
            break;
        }
        tokens
            .append(token)
            .map_err(|kind| context.error(kind))?;
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn lex(source: &str) -> Result<Vec<(TokenKind, String)>, ExpressionError> {
        let tokens = tokenize(source, &Config::default())?;
        Ok(tokens
            .into_iter()
            .map(|token| (token.kind(), token.lexeme().to_string()))
            .collect())
    }

    fn lex_error(source: &str) -> ExpressionError {
        tokenize(source, &Config::default()).expect_err("Should return Err")
    }

    #[test]
    fn unary_minus_is_marked_and_separate_from_number() {
        let tokens = lex("-49").unwrap();
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Unary, "-u".to_string()),
                (TokenKind::Number, "49".to_string()),
            ]
        );
    }

    #[test]
    fn binary_minus_after_operand_is_an_operator() {
        let tokens = lex("2-3").unwrap();
        assert_eq!(tokens[1], (TokenKind::Operator, "-".to_string()));
    }

    #[test]
    fn minus_after_operator_is_unary() {
        let tokens = lex("2*-3").unwrap();
        assert_eq!(tokens[1], (TokenKind::Operator, "*".to_string()));
        assert_eq!(tokens[2], (TokenKind::Unary, "-u".to_string()));
    }

    #[parameterized(
        source = { "2>=3", "2==3", "2!=3", "2<=3", "2>3", "2=3", "2<3" },
        operator = { ">=", "==", "!=", "<=", ">", "=", "<" }
    )]
    fn multi_character_operators_are_single_tokens(source: &str, operator: &str) {
        let tokens = lex(source).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], (TokenKind::Operator, operator.to_string()));
    }

    #[test]
    fn whitespace_is_skipped() {
        let tokens = lex(" \t(13 +\r\n 2) / 3 ").unwrap();
        let lexemes: Vec<&str> = tokens.iter().map(|(_, lexeme)| lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["(", "13", "+", "2", ")", "/", "3"]);
    }

    #[test]
    fn strings_keep_their_delimiters() {
        let tokens = lex("'abd\\\"asra'").unwrap();
        assert_eq!(tokens, vec![(TokenKind::String, "'abd\\\"asra'".to_string())]);

        let tokens = lex("\"abc\\\"def\"").unwrap();
        assert_eq!(tokens, vec![(TokenKind::String, "\"abc\\\"def\"".to_string())]);
    }

    #[test]
    fn variables_functions_and_indexing() {
        let tokens = lex("2 + $a[17, int(3/-7)]").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Variable,
                TokenKind::LeftBracket,
                TokenKind::Number,
                TokenKind::Comma,
                TokenKind::Function,
                TokenKind::LeftParen,
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Unary,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::RightBracket,
            ]
        );
        assert_eq!(tokens[2].1, "$a");
        assert_eq!(tokens[6].1, "int");
    }

    #[test]
    fn function_name_continues_only_with_lowercase_letters() {
        let tokens = lex("Max(1)").unwrap();
        assert_eq!(tokens[0], (TokenKind::Function, "Max".to_string()));

        let error = lex_error("maX(1)");
        assert_eq!(error, ExpressionError::new(ErrorKind::InvalidCharacter, 2));
    }

    #[test]
    fn empty_expression_has_no_tokens() {
        assert!(lex("").unwrap().is_empty());
        assert!(lex("  \n").unwrap().is_empty());
    }

    #[parameterized(
        source = { "(2+3", "2+3)", "$a[1", "$a]", "2.3.4", ".", "'abc", "\"abc", "\"abc\\", "$", "2+", "-", "int", "2 3", "2 @ 3", "[1]" },
        kind = {
            ErrorKind::UnbalancedParen,
            ErrorKind::UnbalancedParen,
            ErrorKind::UnbalancedBracket,
            ErrorKind::UnbalancedBracket,
            ErrorKind::InvalidNumber,
            ErrorKind::InvalidNumber,
            ErrorKind::UnbalancedQuote,
            ErrorKind::UnbalancedQuote,
            ErrorKind::InvalidString,
            ErrorKind::InvalidVariable,
            ErrorKind::InvalidCharacter,
            ErrorKind::InvalidCharacter,
            ErrorKind::InvalidCharacter,
            ErrorKind::InvalidCharacter,
            ErrorKind::InvalidCharacter,
            ErrorKind::InvalidCharacter,
        },
        offset = { 4, 3, 4, 2, 3, 1, 4, 4, 5, 1, 2, 1, 3, 2, 2, 0 }
    )]
    fn malformed_expression_fails_at_offset(source: &str, kind: ErrorKind, offset: usize) {
        assert_eq!(lex_error(source), ExpressionError::new(kind, offset));
    }

    #[test]
    fn closing_bracket_after_closed_group_is_unbalanced() {
        assert_eq!(
            lex_error("($a)]"),
            ExpressionError::new(ErrorKind::UnbalancedBracket, 4)
        );
    }

    #[test]
    fn lexeme_longer_than_limit_fails() {
        let config = Config::with_max_token_length(4);
        let error = tokenize("12345", &config).unwrap_err();
        assert_eq!(error, ExpressionError::new(ErrorKind::InvalidNumber, 4));

        let error = tokenize("'abcdef'", &config).unwrap_err();
        assert_eq!(error.kind, ErrorKind::UnbalancedQuote);

        assert!(tokenize("1234", &config).is_ok());
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let error = lex_error("'é' @");
        assert_eq!(error, ExpressionError::new(ErrorKind::InvalidCharacter, 4));
    }

    #[test]
    fn context_reset_forgets_previous_expression() {
        let config = Config::default();
        let mut context = ParseContext::new(&config);
        next_token(&mut context, "(2").unwrap();
        next_token(&mut context, "(2").unwrap();
        assert_eq!(context.paren_depth(), 1);
        assert_eq!(context.previous_kind(), Some(TokenKind::Number));

        context.reset();

        assert_eq!(context.offset(), 0);
        assert_eq!(context.paren_depth(), 0);
        assert_eq!(context.bracket_depth(), 0);
        assert_eq!(context.previous_kind(), None);
        assert_eq!(next_token(&mut context, "-1").unwrap().lexeme(), "-u");
    }

    /// Builds an input whose last token has the given kind, or `None` for an empty prefix.
    fn prefix_ending_with(previous: Option<TokenKind>) -> &'static str {
        match previous {
            None => "",
            Some(TokenKind::Unary) => "-",
            Some(TokenKind::Number) => "1",
            Some(TokenKind::String) => "'s'",
            Some(TokenKind::Operator) => "1+",
            Some(TokenKind::Variable) => "$v",
            Some(TokenKind::Function) => "f",
            Some(TokenKind::Comma) => "(1,",
            Some(TokenKind::LeftParen) => "(",
            Some(TokenKind::RightParen) => "(1)",
            Some(TokenKind::LeftBracket) => "$v[",
            Some(TokenKind::RightBracket) => "$v[1]",
            Some(kind) => unreachable!("no prefix ends with {}", kind),
        }
    }

    const PREVIOUS_KINDS: [Option<TokenKind>; 12] = [
        None,
        Some(TokenKind::Unary),
        Some(TokenKind::Number),
        Some(TokenKind::String),
        Some(TokenKind::Operator),
        Some(TokenKind::Variable),
        Some(TokenKind::Function),
        Some(TokenKind::Comma),
        Some(TokenKind::LeftParen),
        Some(TokenKind::RightParen),
        Some(TokenKind::LeftBracket),
        Some(TokenKind::RightBracket),
    ];

    /// Lexes `prefix` followed by `next` and reports whether the token made from `next` was accepted.
    fn accepts_after(previous: Option<TokenKind>, next: &str, expected: TokenKind) -> bool {
        let prefix = prefix_ending_with(previous);
        let source = format!("{} {}", prefix, next);
        let mut context = ParseContext::new(&Config::default());
        loop {
            match next_token(&mut context, &source) {
                Ok(token) if token.is_kind(TokenKind::End) => return false,
                Ok(token) if context.offset() > prefix.chars().count() => {
                    return token.is_kind(expected)
                }
                Ok(_) => continue,
                Err(error) => {
                    assert!(
                        error.offset > prefix.chars().count(),
                        "prefix {:?} should lex cleanly, got {}",
                        prefix,
                        error
                    );
                    // Any other failure means the predecessor was accepted, e.g. an unopened `)`.
                    return error.kind != ErrorKind::InvalidCharacter;
                }
            }
        }
    }

    #[parameterized(
        next = { "-", "7", "'x'", "\"x\"", "*", "$w", "g", ",", "(", ")", "[", "]" },
        expected = {
            TokenKind::Unary,
            TokenKind::Number,
            TokenKind::String,
            TokenKind::String,
            TokenKind::Operator,
            TokenKind::Variable,
            TokenKind::Function,
            TokenKind::Comma,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
        },
        is_legal = {
            accepts_unary,
            accepts_operand,
            accepts_operand,
            accepts_operand,
            follows_operand,
            accepts_operand,
            accepts_operand,
            accepts_comma,
            accepts_left_paren,
            follows_operand,
            accepts_left_bracket,
            follows_operand,
        }
    )]
    fn token_is_accepted_exactly_after_legal_predecessors(
        next: &str,
        expected: TokenKind,
        is_legal: fn(Option<TokenKind>) -> bool,
    ) {
        for previous in PREVIOUS_KINDS {
            assert_eq!(
                accepts_after(previous, next, expected),
                is_legal(previous),
                "{:?} after {:?}",
                next,
                previous
            );
        }
    }

    #[test]
    fn predecessor_tables() {
        use TokenKind::*;
        let legal_after = |is_legal: fn(Option<TokenKind>) -> bool| -> Vec<Option<TokenKind>> {
            PREVIOUS_KINDS
                .into_iter()
                .filter(|previous| is_legal(*previous))
                .collect()
        };

        assert_eq!(
            legal_after(accepts_unary),
            vec![None, Some(Operator), Some(Comma), Some(LeftParen), Some(LeftBracket)]
        );
        assert_eq!(
            legal_after(accepts_operand),
            vec![None, Some(Unary), Some(Operator), Some(Comma), Some(LeftParen), Some(LeftBracket)]
        );
        assert_eq!(
            legal_after(follows_operand),
            vec![Some(Number), Some(String), Some(Variable), Some(RightParen), Some(RightBracket)]
        );
        assert_eq!(
            legal_after(accepts_comma),
            vec![
                Some(Number),
                Some(String),
                Some(Variable),
                Some(Function),
                Some(RightParen),
                Some(RightBracket)
            ]
        );
        assert_eq!(
            legal_after(accepts_left_paren),
            vec![
                None,
                Some(Unary),
                Some(Operator),
                Some(Function),
                Some(Comma),
                Some(LeftParen),
                Some(LeftBracket)
            ]
        );
        assert_eq!(legal_after(accepts_left_bracket), vec![Some(Variable)]);
        assert_eq!(
            legal_after(awaits_operand),
            vec![Some(Unary), Some(Operator), Some(Function)]
        );
    }
}
