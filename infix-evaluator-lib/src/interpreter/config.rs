/// The longest lexeme a single token may have, in bytes.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 512;

/// Limits applied while lexing an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_token_length: usize,
}

impl Config {
    pub fn with_max_token_length(max_token_length: usize) -> Config {
        Config { max_token_length }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }
}
