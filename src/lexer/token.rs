// Tokens carry no kind tag: an operator is recognized by its literal text
// wherever the token is consumed.
pub const REDIRECT_IN: &str = "<";
pub const REDIRECT_OUT: &str = ">";   // truncating, there is no `>>`
pub const PIPE: &str = "|";
pub const SEMICOLON: &str = ";";
pub const LPAREN: &str = "(";         // reserved, not interpreted
pub const RPAREN: &str = ")";

pub const MAX_INPUT_LENGTH: usize = 255;
pub const MAX_TOKENS: usize = 255;
pub const MAX_TOKEN_LENGTH: usize = 255;

pub fn is_operator(token: &str) -> bool {
    matches!(token, REDIRECT_IN | REDIRECT_OUT | PIPE | SEMICOLON | LPAREN | RPAREN)
}

pub(crate) fn is_operator_char(ch: char) -> bool {
    matches!(ch, '<' | '>' | '|' | ';' | '(' | ')')
}

/// Ordered, bounded list of tokens for one command line.
///
/// Pushes past `MAX_TOKENS` are dropped, so a runaway line degrades into a
/// truncated argument vector instead of growing without limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSeq {
    tokens: Vec<String>,
}

impl TokenSeq {
    pub fn new() -> Self {
        TokenSeq { tokens: Vec::new() }
    }

    /// Returns `false` when the sequence is already full.
    pub fn push(&mut self, token: String) -> bool {
        if self.tokens.len() >= MAX_TOKENS {
            return false;
        }
        self.tokens.push(token);
        true
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(|s| s.as_str())
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl std::ops::Deref for TokenSeq {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.tokens
    }
}
