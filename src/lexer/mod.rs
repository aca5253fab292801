pub mod token;

pub use token::{TokenSeq, is_operator};
use token::{MAX_INPUT_LENGTH, MAX_TOKEN_LENGTH, is_operator_char};

pub struct Lexer {
    tokens: TokenSeq,
    buf: String,
    buf_len: usize,
    in_quotes: bool,
}

impl Lexer {
    /// Splits a raw line into tokens. Never fails: an unterminated quote or a
    /// bare operator still yields a token sequence.
    ///
    /// Only the first `MAX_INPUT_LENGTH` characters are scanned, and a NUL
    /// ends the line.
    pub fn tokenize(line: &str) -> TokenSeq {
        let mut lexer = Lexer {
            tokens: TokenSeq::new(),
            buf: String::new(),
            buf_len: 0,
            in_quotes: false,
        };

        for ch in line.chars().take(MAX_INPUT_LENGTH).take_while(|&c| c != '\0') {
            lexer.scan(ch);
        }
        lexer.flush();

        lexer.tokens
    }

    fn scan(&mut self, ch: char) {
        if ch == '"' {
            self.in_quotes = !self.in_quotes;
            if !self.in_quotes {
                // closing quote always emits, "" included
                self.emit();
            }
            return;
        }

        if self.in_quotes {
            self.push_char(ch);
            return;
        }

        match ch {
            ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c' => self.flush(),
            c if is_operator_char(c) => {
                self.flush();
                self.tokens.push(c.to_string());
            }
            c => self.push_char(c),
        }
    }

    fn push_char(&mut self, ch: char) {
        if self.buf_len < MAX_TOKEN_LENGTH {
            self.buf.push(ch);
            self.buf_len += 1;
        }
    }

    fn flush(&mut self) {
        if !self.buf.is_empty() {
            self.emit();
        }
    }

    fn emit(&mut self) {
        let token = std::mem::take(&mut self.buf);
        self.buf_len = 0;
        self.tokens.push(token);
    }
}
