use std::io::{self, BufRead, Read, Write};
use crate::lexer::token::MAX_INPUT_LENGTH;

/// Splits a byte stream into newline-delimited records of at most
/// `LineReader::LIMIT` bytes. A longer line continues as the next record; a
/// final record without a trailing newline is still yielded.
pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub const LIMIT: usize = MAX_INPUT_LENGTH - 1;

    pub fn new(inner: R) -> Self {
        LineReader { inner }
    }

    pub fn read_record(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let n = (&mut self.inner)
            .take(Self::LIMIT as u64)
            .read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

pub struct InputHandler<R> {
    reader: LineReader<R>,
    prompt: Option<String>,
}

impl<R: BufRead> InputHandler<R> {
    /// `prompt: None` reads silently, as when running a script file.
    pub fn new(input: R, prompt: Option<String>) -> Self {
        InputHandler {
            reader: LineReader::new(input),
            prompt,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.prompt.is_some()
    }

    /// `Ok(None)` on EOF (e.g. Ctrl-D).
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(prompt) = &self.prompt {
            let mut stdout = io::stdout();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }
        self.reader.read_record()
    }
}
