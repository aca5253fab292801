use crate::lexer::token::MAX_INPUT_LENGTH;

/// Single-slot memory of the last non-empty top-level line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrevCommand {
    line: String,
}

impl PrevCommand {
    pub const CAPACITY: usize = MAX_INPUT_LENGTH - 1;

    pub fn new() -> Self {
        PrevCommand { line: String::new() }
    }

    // Overwrite the slot; empty lines leave it untouched
    pub fn record(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        self.line = line.chars().take(Self::CAPACITY).collect();
    }

    pub fn get(&self) -> Option<&str> {
        if self.line.is_empty() {
            None
        } else {
            Some(&self.line)
        }
    }
}
