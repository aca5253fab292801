use crate::history::PrevCommand;

pub const MAX_SOURCE_DEPTH: usize = 16;

/// Process-scoped shell state, owned by the top-level loop and lent to the
/// executor and built-ins for the duration of one line.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub prev: PrevCommand,
    replaying: bool,
    source_depth: usize,
}

impl Session {
    pub fn new() -> Self {
        Session {
            prev: PrevCommand::new(),
            replaying: false,
            source_depth: 0,
        }
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Runs `f` with the replay flag raised.
    pub fn replay<T>(&mut self, f: impl FnOnce(&mut Session) -> T) -> T {
        let saved = self.replaying;
        self.replaying = true;
        let out = f(self);
        self.replaying = saved;
        out
    }

    #[cfg(test)]
    pub fn source_depth(&self) -> usize {
        self.source_depth
    }

    /// Returns `None` when the nesting bound is already reached.
    pub fn nested_source<T>(&mut self, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        if self.source_depth >= MAX_SOURCE_DEPTH {
            return None;
        }
        self.source_depth += 1;
        let out = f(self);
        self.source_depth -= 1;
        Some(out)
    }

    pub fn home(&self) -> Option<String> {
        std::env::var("HOME").ok().filter(|h| !h.is_empty())
    }
}
