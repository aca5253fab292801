use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use nix::unistd::dup2;
use crate::lexer::token::{REDIRECT_IN, REDIRECT_OUT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    In,
    Out,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectInfo {
    pub kind: RedirectKind,
    pub file: String,
}

/// A command's argument vector with its `<` / `>` pairs pulled out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redirections {
    pub argv: Vec<String>,
    pub redirects: Vec<RedirectInfo>,
}

impl Redirections {
    /// Scans left to right. Each operator followed by a path is removed
    /// together with its path; an operator with nothing after it stays in
    /// `argv` as a plain argument.
    pub fn plan(tokens: &[String]) -> Self {
        let mut plan = Redirections::default();
        let mut iter = tokens.iter().peekable();

        while let Some(token) = iter.next() {
            let kind = match token.as_str() {
                REDIRECT_IN => RedirectKind::In,
                REDIRECT_OUT => RedirectKind::Out,
                _ => {
                    plan.argv.push(token.clone());
                    continue;
                }
            };
            match iter.next() {
                Some(file) => plan.redirects.push(RedirectInfo { kind, file: file.clone() }),
                None => plan.argv.push(token.clone()),
            }
        }
        plan
    }

    /// Rebinds stdin/stdout of the calling process. Only ever called in a
    /// forked child, after any pipe wiring, so an explicit file wins over
    /// the pipe. Later redirects of the same kind win over earlier ones.
    pub fn apply(&self) -> Result<(), (String, io::Error)> {
        for r in &self.redirects {
            let (file, target) = match r.kind {
                RedirectKind::In => (File::open(&r.file), libc::STDIN_FILENO),
                RedirectKind::Out => (
                    OpenOptions::new()
                        .write(true)
                        .create(true)
                        .truncate(true)
                        .mode(0o644)
                        .open(&r.file),
                    libc::STDOUT_FILENO,
                ),
            };
            let file = file.map_err(|e| (r.file.clone(), e))?;
            dup2(file.as_raw_fd(), target)
                .map_err(|e| (r.file.clone(), io::Error::from(e)))?;
            // `file` drops here, closing the original descriptor
        }
        Ok(())
    }

    /// Child-side wrapper around [`apply`](Self::apply): on failure the
    /// child reports and exits, it never returns to the caller.
    pub fn apply_or_exit(&self) {
        if let Err((file, e)) = self.apply() {
            eprintln!("mini-shell: {}: {}", file, e);
            std::process::exit(crate::executor::EXIT_FAILURE);
        }
    }
}
