use thiserror::Error;

/// Failures seen by the parent shell. Problems inside a child (exec or
/// redirection failures) never show up here; they surface as the child's
/// exit status.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("fork failed: {0}")]
    Fork(#[source] nix::Error),
    #[error("pipe failed: {0}")]
    Pipe(#[source] nix::Error),
    #[error("wait failed: {0}")]
    Wait(#[source] nix::Error),
    #[error("argument contains a NUL byte: {0:?}")]
    InvalidArgument(String),
    #[error("pipeline error: {0}")]
    Pipeline(String),
}
