use nix::sys::wait::WaitStatus;
use crate::error::ExecError;
use crate::session::Session;

pub type ExecStatus = Result<i32, ExecError>;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
pub const EXIT_NOT_FOUND: i32 = 127;

/// Runs one token sequence: a built-in in-process, anything else in a child.
pub trait Executor {
    fn exec(&mut self, tokens: &[String], session: &mut Session) -> ExecStatus;
}

/// Maps a reaped child's status onto a shell exit code.
pub fn exit_code(status: WaitStatus) -> i32 {
    match status {
        WaitStatus::Exited(_, code) => code,
        WaitStatus::Signaled(_, signal, _) => 128 + signal as i32,
        _ => EXIT_FAILURE,
    }
}
