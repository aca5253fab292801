use std::os::unix::io::{AsRawFd, RawFd};
use nix::fcntl::{FcntlArg, FdFlag, fcntl};
use nix::unistd::pipe;
use crate::error::ExecError;
use super::executor::ExecStatus;
use super::process::{PreparedCommand, wait_for};

pub struct PipelineHandler;

impl PipelineHandler {
    /// Runs `left | right` as two concurrent children joined by one pipe.
    ///
    /// Built-ins are not recognized here: both sides go straight to `execvp`.
    /// Returns the right-hand child's status once both have been reaped.
    pub fn run_pipeline(left: &[String], right: &[String]) -> ExecStatus {
        if left.is_empty() || right.is_empty() {
            return Err(ExecError::Pipeline("missing command on one side of '|'".into()));
        }
        let left = PreparedCommand::new(left)?;
        let right = PreparedCommand::new(right)?;

        let (read_end, write_end) = pipe().map_err(ExecError::Pipe)?;
        let (read_fd, write_fd) = (read_end.as_raw_fd(), write_end.as_raw_fd());
        set_cloexec(read_fd)?;
        set_cloexec(write_fd)?;
        let both = [read_fd, write_fd];

        let left_pid = left.spawn(None, Some(write_fd), &both)?;
        let right_pid = match right.spawn(Some(read_fd), None, &both) {
            Ok(pid) => pid,
            Err(e) => {
                // with no reader left, the left child gets a broken pipe instead of blocking
                drop(read_end);
                drop(write_end);
                let _ = wait_for(left_pid);
                return Err(e);
            }
        };

        // The parent holds neither end while the children run, so the reader
        // sees EOF as soon as the writer exits.
        drop(read_end);
        drop(write_end);

        let left_status = wait_for(left_pid);
        let right_status = wait_for(right_pid)?;
        left_status?;
        Ok(right_status)
    }
}

// Keeps the pipe out of unrelated children; the dup2'd stdio copies in our
// own children do not inherit the flag.
fn set_cloexec(fd: RawFd) -> Result<(), ExecError> {
    fcntl(fd, FcntlArg::F_SETFD(FdFlag::FD_CLOEXEC)).map_err(ExecError::Pipe)?;
    Ok(())
}
