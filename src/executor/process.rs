use std::ffi::CString;
use std::os::unix::io::RawFd;
use nix::errno::Errno;
use nix::sys::wait::waitpid;
use nix::unistd::{ForkResult, Pid, close, dup2, execvp, fork};
use crate::error::ExecError;
use super::executor::{EXIT_FAILURE, EXIT_NOT_EXECUTABLE, EXIT_NOT_FOUND, EXIT_SUCCESS, exit_code};
use super::redirect::Redirections;

/// Everything a child needs, built in the parent so the child does no
/// parsing between `fork` and `execvp`.
#[derive(Debug)]
pub struct PreparedCommand {
    pub name: String,
    argv: Vec<CString>,
    redirections: Redirections,
}

impl PreparedCommand {
    pub fn new(tokens: &[String]) -> Result<Self, ExecError> {
        let redirections = Redirections::plan(tokens);
        let argv = redirections
            .argv
            .iter()
            .map(|arg| CString::new(arg.as_str()).map_err(|_| ExecError::InvalidArgument(arg.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        let name = redirections.argv.first().cloned().unwrap_or_default();
        Ok(PreparedCommand { name, argv, redirections })
    }

    /// Forks a child that wires `stdin`/`stdout` (pipe ends, if any), closes
    /// every descriptor in `close_in_child`, applies the command's own
    /// redirections and replaces its image with the program.
    pub fn spawn(
        &self,
        stdin: Option<RawFd>,
        stdout: Option<RawFd>,
        close_in_child: &[RawFd],
    ) -> Result<Pid, ExecError> {
        match unsafe { fork() }.map_err(ExecError::Fork)? {
            ForkResult::Parent { child } => {
                tracing::debug!(pid = %child, cmd = %self.name, "spawned child");
                Ok(child)
            }
            ForkResult::Child => {
                if let Some(fd) = stdin {
                    bind_or_exit(fd, libc::STDIN_FILENO);
                }
                if let Some(fd) = stdout {
                    bind_or_exit(fd, libc::STDOUT_FILENO);
                }
                for &fd in close_in_child {
                    let _ = close(fd);
                }
                self.redirections.apply_or_exit();
                self.exec_or_exit()
            }
        }
    }

    fn exec_or_exit(&self) -> ! {
        let Some(program) = self.argv.first() else {
            // a bare `> file` only creates the file
            std::process::exit(EXIT_SUCCESS);
        };
        let errno = match execvp(program, &self.argv) {
            Ok(never) => match never {},
            Err(e) => e,
        };
        eprintln!("mini-shell: {}: {}", self.name, errno.desc());
        let code = match errno {
            Errno::ENOENT => EXIT_NOT_FOUND,
            _ => EXIT_NOT_EXECUTABLE,
        };
        std::process::exit(code);
    }
}

fn bind_or_exit(fd: RawFd, target: RawFd) {
    if let Err(e) = dup2(fd, target) {
        eprintln!("mini-shell: dup2: {}", e.desc());
        std::process::exit(EXIT_FAILURE);
    }
}

/// Blocks until `pid` terminates and reaps it.
pub fn wait_for(pid: Pid) -> Result<i32, ExecError> {
    loop {
        match waitpid(pid, None) {
            Ok(status) => {
                let code = exit_code(status);
                tracing::debug!(pid = %pid, code, "child reaped");
                return Ok(code);
            }
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(ExecError::Wait(e)),
        }
    }
}
