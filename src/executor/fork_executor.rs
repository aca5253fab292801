use crate::session::Session;
use super::builtin::BuiltinManager;
use super::executor::{EXIT_SUCCESS, ExecStatus, Executor};
use super::process::{PreparedCommand, wait_for};

/// Runs built-ins in-process and everything else through fork/execvp,
/// blocking until the child is reaped.
pub struct ForkExecutor;

impl Executor for ForkExecutor {
    fn exec(&mut self, tokens: &[String], session: &mut Session) -> ExecStatus {
        if tokens.is_empty() {
            return Ok(EXIT_SUCCESS);
        }

        // Built-in command execution
        let builtin_manager = BuiltinManager::new();
        if let Some(status) = builtin_manager.try_builtin(tokens, session, self) {
            return status;
        }

        let command = PreparedCommand::new(tokens)?;
        let pid = command.spawn(None, None, &[])?;
        wait_for(pid)
    }
}
