mod executor;
mod fork_executor;
mod process;
mod redirect;
pub mod builtin;
pub mod pipeline;


pub use builtin::{BuiltinCommand, BuiltinManager};
pub use executor::{
    EXIT_FAILURE, EXIT_NOT_EXECUTABLE, EXIT_NOT_FOUND, EXIT_SUCCESS, ExecStatus, Executor, exit_code,
};
pub use fork_executor::ForkExecutor;
pub use pipeline::PipelineHandler;
pub use process::PreparedCommand;
pub use redirect::{RedirectInfo, RedirectKind, Redirections};
pub use crate::error::ExecError;
