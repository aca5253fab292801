use std::collections::HashMap;
use crate::executor::{ExecStatus, Executor};
use crate::session::Session;
use crate::executor::builtin::commands::{
    CdCommand,
    HelpCommand,
    PrevCommandBuiltin,
    SourceCommand,
};

pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    /// `args` excludes the command name. `executor` is the one that
    /// dispatched this built-in, for built-ins that run further lines.
    fn run(&self, args: &[String], session: &mut Session, executor: &mut dyn Executor) -> ExecStatus;
}

pub struct BuiltinManager {
    commands: HashMap<String, Box<dyn BuiltinCommand>>,
}

impl BuiltinManager {
    pub fn new() -> Self {
        let mut mgr = BuiltinManager {
            commands: HashMap::new(),
        };
        mgr.register(Box::new(CdCommand {}));
        mgr.register(Box::new(PrevCommandBuiltin {}));
        mgr.register(Box::new(HelpCommand {}));
        mgr.register(Box::new(SourceCommand {}));
        mgr
    }

    pub fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    #[cfg(test)]
    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// `None` when the first token names no built-in, so the caller falls
    /// through to spawning an external program.
    pub fn try_builtin(
        &self,
        tokens: &[String],
        session: &mut Session,
        executor: &mut dyn Executor,
    ) -> Option<ExecStatus> {
        let (name, args) = tokens.split_first()?;
        let cmd = self.commands.get(name.as_str())?;
        tracing::debug!(builtin = cmd.name(), "running built-in");
        Some(cmd.run(args, session, executor))
    }
}

impl Default for BuiltinManager {
    fn default() -> Self {
        Self::new()
    }
}
