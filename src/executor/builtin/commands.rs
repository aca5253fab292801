use std::fs::File;
use std::io::BufReader;
use crate::dispatch::run_line;
use crate::executor::builtin::manager::BuiltinCommand;
use crate::executor::{EXIT_FAILURE, EXIT_SUCCESS, ExecStatus, Executor};
use crate::io::LineReader;
use crate::lexer::Lexer;
use crate::session::Session;

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn run(&self, args: &[String], session: &mut Session, _executor: &mut dyn Executor) -> ExecStatus {
        let target = match args.first() {
            Some(dir) => dir.clone(),
            None => match session.home() {
                Some(home) => home,
                None => {
                    eprintln!("cd: HOME not set");
                    return Ok(EXIT_FAILURE);
                }
            },
        };
        match std::env::set_current_dir(&target) {
            Ok(_) => Ok(EXIT_SUCCESS),
            Err(e) => {
                eprintln!("cd: {}: {}", target, e);
                Ok(EXIT_FAILURE)
            }
        }
    }
}

/// `prev`: replays the last top-level line.
pub struct PrevCommandBuiltin;

impl BuiltinCommand for PrevCommandBuiltin {
    fn name(&self) -> &'static str {
        "prev"
    }
    fn run(&self, _args: &[String], session: &mut Session, executor: &mut dyn Executor) -> ExecStatus {
        if session.is_replaying() {
            eprintln!("prev: cannot replay from inside a replayed command");
            return Ok(EXIT_FAILURE);
        }
        let Some(line) = session.prev.get().map(str::to_owned) else {
            return Ok(EXIT_SUCCESS);
        };
        println!("Previous command: {}", line);
        session.replay(|s| run_line(&line, executor, s))
    }
}

pub struct HelpCommand;

impl BuiltinCommand for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }
    fn run(&self, _args: &[String], _session: &mut Session, _executor: &mut dyn Executor) -> ExecStatus {
        println!("Supported built-in commands: cd, prev, source, help, exit");
        Ok(EXIT_SUCCESS)
    }
}

pub struct SourceCommand;

impl BuiltinCommand for SourceCommand {
    fn name(&self) -> &'static str {
        "source"
    }
    fn run(&self, args: &[String], session: &mut Session, executor: &mut dyn Executor) -> ExecStatus {
        let Some(path) = args.first() else {
            eprintln!("source: expected filename");
            return Ok(EXIT_FAILURE);
        };
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("source: could not open {}: {}", path, e);
                return Ok(EXIT_FAILURE);
            }
        };

        let result = session.nested_source(|s| {
            let mut status = EXIT_SUCCESS;
            for record in LineReader::new(BufReader::new(file)) {
                let line = match record {
                    Ok(line) => line,
                    Err(e) => {
                        eprintln!("source: {}: {}", path, e);
                        return EXIT_FAILURE;
                    }
                };
                let tokens = Lexer::tokenize(&line);
                match tokens.first() {
                    None => continue,
                    // a sourced file cannot end the shell
                    Some("exit") => continue,
                    Some(_) => {}
                }
                status = match run_line(&line, executor, s) {
                    Ok(code) => code,
                    Err(e) => {
                        tracing::warn!(error = %e, file = %path, "sourced line failed");
                        eprintln!("mini-shell: {}", e);
                        EXIT_FAILURE
                    }
                };
            }
            status
        });

        match result {
            Some(status) => Ok(status),
            None => {
                eprintln!("source: {}: nesting too deep", path);
                Ok(EXIT_FAILURE)
            }
        }
    }
}
