use std::io::{self, BufRead};
use crate::config::Config;
use crate::dispatch::run_line;
use crate::executor::{Executor, ForkExecutor};
use crate::io::InputHandler;
use crate::session::Session;

/// The top-level loop: one line per cycle until `exit` or EOF.
pub struct Repl<R, E = ForkExecutor> {
    input: InputHandler<R>,
    config: Config,
    session: Session,
    executor: E,
}

impl<R: BufRead> Repl<R, ForkExecutor> {
    pub fn new(input: R, config: Config, interactive: bool) -> Self {
        Self::with_executor(input, config, interactive, ForkExecutor)
    }
}

impl<R: BufRead, E: Executor> Repl<R, E> {
    pub fn with_executor(input: R, config: Config, interactive: bool, executor: E) -> Self {
        let prompt = interactive.then(|| config.prompt.clone());
        Repl {
            input: InputHandler::new(input, prompt),
            config,
            session: Session::new(),
            executor,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn run(&mut self) -> io::Result<()> {
        let interactive = self.input.is_interactive();
        if interactive {
            println!("{}", self.config.banner);
        }

        loop {
            let line = match self.input.read_line()? {
                Some(l) => l,
                None => {
                    // End with EOF (e.g. Ctrl+D)
                    if interactive {
                        println!();
                    }
                    break;
                }
            };

            if line == "exit" {
                if interactive {
                    println!("{}", self.config.farewell);
                }
                break;
            }

            self.handle_line(&line);
        }
        Ok(())
    }

    /// Dispatches one top-level line, then records it as the previous
    /// command. Nested lines run by `prev` or `source` never reach here, so
    /// the slot changes at most once per line.
    pub fn handle_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        match run_line(line, &mut self.executor, &mut self.session) {
            Ok(code) => tracing::debug!(code, line, "line finished"),
            Err(e) => {
                tracing::warn!(error = %e, line, "line failed");
                eprintln!("mini-shell: {}", e);
            }
        }
        self.session.prev.record(line);
    }
}
