use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use argh::FromArgs;
use tracing_subscriber::EnvFilter;
use mini_shell::config::ConfigLoader;
use mini_shell::repl::Repl;

#[derive(FromArgs)]
/// A small line-oriented command interpreter.
struct Args {
    /// read settings from this file instead of ~/.minishrc
    #[argh(option)]
    config: Option<PathBuf>,

    /// run the lines of this file instead of reading standard input
    #[argh(positional)]
    script: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MINISH_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args: Args = argh::from_env();
    let config = ConfigLoader::resolve(args.config.as_deref());

    let result = match &args.script {
        Some(path) => match File::open(path) {
            Ok(file) => Repl::new(BufReader::new(file), config, false).run(),
            Err(e) => {
                eprintln!("mini-shell: {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Repl::new(io::stdin().lock(), config, true).run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            ExitCode::FAILURE
        }
    }
}
