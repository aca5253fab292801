use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub banner: String,
    pub farewell: String,
}

impl Default for Config {
    fn default() -> Self {
        ConfigLoader::default_config()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub const FILE_NAME: &'static str = ".minishrc";

    pub fn default_config() -> Config {
        Config {
            prompt: "shell $ ".to_string(),
            banner: "Welcome to mini-shell.".to_string(),
            farewell: "Bye bye.".to_string(),
        }
    }

    /// `$HOME/.minishrc`, if `HOME` is set.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| Path::new(&home).join(Self::FILE_NAME))
    }

    /// The explicit path if given, else `$HOME/.minishrc` when it exists.
    /// A file that fails to load is reported and defaults are used.
    pub fn resolve(explicit: Option<&Path>) -> Config {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => return Self::default_config(),
            },
        };
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "config not loaded");
                eprintln!("mini-shell: {}: {}", path.display(), e);
                Self::default_config()
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let src = fs::read_to_string(path)?;
        Self::load_from_str(&src)
    }

    /// `key=value` lines; blank lines and `#` comments are skipped. The value
    /// is taken verbatim after the first `=`, so a prompt may end in a space.
    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut config = Self::default_config();

        for (lineno, line) in src.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse(format!("Line {}: No '=' found: {}", lineno + 1, line)));
            };

            match key.trim() {
                "prompt" => config.prompt = value.to_string(),
                "banner" => config.banner = value.to_string(),
                "farewell" => config.farewell = value.to_string(),
                k => return Err(ConfigError::Parse(format!("Line {}: Unknown key: {}", lineno + 1, k))),
            }
        }

        Ok(config)
    }
}
