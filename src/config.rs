//! Runtime configuration for the terminal app. Only outer concerns live here
//! (where data goes, how chatty the log is); nothing in the store or command
//! layer reads it.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".todolist";
/// SQLite file holding the key-value storage table.
const STORAGE_FILE_NAME: &str = "storage.sqlite";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Parser)]
#[command(name = "todolist", version, about = "Categorized todo lists in the terminal")]
pub struct Cli {
    /// Directory for the storage database and logs (defaults to ~/.todolist).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Keep everything in memory; nothing is written to disk except logs.
    #[arg(long)]
    pub ephemeral: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub ephemeral: bool,
}

impl AppConfig {
    /// Fill in defaults for anything the command line left out.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let data_dir = match cli.data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let log_level = cli
            .log_level
            .unwrap_or_else(|| default_log_level().to_string());

        Ok(Self {
            data_dir,
            log_level,
            ephemeral: cli.ephemeral,
        })
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_win() {
        let cli = Cli::parse_from([
            "todolist",
            "--data-dir",
            "/tmp/todo-data",
            "--log-level",
            "warn",
            "--ephemeral",
        ]);
        let config = AppConfig::from_cli(cli).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/todo-data"));
        assert_eq!(config.log_level, "warn");
        assert!(config.ephemeral);
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/tmp/todo-data/storage.sqlite")
        );
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/todo-data/logs"));
    }

    #[test]
    fn log_level_defaults_by_build_mode() {
        let cli = Cli::parse_from(["todolist", "--data-dir", "/tmp/x"]);
        let config = AppConfig::from_cli(cli).unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert!(!config.ephemeral);
    }
}
