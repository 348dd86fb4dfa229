//! Runtime settings gathered from the command line and environment.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".book-store-manager";
/// Sub-folder of the data directory that receives the rolling log files.
const LOG_DIR_NAME: &str = "logs";
/// Book file read when nothing else is configured, relative to the working
/// directory.
const DEFAULT_BOOKS_FILE: &str = "books.csv";
const DEFAULT_LOG_FILTER: &str = "book_store_manager=info";

const BOOKS_FILE_ENV: &str = "BOOK_STORE_FILE";
const LOG_DIR_ENV: &str = "BOOK_STORE_LOG_DIR";
const LOG_FILTER_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file read by the "load books" action.
    pub books_path: PathBuf,
    pub log_dir: PathBuf,
    /// `EnvFilter` directive string.
    pub log_filter: String,
}

impl Config {
    /// Resolve settings from the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let books_arg = env::args_os().nth(1).map(PathBuf::from);
        let log_dir = match env::var_os(LOG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_log_dir()?,
        };
        Ok(Self::resolve(
            books_arg,
            env::var_os(BOOKS_FILE_ENV).map(PathBuf::from),
            log_dir,
            env::var(LOG_FILTER_ENV).ok(),
        ))
    }

    /// Apply precedence: command-line argument, then environment, then the
    /// built-in default.
    fn resolve(
        books_arg: Option<PathBuf>,
        books_env: Option<PathBuf>,
        log_dir: PathBuf,
        log_filter: Option<String>,
    ) -> Self {
        let books_path = books_arg
            .or(books_env)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOKS_FILE));
        let log_filter = log_filter
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            books_path,
            log_dir,
            log_filter,
        }
    }
}

/// Resolve the log directory inside the user's home.
fn default_log_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_DIR_NAME))
}
