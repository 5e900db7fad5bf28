//! Command-line arguments for the `bookshelf` binary.
//!
//! # Responsibility
//! - Declare the flags accepted at startup.
//! - Leave defaults and derived settings to [`crate::config::ShellConfig`].

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Interactive book catalog backed by a local SQLite file", long_about = None)]
pub struct CliArgs {
    /// Catalog database file (created if missing)
    #[arg(long, default_value = bookshelf_core::DEFAULT_DB_FILE_NAME)]
    pub db: PathBuf,

    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Match `%` and `_` literally in searches instead of as wildcards
    #[arg(long)]
    pub literal_search: bool,
}
