//! `bookshelf` entry point.
//!
//! # Responsibility
//! - Resolve configuration and start optional file logging.
//! - Run the interaction shell on stdin/stdout against the configured file.

use bookshelf_cli::{CliArgs, Shell, ShellConfig};
use bookshelf_core::{init_logging, SqliteCatalogStore};
use clap::Parser;
use log::error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = ShellConfig::from(CliArgs::parse());

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("bookshelf: {err}");
            return ExitCode::FAILURE;
        }
    }

    let store = SqliteCatalogStore::new(config.db_path.clone());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&store, stdin.lock(), stdout.lock(), config.search_mode);

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=shell_exit module=cli status=error error={err}");
            eprintln!("bookshelf: {err}");
            ExitCode::FAILURE
        }
    }
}
