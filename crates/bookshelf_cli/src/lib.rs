//! Terminal front end for the Bookshelf catalog.

pub mod args;
pub mod config;
pub mod render;
pub mod shell;

pub use args::CliArgs;
pub use config::ShellConfig;
pub use shell::{MenuAction, Shell, ShellError, ShellResult};
