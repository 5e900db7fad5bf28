//! Runtime configuration resolved from command-line arguments.

use crate::args::CliArgs;
use bookshelf_core::{default_log_level, SearchMode};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub db_path: PathBuf,
    pub search_mode: SearchMode,
    pub log_level: String,
    /// `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl From<CliArgs> for ShellConfig {
    fn from(args: CliArgs) -> Self {
        let search_mode = if args.literal_search {
            SearchMode::Literal
        } else {
            SearchMode::Pattern
        };

        Self {
            db_path: args.db,
            search_mode,
            log_level: args
                .log_level
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: args.log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ShellConfig;
    use crate::args::CliArgs;
    use bookshelf_core::{default_log_level, SearchMode};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_use_library_db_and_pattern_search() {
        let config = ShellConfig::from(CliArgs::parse_from(["bookshelf"]));

        assert_eq!(config.db_path, PathBuf::from("library.db"));
        assert_eq!(config.search_mode, SearchMode::Pattern);
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::parse_from([
            "bookshelf",
            "--db",
            "/tmp/books.db",
            "--log-level",
            "warn",
            "--log-dir",
            "/tmp/bookshelf-logs",
            "--literal-search",
        ]);
        let config = ShellConfig::from(args);

        assert_eq!(config.db_path, PathBuf::from("/tmp/books.db"));
        assert_eq!(config.search_mode, SearchMode::Literal);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/bookshelf-logs")));
    }
}
