//! Core catalog logic for Bookshelf.
//! Owns the `books` table and every operation that touches it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{clamp_year, Book, BookId, BookValidationError, NewBook, YEAR_MAX, YEAR_MIN};
pub use repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
pub use search::query::{SearchMode, SearchQuery};
pub use store::catalog_store::{CatalogStore, SqliteCatalogStore, DEFAULT_DB_FILE_NAME};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
