//! Connection-per-call catalog store over a SQLite file.
//!
//! # Responsibility
//! - Open a connection, run one repository call, drop the connection.
//! - Emit `catalog_*` logging events with duration and status.
//!
//! # Invariants
//! - No connection outlives a single operation.
//! - Missing ids on update/delete are reported as `false`, not as errors.
//! - Titles and authors are never written to logs.

use crate::db::open_db;
use crate::model::book::{Book, BookId, NewBook};
use crate::repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
use crate::search::query::SearchQuery;
use log::{debug, error, info};
use std::path::PathBuf;
use std::time::Instant;

/// Default database file name used when no path is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "library.db";

/// Catalog operations consumed by the interaction shell.
pub trait CatalogStore {
    /// Ensures the `books` table exists. Idempotent.
    fn initialize(&self) -> RepoResult<()>;
    /// Inserts a record and returns its store-assigned id.
    fn create(&self, book: &NewBook) -> RepoResult<BookId>;
    /// Returns every record in insertion order.
    fn list_all(&self) -> RepoResult<Vec<Book>>;
    /// Returns records whose title or author contains the query text.
    fn search(&self, query: &SearchQuery) -> RepoResult<Vec<Book>>;
    /// Fetches one record by id.
    fn get(&self, id: BookId) -> RepoResult<Option<Book>>;
    /// Overwrites the mutable fields of `id`; `false` when no such record.
    fn update(&self, id: BookId, book: &NewBook) -> RepoResult<bool>;
    /// Removes `id`; `false` when no such record.
    fn delete(&self, id: BookId) -> RepoResult<bool>;
}

/// File-backed [`CatalogStore`] holding only the database path.
#[derive(Debug, Clone)]
pub struct SqliteCatalogStore {
    db_path: PathBuf,
}

impl SqliteCatalogStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn with_repo<T>(
        &self,
        op: &'static str,
        run: impl FnOnce(&SqliteBookRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let started_at = Instant::now();
        let result = open_db(&self.db_path)
            .map_err(RepoError::from)
            .and_then(|conn| run(&SqliteBookRepository::new(&conn)));

        match &result {
            Ok(_) => debug!(
                "event=catalog_{op} module=store status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=catalog_{op} module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}

impl Default for SqliteCatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn initialize(&self) -> RepoResult<()> {
        self.with_repo("initialize", |_| Ok(()))?;
        info!(
            "event=catalog_initialize module=store status=ready path={}",
            self.db_path.display()
        );
        Ok(())
    }

    fn create(&self, book: &NewBook) -> RepoResult<BookId> {
        let id = self.with_repo("create", |repo| repo.create_book(book))?;
        info!("event=catalog_create module=store status=ok book_id={id}");
        Ok(id)
    }

    fn list_all(&self) -> RepoResult<Vec<Book>> {
        self.with_repo("list_all", |repo| repo.list_books())
    }

    fn search(&self, query: &SearchQuery) -> RepoResult<Vec<Book>> {
        let hits = self.with_repo("search", |repo| repo.search_books(query))?;
        debug!(
            "event=catalog_search module=store status=ok mode={:?} hits={}",
            query.mode,
            hits.len()
        );
        Ok(hits)
    }

    fn get(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.with_repo("get", |repo| repo.get_book(id))
    }

    fn update(&self, id: BookId, book: &NewBook) -> RepoResult<bool> {
        let changed = self.with_repo("update", |repo| repo.update_book(id, book))?;
        info!("event=catalog_update module=store status=ok book_id={id} changed={changed}");
        Ok(changed)
    }

    fn delete(&self, id: BookId) -> RepoResult<bool> {
        let removed = self.with_repo("delete", |repo| repo.delete_book(id))?;
        info!("event=catalog_delete module=store status=ok book_id={id} removed={removed}");
        Ok(removed)
    }
}
