//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Run single-statement CRUD and search queries against `books`.
//! - Decode rows into [`Book`] values.
//!
//! # Invariants
//! - No validation on write; callers pre-validate.
//! - Reads return rows ordered by `id`, which is insertion order.
//! - Rows with non-decodable columns are reported as `InvalidData`.

use crate::db::DbError;
use crate::model::book::{Book, BookId, NewBook};
use crate::search::query::{SearchMode, SearchQuery};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT id, title, author, year FROM books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::InvalidColumnType(_, column, kind) => Self::InvalidData(format!(
                "column `{column}` holds a value of type {kind}"
            )),
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Connection-scoped data access for book records.
pub trait BookRepository {
    fn create_book(&self, book: &NewBook) -> RepoResult<BookId>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    fn search_books(&self, query: &SearchQuery) -> RepoResult<Vec<Book>>;
    /// Returns whether a row was changed.
    fn update_book(&self, id: BookId, book: &NewBook) -> RepoResult<bool>;
    /// Returns whether a row was removed.
    fn delete_book(&self, id: BookId) -> RepoResult<bool>;
}

/// SQLite-backed book repository borrowing an open connection.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn collect_books(&self, sql: &str, params: impl rusqlite::Params) -> RepoResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn create_book(&self, book: &NewBook) -> RepoResult<BookId> {
        self.conn.execute(
            "INSERT INTO books (title, author, year) VALUES (?1, ?2, ?3);",
            params![book.title.as_str(), book.author.as_str(), book.year],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }

        Ok(None)
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.collect_books(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"), [])
    }

    fn search_books(&self, query: &SearchQuery) -> RepoResult<Vec<Book>> {
        let filter = match query.mode {
            SearchMode::Pattern => "title LIKE ?1 OR author LIKE ?1",
            SearchMode::Literal => "title LIKE ?1 ESCAPE '\\' OR author LIKE ?1 ESCAPE '\\'",
        };
        self.collect_books(
            &format!("{BOOK_SELECT_SQL} WHERE {filter} ORDER BY id ASC;"),
            [query.like_pattern()],
        )
    }

    fn update_book(&self, id: BookId, book: &NewBook) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE books
             SET
                title = ?1,
                author = ?2,
                year = ?3
             WHERE id = ?4;",
            params![book.title.as_str(), book.author.as_str(), book.year, id],
        )?;

        Ok(changed > 0)
    }

    fn delete_book(&self, id: BookId) -> RepoResult<bool> {
        let removed = self.conn.execute("DELETE FROM books WHERE id = ?1;", [id])?;
        Ok(removed > 0)
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    Ok(Book {
        id: row.get("id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        year: row.get("year")?,
    })
}

