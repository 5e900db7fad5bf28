//! Catalog search options.
//!
//! # Responsibility
//! - Describe substring queries over `title` and `author`.
//! - Translate query text into SQLite `LIKE` patterns.

pub mod query;
