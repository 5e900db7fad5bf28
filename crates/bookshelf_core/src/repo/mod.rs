//! Repository layer over the `books` table.
//!
//! # Responsibility
//! - Define connection-scoped data access for catalog records.
//! - Keep SQL details out of the store and shell layers.
//!
//! # Invariants
//! - Update/delete of a missing id is a no-op, never an error.

pub mod book_repo;
