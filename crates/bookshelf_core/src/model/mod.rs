//! Catalog domain model.
//!
//! # Invariants
//! - Every stored book is identified by a store-assigned `BookId`.
//! - Deletion is permanent; ids are never reused.

pub mod book;
