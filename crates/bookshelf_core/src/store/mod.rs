//! Catalog Store: the persistence boundary used by front ends.
//!
//! # Responsibility
//! - Expose the catalog operations behind one trait.
//! - Own connection lifecycle so callers never hold raw handles.

pub mod catalog_store;
