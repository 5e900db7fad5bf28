//! Book domain model.
//!
//! # Responsibility
//! - Define the single catalog record and its write-side payload.
//! - Provide the field-presence check used before persistence.
//!
//! # Invariants
//! - `id` is assigned by storage and never changes afterwards.
//! - `year` stays within [`YEAR_MIN`, `YEAR_MAX`] when it comes from the shell.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier (`books.id`).
pub type BookId = i64;

/// Lowest publication year accepted by the year input.
pub const YEAR_MIN: i64 = 1000;
/// Highest publication year accepted by the year input.
pub const YEAR_MAX: i64 = 9999;

/// Clamps a raw year into [`YEAR_MIN`, `YEAR_MAX`].
pub fn clamp_year(year: i64) -> i64 {
    year.clamp(YEAR_MIN, YEAR_MAX)
}

/// A persisted catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl Book {
    /// Human-readable selection label, `"{title} by {author} ({year})"`.
    ///
    /// Labels are not unique; selection always goes through `id`.
    pub fn label(&self) -> String {
        format!("{} by {} ({})", self.title, self.author, self.year)
    }
}

/// Book fields without identity, used for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Checks field presence only: non-blank text and a non-zero year.
    ///
    /// Range checks belong to the input widget, not to this model.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::MissingTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::MissingAuthor);
        }
        if self.year == 0 {
            return Err(BookValidationError::MissingYear);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    MissingTitle,
    MissingAuthor,
    MissingYear,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title is required"),
            Self::MissingAuthor => write!(f, "author is required"),
            Self::MissingYear => write!(f, "year is required"),
        }
    }
}

impl Error for BookValidationError {}
