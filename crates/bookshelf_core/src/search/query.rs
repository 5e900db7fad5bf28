//! Substring search query and `LIKE` pattern construction.
//!
//! # Invariants
//! - The pattern always wraps the query in `%…%`, so an empty query matches
//!   every record.
//! - Matching uses SQLite's default `LIKE` collation (ASCII case-insensitive).

/// How `%` and `_` inside the query text are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Query text is forwarded as-is; `%` and `_` act as `LIKE` wildcards.
    #[default]
    Pattern,
    /// `%`, `_` and the escape character match themselves.
    Literal,
}

/// Escape character used with `LIKE … ESCAPE` in literal mode.
pub const LIKE_ESCAPE: char = '\\';

/// Substring query over book titles and authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub mode: SearchMode,
}

impl SearchQuery {
    /// Creates a query in the default [`SearchMode::Pattern`] mode.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: SearchMode::Pattern,
        }
    }

    /// Creates a query whose wildcard characters match literally.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: SearchMode::Literal,
        }
    }

    /// Returns the `LIKE` pattern bound for both columns.
    pub fn like_pattern(&self) -> String {
        match self.mode {
            SearchMode::Pattern => format!("%{}%", self.text),
            SearchMode::Literal => format!("%{}%", escape_like(&self.text)),
        }
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == LIKE_ESCAPE || ch == '%' || ch == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_like, SearchMode, SearchQuery};

    #[test]
    fn default_mode_keeps_wildcards() {
        let query = SearchQuery::new("50%_off");
        assert_eq!(query.mode, SearchMode::Pattern);
        assert_eq!(query.like_pattern(), "%50%_off%");
    }

    #[test]
    fn literal_mode_escapes_wildcards_and_escape_char() {
        assert_eq!(escape_like(r"50%_off\x"), r"50\%\_off\\x");
        assert_eq!(SearchQuery::literal("a%").like_pattern(), r"%a\%%");
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(SearchQuery::new("").like_pattern(), "%%");
        assert_eq!(SearchQuery::literal("").like_pattern(), "%%");
    }
}
