//! Banner and card formatting for shell output.

use bookshelf_core::Book;
use console::Style;

pub fn heading(text: &str) -> String {
    Style::new().bold().cyan().apply_to(text).to_string()
}

pub fn success(message: &str) -> String {
    format!("✅ {}", Style::new().green().apply_to(message))
}

pub fn warning(message: &str) -> String {
    format!("⚠️ {}", Style::new().yellow().apply_to(message))
}

pub fn error(message: &str) -> String {
    format!("❌ {}", Style::new().red().bold().apply_to(message))
}

/// One record as shown by View and Search.
pub fn card(book: &Book) -> String {
    format!(
        "📖 {} by {} (Published: {})",
        Style::new().bold().apply_to(&book.title),
        Style::new().italic().apply_to(&book.author),
        book.year
    )
}

/// One entry of the Update/Delete selection list.
pub fn selection_entry(book: &Book) -> String {
    format!(
        "  [{}] {}",
        Style::new().yellow().apply_to(book.id),
        book.label()
    )
}
