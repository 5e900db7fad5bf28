//! Menu-driven interaction shell over a [`CatalogStore`].
//!
//! # Responsibility
//! - Present the navigation menu and collect form fields line by line.
//! - Call exactly one store operation per submitted form.
//! - Render banners and record cards for every outcome.
//!
//! # Invariants
//! - Validation failures are rendered and never reach the store.
//! - Storage errors are not caught here; they end the session.
//! - Update/Delete select records by id and pre-fill from `get(id)`.
//! - End of input quits cleanly, even in the middle of a form.

use crate::render;
use bookshelf_core::{
    clamp_year, Book, BookId, CatalogStore, NewBook, RepoError, SearchMode, SearchQuery,
};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const APP_TITLE: &str = "📚 Library Management System";
const FIELDS_REQUIRED: &str = "All fields are required!";
const NO_BOOKS: &str = "No books found!";

pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug)]
pub enum ShellError {
    Repo(RepoError),
    Io(io::Error),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "catalog error: {err}"),
            Self::Io(err) => write!(f, "terminal error: {err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for ShellError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Navigation menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    View,
    Search,
    Update,
    Delete,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        Self::Add,
        Self::View,
        Self::Search,
        Self::Update,
        Self::Delete,
        Self::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Book",
            Self::View => "View Books",
            Self::Search => "Search Books",
            Self::Update => "Update Book",
            Self::Delete => "Delete Book",
            Self::Quit => "Quit",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::View => "2",
            Self::Search => "3",
            Self::Update => "4",
            Self::Delete => "5",
            Self::Quit => "q",
        }
    }

    /// Accepts the menu key (`1`-`5`, `q`) or the first word of the label.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = input.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|action| {
            let first_word = action.label().split(' ').next().unwrap_or_default();
            choice == action.key() || choice == first_word.to_ascii_lowercase()
        })
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive catalog shell reading forms from `input` and rendering to `output`.
pub struct Shell<'store, S: CatalogStore, R: BufRead, W: Write> {
    store: &'store S,
    input: R,
    output: W,
    search_mode: SearchMode,
}

impl<'store, S: CatalogStore, R: BufRead, W: Write> Shell<'store, S, R, W> {
    pub fn new(store: &'store S, input: R, output: W, search_mode: SearchMode) -> Self {
        Self {
            store,
            input,
            output,
            search_mode,
        }
    }

    /// Runs the menu loop until Quit or end of input.
    pub fn run(&mut self) -> ShellResult<()> {
        self.store.initialize()?;
        writeln!(self.output, "{}", render::heading(APP_TITLE))?;

        loop {
            self.render_menu()?;
            let Some(choice) = self.prompt("> ")? else {
                break;
            };
            if choice.is_empty() {
                continue;
            }
            let Some(action) = MenuAction::parse(&choice) else {
                writeln!(self.output, "{}", render::warning("Unknown menu choice."))?;
                continue;
            };

            let flow = match action {
                MenuAction::Add => self.add_book()?,
                MenuAction::View => self.view_books()?,
                MenuAction::Search => self.search_books()?,
                MenuAction::Update => self.update_book()?,
                MenuAction::Delete => self.delete_book()?,
                MenuAction::Quit => Flow::Exit,
            };
            if let Flow::Exit = flow {
                break;
            }
        }

        info!("event=shell_exit module=cli status=ok");
        self.output.flush()?;
        Ok(())
    }

    fn render_menu(&mut self) -> ShellResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Navigation")?;
        for action in MenuAction::ALL {
            writeln!(self.output, "  [{}] {}", action.key(), action.label())?;
        }
        Ok(())
    }

    fn add_book(&mut self) -> ShellResult<Flow> {
        writeln!(self.output, "{}", render::heading("📚 Add a New Book"))?;
        let Some(title) = self.prompt_text("Book Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt_text("Author Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt_year("Publication Year: ", None)? else {
            return Ok(Flow::Exit);
        };

        let book = NewBook::new(title, author, year.unwrap_or(0));
        if let Err(err) = book.validate() {
            warn!("event=book_add module=cli status=rejected reason={err}");
            writeln!(self.output, "{}", render::error(FIELDS_REQUIRED))?;
            return Ok(Flow::Continue);
        }

        self.store.create(&book)?;
        let message = format!("Book '{}' added successfully!", book.title);
        writeln!(self.output, "{}", render::success(&message))?;
        Ok(Flow::Continue)
    }

    fn view_books(&mut self) -> ShellResult<Flow> {
        writeln!(self.output, "{}", render::heading("📖 Library Books"))?;
        let books = self.store.list_all()?;
        self.render_cards(&books, NO_BOOKS)?;
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> ShellResult<Flow> {
        writeln!(self.output, "{}", render::heading("🔎 Search for a Book"))?;
        let Some(text) = self.prompt_text("Enter book title or author name: ")? else {
            return Ok(Flow::Exit);
        };

        let query = SearchQuery {
            text,
            mode: self.search_mode,
        };
        let hits = self.store.search(&query)?;
        self.render_cards(&hits, "No matching books found!")?;
        Ok(Flow::Continue)
    }

    fn update_book(&mut self) -> ShellResult<Flow> {
        writeln!(self.output, "{}", render::heading("✏️ Update Book Details"))?;
        let Some(selected) = self.select_book("Select Book (id): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(current) = selected else {
            return Ok(Flow::Continue);
        };

        let Some(title) = self.prompt_with_default("New Title", &current.title)? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt_with_default("New Author", &current.author)? else {
            return Ok(Flow::Exit);
        };
        let year_prompt = format!("New Year [{}]: ", current.year);
        let Some(year) = self.prompt_year(&year_prompt, Some(current.year))? else {
            return Ok(Flow::Exit);
        };

        let book = NewBook::new(title, author, year.unwrap_or(0));
        if let Err(err) = book.validate() {
            warn!("event=book_update module=cli status=rejected reason={err}");
            writeln!(self.output, "{}", render::error(FIELDS_REQUIRED))?;
            return Ok(Flow::Continue);
        }

        self.store.update(current.id, &book)?;
        writeln!(self.output, "{}", render::success("Book updated successfully!"))?;
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> ShellResult<Flow> {
        writeln!(self.output, "{}", render::heading("🗑️ Delete a Book"))?;
        let Some(selected) = self.select_book("Select Book to Delete (id): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(book) = selected else {
            return Ok(Flow::Continue);
        };

        let confirm = format!(
            "This action is irreversible! Delete '{}'? [y/N]: ",
            book.label()
        );
        let Some(answer) = self.prompt(&confirm)? else {
            return Ok(Flow::Exit);
        };
        if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
            writeln!(self.output, "Deletion cancelled.")?;
            return Ok(Flow::Continue);
        }

        self.store.delete(book.id)?;
        writeln!(self.output, "{}", render::warning("Book deleted successfully!"))?;
        Ok(Flow::Continue)
    }

    fn render_cards(&mut self, books: &[Book], empty_notice: &str) -> ShellResult<()> {
        if books.is_empty() {
            writeln!(self.output, "{}", render::warning(empty_notice))?;
            return Ok(());
        }
        for book in books {
            writeln!(self.output, "{}", render::card(book))?;
        }
        Ok(())
    }

    /// Lists the catalog and asks for an id.
    ///
    /// Outer `None` means end of input; inner `None` means nothing was
    /// selected (empty catalog, bad id, or the record vanished).
    fn select_book(&mut self, prompt: &str) -> ShellResult<Option<Option<Book>>> {
        let books = self.store.list_all()?;
        if books.is_empty() {
            writeln!(self.output, "{}", render::warning(NO_BOOKS))?;
            return Ok(Some(None));
        }
        for book in &books {
            writeln!(self.output, "{}", render::selection_entry(book))?;
        }

        let Some(raw) = self.prompt(prompt)? else {
            return Ok(None);
        };
        let listed = raw
            .parse::<BookId>()
            .ok()
            .filter(|id| books.iter().any(|book| book.id == *id));
        let Some(id) = listed else {
            let message = format!("No book with id `{raw}`.");
            writeln!(self.output, "{}", render::warning(&message))?;
            return Ok(Some(None));
        };

        // Re-read so the form is pre-filled from the stored record.
        let book = self.store.get(id)?;
        if book.is_none() {
            let message = format!("No book with id `{id}`.");
            writeln!(self.output, "{}", render::warning(&message))?;
        }
        Ok(Some(book))
    }

    /// Writes `label` and reads one line without its terminator; `None` at end of input.
    ///
    /// Used for free-text fields, which are stored and searched as typed.
    fn prompt_text(&mut self, label: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Like [`Self::prompt_text`] but trimmed, for menu keys, ids and years.
    fn prompt(&mut self, label: &str) -> ShellResult<Option<String>> {
        let line = self.prompt_text(label)?;
        Ok(line.map(|text| text.trim().to_string()))
    }

    /// Empty input keeps `current`.
    fn prompt_with_default(&mut self, field: &str, current: &str) -> ShellResult<Option<String>> {
        let label = format!("{field} [{current}]: ");
        let value = self.prompt_text(&label)?;
        Ok(value.map(|text| {
            if text.is_empty() {
                current.to_string()
            } else {
                text
            }
        }))
    }

    /// Reads a year clamped to the accepted range, re-prompting on non-numbers.
    ///
    /// Blank input yields `default`; `Some(None)` therefore means "missing".
    fn prompt_year(
        &mut self,
        label: &str,
        default: Option<i64>,
    ) -> ShellResult<Option<Option<i64>>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse_year(&raw) {
                YearInput::Blank => return Ok(Some(default)),
                YearInput::Year(year) => return Ok(Some(Some(year))),
                YearInput::Invalid => {
                    let message = format!("`{raw}` is not a year; enter a whole number.");
                    writeln!(self.output, "{}", render::warning(&message))?;
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum YearInput {
    Blank,
    Year(i64),
    Invalid,
}

fn parse_year(raw: &str) -> YearInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return YearInput::Blank;
    }
    match trimmed.parse::<i64>() {
        Ok(year) => YearInput::Year(clamp_year(year)),
        Err(_) => YearInput::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_year, MenuAction, YearInput};

    #[test]
    fn parse_year_clamps_into_range() {
        assert_eq!(parse_year("1965"), YearInput::Year(1965));
        assert_eq!(parse_year(" 42 "), YearInput::Year(1000));
        assert_eq!(parse_year("20000"), YearInput::Year(9999));
        assert_eq!(parse_year("-5"), YearInput::Year(1000));
    }

    #[test]
    fn parse_year_flags_blank_and_garbage() {
        assert_eq!(parse_year(""), YearInput::Blank);
        assert_eq!(parse_year("nineteen"), YearInput::Invalid);
    }

    #[test]
    fn menu_accepts_keys_and_names() {
        assert_eq!(MenuAction::parse("1"), Some(MenuAction::Add));
        assert_eq!(MenuAction::parse(" search "), Some(MenuAction::Search));
        assert_eq!(MenuAction::parse("Delete"), Some(MenuAction::Delete));
        assert_eq!(MenuAction::parse("q"), Some(MenuAction::Quit));
        assert_eq!(MenuAction::parse("7"), None);
    }
}
