use bookshelf_core::db::open_db_in_memory;
use bookshelf_core::{BookRepository, NewBook, RepoError, SearchQuery, SqliteBookRepository};

#[test]
fn create_assigns_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let first = repo
        .create_book(&NewBook::new("Dune", "Herbert", 1965))
        .unwrap();
    let second = repo
        .create_book(&NewBook::new("Foundation", "Asimov", 1951))
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn get_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);
    let id = repo
        .create_book(&NewBook::new("Dune", "Herbert", 1965))
        .unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.title, "Dune");
    assert!(repo.get_book(id + 100).unwrap().is_none());
}

#[test]
fn update_and_delete_report_whether_a_row_was_touched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);
    let id = repo
        .create_book(&NewBook::new("Dune", "Herbert", 1965))
        .unwrap();

    assert!(repo
        .update_book(id, &NewBook::new("Dune Messiah", "Herbert", 1969))
        .unwrap());
    assert!(!repo
        .update_book(99, &NewBook::new("Ghost", "Nobody", 2000))
        .unwrap());

    assert!(repo.delete_book(id).unwrap());
    assert!(!repo.delete_book(id).unwrap());
}

#[test]
fn search_literal_mode_matches_wildcards_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);
    repo.create_book(&NewBook::new("100% Pure", "Smith", 2001))
        .unwrap();
    repo.create_book(&NewBook::new("Plain", "Jones", 2002))
        .unwrap();

    let pattern_hits = repo.search_books(&SearchQuery::new("%")).unwrap();
    assert_eq!(pattern_hits.len(), 2);

    let literal_hits = repo.search_books(&SearchQuery::literal("%")).unwrap();
    assert_eq!(literal_hits.len(), 1);
    assert_eq!(literal_hits[0].title, "100% Pure");

    let underscore_hits = repo.search_books(&SearchQuery::literal("_")).unwrap();
    assert!(underscore_hits.is_empty());
}

#[test]
fn non_integer_year_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO books (title, author, year) VALUES ('Odd', 'Row', 'soon');",
        [],
    )
    .unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let err = repo.list_books().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)), "unexpected error: {err}");
}

#[test]
fn get_decodes_single_row_through_trait_object() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO books (title, author, year) VALUES ('Odd', 'Row', 'soon');",
        [],
    )
    .unwrap();
    let concrete = SqliteBookRepository::new(&conn);
    let id = concrete
        .create_book(&NewBook::new("Dune", "Herbert", 1965))
        .unwrap();
    let repo: &dyn BookRepository = &concrete;

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.label(), "Dune by Herbert (1965)");

    let err = repo.get_book(1).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)), "unexpected error: {err}");
}
