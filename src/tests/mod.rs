#![allow(dead_code)]

use std::io::Cursor;

use tempfile::TempDir;

use crate::components::{
    catalog::{book::Book, config::CatalogConfig, store::CatalogStore},
    console::{Session, SessionEnd},
};

mod prompts;

// Helper to create a store backed by a file in a fresh temporary directory.
// The directory is removed when the returned guard is dropped.
fn setup_store() -> (TempDir, CatalogStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = CatalogStore::new(dir.path().join("library.txt"), b';');
    (dir, store)
}

// Fixed year bounds so tests do not depend on the calendar
fn test_config(store: &CatalogStore) -> CatalogConfig {
    CatalogConfig {
        file_path: store.path().to_path_buf(),
        delimiter: b';',
        min_year: 1185,
        max_year: Some(2024),
    }
}

pub fn sample_catalog() -> Vec<Book> {
    vec![
        Book::new(1, "A", "X", 2000),
        Book::new(2, "B", "X", 2001),
        Book::new(3, "C", "Y", 1999),
    ]
}

// Runs a whole session over scripted operator input and returns how it ended
// together with everything printed.
pub fn run_session(store: &CatalogStore, input: &str) -> (SessionEnd, String) {
    let config = test_config(store);
    let mut session = Session::new(
        store,
        &config,
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    );
    let end = session.run();
    let output = String::from_utf8(session.into_output()).unwrap();
    (end, output)
}

pub fn ids(books: &[Book]) -> Vec<u32> {
    books.iter().map(|book| book.id).collect()
}
