use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, Reader, ReaderBuilder, Writer, WriterBuilder};
use tracing::{debug, warn};

use super::{book::Book, config::CatalogConfig, error::CatalogError};

/// Flat-file persistence for the catalog.
///
/// Every call opens the backing file, reads or writes it completely and
/// closes it again. Field values are written without quoting, so text that
/// contains the delimiter or a newline will not load back.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,  // Backing file
    delimiter: u8,  // Field separator
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        CatalogStore {
            path: path.into(),
            delimiter,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        CatalogStore::new(&config.file_path, config.delimiter)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole catalog. A missing or unparsable file is an empty
    /// catalog.
    pub fn load_all(&self) -> Vec<Book> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "catalog file not readable");
                return Vec::new();
            }
        };

        match self.read_books(file) {
            Ok(books) => {
                debug!(path = %self.path.display(), count = books.len(), "catalog loaded");
                books
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "catalog file unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Appends a single row, writing the header first when the file is new
    /// or empty. A file without the status column is rewritten in the
    /// current layout instead, so its rows keep the same width.
    pub fn append_one(&self, book: &Book) -> Result<(), CatalogError> {
        let needs_header = fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        if !needs_header && self.lacks_status_column() && self.upgrade_and_append(book)? {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CatalogError::storage(&self.path, e))?;

        let mut writer = self.writer(file);
        if needs_header {
            writer.write_record(Book::FIELDS)?;
        }
        writer.serialize(book)?;
        writer
            .flush()
            .map_err(|e| CatalogError::storage(&self.path, e))?;

        debug!(path = %self.path.display(), id = book.id, "book appended");
        Ok(())
    }

    /// Replaces the file contents with a header followed by `books` in order.
    /// Not atomic: a failure midway leaves a truncated file.
    pub fn rewrite_all(&self, books: &[Book]) -> Result<(), CatalogError> {
        let file = File::create(&self.path).map_err(|e| CatalogError::storage(&self.path, e))?;

        let mut writer = self.writer(file);
        writer.write_record(Book::FIELDS)?;
        for book in books {
            writer.serialize(book)?;
        }
        writer
            .flush()
            .map_err(|e| CatalogError::storage(&self.path, e))?;

        debug!(path = %self.path.display(), count = books.len(), "catalog rewritten");
        Ok(())
    }

    fn reader(&self, file: File) -> Reader<File> {
        ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quoting(false)
            .has_headers(true)
            .from_reader(file)
    }

    fn read_books(&self, file: File) -> Result<Vec<Book>, csv::Error> {
        self.reader(file).deserialize::<Book>().collect()
    }

    /// True when the header row names no `status` column.
    fn lacks_status_column(&self) -> bool {
        File::open(&self.path)
            .ok()
            .and_then(|file| self.reader(file).headers().ok().cloned())
            .is_some_and(|headers| !headers.iter().any(|name| name == "status"))
    }

    /// Rewrites a status-less catalog with `book` added. Returns `false`
    /// when the existing rows cannot be read, leaving the file untouched.
    fn upgrade_and_append(&self, book: &Book) -> Result<bool, CatalogError> {
        let file = File::open(&self.path).map_err(|e| CatalogError::storage(&self.path, e))?;
        let mut books = match self.read_books(file) {
            Ok(books) => books,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "status-less catalog unparsable, not upgrading");
                return Ok(false);
            }
        };

        books.push(book.clone());
        self.rewrite_all(&books)?;
        debug!(path = %self.path.display(), id = book.id, "status column added while appending");
        Ok(true)
    }

    fn writer(&self, file: File) -> Writer<File> {
        WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(QuoteStyle::Never)
            .has_headers(false)
            .from_writer(file)
    }
}
