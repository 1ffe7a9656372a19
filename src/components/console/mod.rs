use std::io::{BufRead, Write};

use tracing::{error, info};

use crate::components::catalog::{
    book::{Book, Status},
    config::CatalogConfig,
    error::{CatalogError, InputError},
    filter::BookFilter,
    store::CatalogStore,
};

#[path = "prompt.rs"]
pub mod prompt;

#[path = "menu.rs"]
pub mod menu;

#[path = "format.rs"]
pub mod format;

use format::format_books;
use menu::{MenuAction, SearchField, SEARCH_MENU};
use prompt::Console;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,        // Operator chose the exit item
    InputClosed, // Console input reached end of file
    Failed,      // An operation failed and the session was aborted
}

/// Menu-driven catalog session.
///
/// Each operation loads the catalog from the store, works on its own copy and
/// writes it back when something changed. Nothing is cached between
/// operations.
#[derive(Debug)]
pub struct Session<'a, R, W> {
    store: &'a CatalogStore,   // Backing file access
    config: &'a CatalogConfig, // Year bounds and file settings
    console: Console<R, W>,    // Operator input and output
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a CatalogStore, config: &'a CatalogConfig, input: R, output: W) -> Self {
        Session {
            store,
            config,
            console: Console::new(input, output),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Runs the menu loop until the operator exits, input ends or an
    /// operation fails.
    pub fn run(&mut self) -> SessionEnd {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => return SessionEnd::Exit,
                Err(CatalogError::InputClosed) => {
                    info!("console input closed, ending session");
                    return SessionEnd::InputClosed;
                }
                Err(e) => {
                    error!(error = %e, "operation failed, ending session");
                    // Output may be the thing that failed
                    let _ = self.console.say("Something went wrong");
                    return SessionEnd::Failed;
                }
            }
        }
    }

    /// Shows the menu and runs one selection. Returns `false` on exit.
    fn step(&mut self) -> Result<bool, CatalogError> {
        self.console.say(menu::main_menu_text())?;
        let answer = self.console.ask("Choose a menu item: ")?;

        match answer.parse::<u32>().ok().and_then(MenuAction::from_code) {
            Some(action) => self.dispatch(action),
            None => {
                self.console.say(InputError::InvalidSelection)?;
                Ok(true)
            }
        }
    }

    /// Runs the handler for `action`. Returns `false` when the action ends
    /// the session.
    pub fn dispatch(&mut self, action: MenuAction) -> Result<bool, CatalogError> {
        match action {
            MenuAction::Exit => return Ok(false),
            MenuAction::Add => self.add_books()?,
            MenuAction::Delete => self.delete_book()?,
            MenuAction::Search => self.search_books()?,
            MenuAction::List => self.list_books()?,
            MenuAction::ChangeStatus => self.change_status()?,
        }
        Ok(true)
    }

    fn add_books(&mut self) -> Result<(), CatalogError> {
        let (min_year, max_year) = self.config.year_bounds();

        loop {
            self.console.say("\nEnter the following data:")?;
            let title = self.console.non_empty("Title: ")?;
            let author = self.console.non_empty("Author: ")?;
            let year = self
                .console
                .bounded("Year: ", Some(min_year), Some(max_year))?;

            let id = Book::unused_id(&self.store.load_all());
            let book = Book::new(id, &title, &author, year);
            self.store.append_one(&book)?;
            info!(id = book.id, "book added");
            self.console.say(format!("Book added with id {}", book.id))?;

            if !self.console.confirm("\nAdd another book (y/n)? ")? {
                return Ok(());
            }
        }
    }

    fn delete_book(&mut self) -> Result<(), CatalogError> {
        let mut books = self.store.load_all();
        if books.is_empty() {
            return self.console.say("No records to delete");
        }
        self.console.say(format_books(&books))?;

        let id: u32 = self
            .console
            .bounded("\nEnter the id of the book to delete: ", None, None)?;
        let filter = BookFilter::by_id(id);

        match books.iter().position(|book| filter.matches(book)) {
            Some(position) => {
                books.remove(position);
                self.store.rewrite_all(&books)?;
                info!(id, "book deleted");
                self.console.say("Book deleted")
            }
            None => self.console.say("No matching record to delete"),
        }
    }

    fn search_books(&mut self) -> Result<(), CatalogError> {
        let books = self.store.load_all();
        if books.is_empty() {
            return self.console.say("No data, nothing to search");
        }

        let keys: Vec<u32> = SEARCH_MENU.keys().copied().collect();
        loop {
            self.console.say(menu::search_menu_text())?;
            let selected = self.console.select("\nChoose menu item(s): ", &keys)?;

            let mut fields: Vec<SearchField> = Vec::new();
            for field in selected.iter().filter_map(|key| SEARCH_MENU.get(key)) {
                if !fields.contains(field) {
                    fields.push(*field);
                }
            }

            let filter = self.read_filter(&fields)?;
            let found = filter.apply(&books);
            self.console.say(format!("\nMatches found: {}", found.len()))?;
            if !found.is_empty() {
                self.console.say(format_books(found))?;
            }

            if !self.console.confirm("\nContinue searching (y/n)? ")? {
                return Ok(());
            }
        }
    }

    /// Asks for a value per field. Empty text leaves that field unconstrained.
    fn read_filter(&mut self, fields: &[SearchField]) -> Result<BookFilter, CatalogError> {
        let mut filter = BookFilter::default();
        for field in fields {
            let prompt = format!("Enter {}: ", field.label().to_lowercase());
            match field {
                SearchField::Title => {
                    let answer = self.console.ask(&prompt)?;
                    filter.title = (!answer.is_empty()).then_some(answer);
                }
                SearchField::Author => {
                    let answer = self.console.ask(&prompt)?;
                    filter.author = (!answer.is_empty()).then_some(answer);
                }
                SearchField::Year => {
                    filter.year = Some(self.console.bounded(&prompt, None, None)?);
                }
            }
        }
        Ok(filter)
    }

    fn list_books(&mut self) -> Result<(), CatalogError> {
        let books = self.store.load_all();
        if books.is_empty() {
            return self.console.say("No data");
        }
        self.console.say(format_books(&books))
    }

    fn change_status(&mut self) -> Result<(), CatalogError> {
        let mut books = self.store.load_all();
        if books.is_empty() {
            return self.console.say("No records to change");
        }
        self.console.say(format_books(&books))?;

        let positions: Vec<usize> = (1..=books.len()).collect();
        let status_codes: Vec<usize> = (1..=Status::ALL.len()).collect();
        loop {
            let selected = self
                .console
                .select("\nChoose the number of the record to change: ", &positions)?;

            self.console.say("\nWhich status to set:")?;
            for (code, status) in status_codes.iter().zip(Status::ALL) {
                self.console.say(format!("{}: {}", code, status))?;
            }
            let chosen = self.console.select("\nChoose a number: ", &status_codes)?;

            let book = selected.first().and_then(|p| books.get_mut(p - 1));
            let status = chosen.first().and_then(|c| Status::ALL.get(c - 1).copied());
            if let (Some(book), Some(status)) = (book, status) {
                book.set_status(status);
                info!(id = book.id, %status, "status changed");
            }

            if !self.console.confirm("\nChange another record (y/n)? ")? {
                break;
            }
        }

        self.store.rewrite_all(&books)?;
        self.console.say("Changes saved")
    }
}
