use std::collections::BTreeMap;

use lazy_static::lazy_static;

/// Top-level operations, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MenuAction {
    Exit,
    Add,
    Delete,
    Search,
    List,
    ChangeStatus,
}

impl MenuAction {
    pub fn from_code(code: u32) -> Option<Self> {
        MAIN_MENU.get(&code).map(|(action, _)| *action)
    }
}

/// Fields a search can be constrained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl SearchField {
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
            SearchField::Year => "Year",
        }
    }
}

lazy_static! {
    pub static ref MAIN_MENU: BTreeMap<u32, (MenuAction, &'static str)> = {
        let mut m = BTreeMap::new();
        m.insert(0, (MenuAction::Exit, "Exit"));
        m.insert(1, (MenuAction::Add, "Add a book"));
        m.insert(2, (MenuAction::Delete, "Delete a book"));
        m.insert(3, (MenuAction::Search, "Search books"));
        m.insert(4, (MenuAction::List, "Show all books"));
        m.insert(5, (MenuAction::ChangeStatus, "Change book status"));
        m
    };
    pub static ref SEARCH_MENU: BTreeMap<u32, SearchField> = {
        let mut m = BTreeMap::new();
        m.insert(1, SearchField::Title);
        m.insert(2, SearchField::Author);
        m.insert(3, SearchField::Year);
        m
    };
}

pub fn main_menu_text() -> String {
    let mut text = String::from("\nLibrary, available operations:\n\n");
    for (key, (_, label)) in MAIN_MENU.iter() {
        text.push_str(&format!("{} - {}\n", key, label));
    }
    text
}

pub fn search_menu_text() -> String {
    let mut text = String::from("\nChoose search criteria:\n\n");
    for (key, field) in SEARCH_MENU.iter() {
        text.push_str(&format!("{} - {}\n", key, field.label()));
    }
    text.push_str("Several items can be chosen, separated by spaces");
    text
}
