use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

/// Lending status of a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    #[serde(alias = "в наличии")]
    InStock,
    #[serde(alias = "выдана")]
    Issued,
}

impl Status {
    /// Every status in menu order.
    pub const ALL: [Status; 2] = [Status::InStock, Status::Issued];

    pub fn label(&self) -> &'static str {
        match self {
            Status::InStock => "in stock",
            Status::Issued => "issued",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,        // Random identifier assigned at creation
    pub title: String,  // Operator supplied, never empty
    pub author: String, // Operator supplied, never empty
    pub year: i32,      // Publication year
    #[serde(default)]
    pub status: Status, // Missing in status-less catalog files
}

impl Book {
    /// Column names of the backing file, in row order.
    pub const FIELDS: [&'static str; 5] = ["id", "title", "author", "year", "status"];

    /// Creates a book that is in stock.
    pub fn new(id: u32, title: &str, author: &str, year: i32) -> Self {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            status: Status::InStock,
        }
    }

    /// Draws random 32-bit ids until one is not used by `existing`.
    pub fn unused_id(existing: &[Book]) -> u32 {
        let taken: HashSet<u32> = existing.iter().map(|book| book.id).collect();
        loop {
            let id = rand::random::<u32>();
            if !taken.contains(&id) {
                return id;
            }
        }
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
