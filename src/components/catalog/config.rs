use std::path::PathBuf;

use chrono::{Datelike, Local};

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub file_path: PathBuf,     // Backing file, relative to the working directory
    pub delimiter: u8,          // Field separator of the backing file
    pub min_year: i32,          // Earliest accepted publication year
    pub max_year: Option<i32>,  // Latest accepted year, None for the current year
}

impl CatalogConfig {
    /// Year bounds applied when a book is added.
    pub fn year_bounds(&self) -> (i32, i32) {
        let max = self.max_year.unwrap_or_else(|| Local::now().year());
        (self.min_year, max)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            file_path: PathBuf::from("library.txt"),
            delimiter: b';',
            // "The Tale of Igor's Campaign"
            min_year: 1185,
            max_year: None,
        }
    }
}
