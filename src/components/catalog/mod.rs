#[path = "book.rs"]
pub mod book;

#[path = "filter.rs"]
pub mod filter;

#[path = "store.rs"]
pub mod store;

#[path = "config.rs"]
pub mod config;

#[path = "error.rs"]
pub mod error;
