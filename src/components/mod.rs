pub mod catalog;

pub mod console;
