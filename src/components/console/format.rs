use tabled::{builder::Builder, settings::Style};

use crate::components::catalog::book::Book;

/// Renders books as an ASCII table with a 1-based position column.
pub fn format_books<'a, I>(books: I) -> String
where
    I: IntoIterator<Item = &'a Book>,
{
    let mut builder = Builder::new();
    builder.push_record(["No.", "Id", "Title", "Author", "Year", "Status"]);

    for (position, book) in books.into_iter().enumerate() {
        builder.push_record([
            (position + 1).to_string(),
            book.id.to_string(),
            book.title.clone(),
            book.author.clone(),
            book.year.to_string(),
            book.status.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}
