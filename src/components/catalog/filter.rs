use super::book::Book;

/// A partial book used as a query: only the fields that are set constrain the
/// match, the rest act as wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub id: Option<u32>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

impl BookFilter {
    pub fn by_id(id: u32) -> Self {
        BookFilter {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.id.map_or(true, |id| book.id == id)
            && self.title.as_deref().map_or(true, |t| book.title == t)
            && self.author.as_deref().map_or(true, |a| book.author == a)
            && self.year.map_or(true, |y| book.year == y)
    }

    /// Returns the matching books, keeping catalog order.
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|book| self.matches(book)).collect()
    }
}
