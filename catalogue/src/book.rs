use std::fmt;

/// An immutable book record.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
}

impl Book {
    /// Create a new book with the given title and author.
    pub fn new<T, A>(title: T, author: A) -> Self
    where
        T: Into<String>,
        A: Into<String>,
    {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {}", self.title, self.author)
    }
}
