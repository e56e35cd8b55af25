// Prototype: copy an existing Book instead of building one from scratch.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, PartialEq)]
pub struct Book {
    title: String,
    author: String,
    pages: u32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
        }
    }

    /// Deep copy: the result owns its own strings.
    pub fn duplicate(&self) -> Book {
        Book {
            title: self.title.clone(),
            author: self.author.clone(),
            pages: self.pages,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Book: {} by {} ({} pages)", self.title, self.author, self.pages)
    }
}

/// Named prototypes that new books are stamped from.
#[derive(Debug, Default)]
pub struct Bookshelf {
    prototypes: HashMap<String, Book>,
}

impl Bookshelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>, book: Book) {
        self.prototypes.insert(key.into(), book);
    }

    /// Returns a fresh copy of the prototype, or `None` when `key` is unknown.
    pub fn spawn(&self, key: &str) -> Option<Book> {
        let book = self.prototypes.get(key).map(Book::duplicate);
        if book.is_none() {
            tracing::debug!(key, "no prototype registered");
        }
        book
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

pub fn demo() -> Vec<String> {
    let original = Book::new("Java Programming", "John Doe", 300);
    let mut cloned = original.duplicate();
    cloned.set_title("Advanced Java");

    vec![format!("Original: {}", original), format!("Cloned: {}", cloned)]
}
