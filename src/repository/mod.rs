//! Repository layer over the in-memory catalog

pub mod books;

use crate::models::book::Book;

/// Main repository struct holding every store
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository pre-filled with the given books
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::new(books),
        }
    }
}
