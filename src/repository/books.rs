//! In-memory book store

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, BookRequest},
};

/// Books keyed by id, iterated in insertion order.
///
/// Readers share the lock; every mutation (including id assignment) runs
/// under the write lock so two creates can never compute the same id.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<IndexMap<BookId, Book>>>,
}

fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn not_found(id: BookId) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        let books = books.into_iter().map(|book| (book.id, book)).collect();
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    /// List all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.values().cloned().collect()
    }

    pub async fn get_by_id(&self, id: BookId) -> AppResult<Book> {
        self.books
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// First book whose title matches, ignoring case
    pub async fn get_by_title(&self, title: &str) -> Option<Book> {
        self.books
            .read()
            .await
            .values()
            .find(|book| same_text(&book.title, title))
            .cloned()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Book>
    where
        F: Fn(&Book) -> bool,
    {
        self.books
            .read()
            .await
            .values()
            .filter(|book| predicate(book))
            .cloned()
            .collect()
    }

    pub async fn filter_by_author(&self, author: &str) -> Vec<Book> {
        self.filter(|book| same_text(&book.author, author)).await
    }

    pub async fn filter_by_category(&self, category: &str) -> Vec<Book> {
        self.filter(|book| {
            book.category
                .as_deref()
                .is_some_and(|c| same_text(c, category))
        })
        .await
    }

    pub async fn filter_by_author_and_category(&self, author: &str, category: &str) -> Vec<Book> {
        self.filter(|book| {
            same_text(&book.author, author)
                && book
                    .category
                    .as_deref()
                    .is_some_and(|c| same_text(c, category))
        })
        .await
    }

    pub async fn filter_by_rating(&self, rating: i32) -> Vec<Book> {
        self.filter(|book| book.rating == rating).await
    }

    pub async fn filter_by_publish_date(&self, year: i32) -> Vec<Book> {
        self.filter(|book| book.publish_date == year).await
    }

    /// Append a new book with id `max(existing ids) + 1`, or 1 when empty.
    ///
    /// Deleting the highest id frees it for the next insert.
    pub async fn insert(&self, data: BookRequest) -> Book {
        let mut books = self.books.write().await;
        let id = books.keys().copied().max().unwrap_or(0) + 1;
        let book = data.into_book(id);
        books.insert(id, book.clone());
        book
    }

    /// Overwrite an existing book, keeping its position
    pub async fn replace(&self, book: Book) -> AppResult<()> {
        let mut books = self.books.write().await;
        let slot = books.get_mut(&book.id).ok_or_else(|| not_found(book.id))?;
        *slot = book;
        Ok(())
    }

    /// Remove a book, keeping the relative order of the others
    pub async fn delete(&self, id: BookId) -> AppResult<Book> {
        self.books
            .write()
            .await
            .shift_remove(&id)
            .ok_or_else(|| not_found(id))
    }
}
