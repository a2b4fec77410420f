//! Book catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, BookRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Reject a payload that breaks any field constraint
    fn check(data: &BookRequest) -> AppResult<()> {
        data.validate().map_err(|errors| {
            let err = AppError::from(errors);
            tracing::debug!("Rejected book payload: {}", err);
            err
        })
    }

    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    pub async fn list(&self, rating: Option<i32>) -> Vec<Book> {
        match rating {
            Some(rating) => self.repository.books.filter_by_rating(rating).await,
            None => self.repository.books.list().await,
        }
    }

    pub async fn get_by_id(&self, id: BookId) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn get_by_title(&self, title: &str) -> AppResult<Book> {
        self.repository
            .books
            .get_by_title(title)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Book titled '{}' not found", title)))
    }

    /// Books by author, optionally narrowed to one category
    pub async fn list_by_author(&self, author: &str, category: Option<&str>) -> Vec<Book> {
        match category {
            Some(category) => {
                self.repository
                    .books
                    .filter_by_author_and_category(author, category)
                    .await
            }
            None => self.repository.books.filter_by_author(author).await,
        }
    }

    pub async fn list_by_category(&self, category: &str) -> Vec<Book> {
        self.repository.books.filter_by_category(category).await
    }

    pub async fn list_by_publish_date(&self, year: i32) -> Vec<Book> {
        self.repository.books.filter_by_publish_date(year).await
    }

    pub async fn create(&self, data: BookRequest) -> AppResult<Book> {
        Self::check(&data)?;
        let book = self.repository.books.insert(data).await;
        tracing::info!("Created book id={} title='{}'", book.id, book.title);
        Ok(book)
    }

    /// Replace the book named by `data.id`
    pub async fn update(&self, data: BookRequest) -> AppResult<()> {
        Self::check(&data)?;
        let id = data
            .id
            .ok_or_else(|| AppError::Validation("id: required".to_string()))?;

        self.repository.books.replace(data.into_book(id)).await.map_err(|err| {
            tracing::warn!("Update rejected for book id={}: {}", id, err);
            err
        })?;
        tracing::info!("Updated book id={}", id);
        Ok(())
    }

    pub async fn delete(&self, id: BookId) -> AppResult<()> {
        let book = self.repository.books.delete(id).await?;
        tracing::info!("Deleted book id={} title='{}'", book.id, book.title);
        Ok(())
    }
}
