//! Book catalog endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{
        Book, BookIdParam, BookQuery, BookRequest, CategoryQuery, PublishYearParam, TextParam,
    },
};

fn text_param(value: String) -> AppResult<String> {
    let param = TextParam { value };
    param.validate()?;
    Ok(param.value)
}

/// List books, optionally filtered by rating
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Books in insertion order", body = Vec<Book>),
        (status = 422, description = "Rating out of range", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    query: Result<Query<BookQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Book>>> {
    let Query(query) = query?;
    query.validate()?;

    let books = state.services.books.list(query.rating).await;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID (positive)")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    param: Result<Path<BookIdParam>, PathRejection>,
) -> AppResult<Json<Book>> {
    let Path(param) = param?;
    param.validate()?;

    let book = state.services.books.get_by_id(param.id).await?;
    Ok(Json(book))
}

/// List books published in a given year
#[utoipa::path(
    get,
    path = "/books_by_date/{year}",
    tag = "books",
    params(("year" = i32, Path, description = "Publication year, between 1990 and 2050 exclusive")),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 422, description = "Year out of range", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books_by_publish_date(
    State(state): State<crate::AppState>,
    param: Result<Path<PublishYearParam>, PathRejection>,
) -> AppResult<Json<Vec<Book>>> {
    let Path(param) = param?;
    param.validate()?;

    let books = state.services.books.list_by_publish_date(param.year).await;
    Ok(Json(books))
}

/// Get the first book with a title, ignoring case
#[utoipa::path(
    get,
    path = "/books/by-title/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Book title")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_title(
    State(state): State<crate::AppState>,
    title: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Book>> {
    let Path(title) = title?;
    let title = text_param(title)?;

    let book = state.services.books.get_by_title(&title).await?;
    Ok(Json(book))
}

/// List books by author, optionally within a category
#[utoipa::path(
    get,
    path = "/books/by-author/{author}",
    tag = "books",
    params(
        ("author" = String, Path, description = "Author name"),
        CategoryQuery
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>)
    )
)]
pub async fn list_books_by_author(
    State(state): State<crate::AppState>,
    author: Result<Path<String>, PathRejection>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Book>>> {
    let Path(author) = author?;
    let Query(query) = query?;
    let author = text_param(author)?;

    let books = state
        .services
        .books
        .list_by_author(&author, query.category.as_deref())
        .await;
    Ok(Json(books))
}

/// List books in a category
#[utoipa::path(
    get,
    path = "/books/by-category/{category}",
    tag = "books",
    params(("category" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>)
    )
)]
pub async fn list_books_by_category(
    State(state): State<crate::AppState>,
    category: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<Book>>> {
    let Path(category) = category?;
    let category = text_param(category)?;

    let books = state.services.books.list_by_category(&category).await;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 422, description = "Invalid field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    data: Result<Json<BookRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let Json(data) = data?;
    let book = state.services.books.create(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Replace the book identified by the body's `id`
#[utoipa::path(
    put,
    path = "/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 204, description = "Book updated"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid field", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    data: Result<Json<BookRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(data) = data?;
    state.services.books.update(data).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID (positive)")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    param: Result<Path<BookIdParam>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(param) = param?;
    param.validate()?;

    state.services.books.delete(param.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
