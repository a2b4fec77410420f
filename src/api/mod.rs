//! API handlers for the book catalog REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .put(books::update_book),
        )
        .route("/books/:id", get(books::get_book).delete(books::delete_book))
        .route("/books/by-title/:title", get(books::get_book_by_title))
        .route("/books/by-author/:author", get(books::list_books_by_author))
        .route("/books/by-category/:category", get(books::list_books_by_category))
        .route("/books_by_date/:year", get(books::list_books_by_publish_date))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
