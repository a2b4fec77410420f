//! Book model and request/query types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

pub type BookId = i64;

/// Book record as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: String,
    /// Rating from 0 to 5
    pub rating: i32,
    /// Publication year
    pub publish_date: i32,
    pub category: Option<String>,
}

/// Create / update book request.
///
/// `id` is ignored on create and required on update.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[schema(example = json!({
    "title": "New book title",
    "author": "Example Author",
    "description": "New Book Description",
    "rating": 5,
    "publish_date": 2029
}))]
pub struct BookRequest {
    #[serde(default)]
    pub id: Option<BookId>,
    #[validate(length(min = 3))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1, max = 100))]
    pub description: String,
    #[validate(range(exclusive_min = -1, exclusive_max = 6))]
    pub rating: i32,
    #[validate(range(exclusive_min = 1000, exclusive_max = 2050))]
    pub publish_date: i32,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub category: Option<String>,
}

impl BookRequest {
    /// Build the stored record, discarding any id carried by the request
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
            rating: self.rating,
            publish_date: self.publish_date,
            category: self.category,
        }
    }
}

/// Query parameters for listing books
#[derive(Debug, Default, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Only books with this exact rating (1-5)
    #[validate(range(exclusive_min = 0, exclusive_max = 6))]
    pub rating: Option<i32>,
}

/// Optional category narrowing for author lookups
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookIdParam {
    #[validate(range(min = 1))]
    pub id: BookId,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PublishYearParam {
    #[validate(range(exclusive_min = 1990, exclusive_max = 2050))]
    pub year: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TextParam {
    #[validate(custom(function = "not_blank"))]
    pub value: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Sample books loaded at startup
pub fn seed_books() -> Vec<Book> {
    let book = |id: BookId,
                title: &str,
                author: &str,
                description: &str,
                rating: i32,
                year: i32,
                category: &str| Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        rating,
        publish_date: year,
        category: Some(category.to_string()),
    };

    vec![
        book(1, "Computer Science Pro", "Author One", "A very nice book", 5, 2030, "science"),
        book(2, "Be Fast with FastAPI", "Author One", "A great book", 5, 2030, "science"),
        book(3, "Master Endpoints", "Author One", "A good book", 5, 2029, "science"),
        book(4, "HP1", "Author Two", "Book Description", 2, 2028, "fiction"),
        book(5, "HP2", "Author Three", "Book Description", 3, 2027, "fiction"),
        book(6, "HP3", "Author Four", "Book Description", 1, 2026, "fiction"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookRequest {
        BookRequest {
            id: None,
            title: "New Title".to_string(),
            author: "A".to_string(),
            description: "D".to_string(),
            rating: 5,
            publish_date: 2001,
            category: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_rating_bounds() {
        for rating in [0, 5] {
            assert!(BookRequest { rating, ..request() }.validate().is_ok());
        }
        for rating in [-1, 6] {
            let errors = BookRequest { rating, ..request() }.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("rating"));
        }
    }

    #[test]
    fn test_publish_date_bounds_are_exclusive() {
        assert!(BookRequest { publish_date: 1001, ..request() }.validate().is_ok());
        assert!(BookRequest { publish_date: 2049, ..request() }.validate().is_ok());
        assert!(BookRequest { publish_date: 1000, ..request() }.validate().is_err());
        assert!(BookRequest { publish_date: 2050, ..request() }.validate().is_err());
    }

    #[test]
    fn test_string_lengths() {
        assert!(BookRequest { title: "abc".into(), ..request() }.validate().is_ok());
        assert!(BookRequest { title: "ab".into(), ..request() }.validate().is_err());
        assert!(BookRequest { author: String::new(), ..request() }.validate().is_err());
        assert!(BookRequest { description: String::new(), ..request() }.validate().is_err());
        assert!(BookRequest { description: "x".repeat(100), ..request() }.validate().is_ok());
        assert!(BookRequest { description: "x".repeat(101), ..request() }.validate().is_err());
        assert!(BookRequest { category: Some(String::new()), ..request() }.validate().is_err());
    }

    #[test]
    fn test_into_book_uses_given_id() {
        let book = BookRequest { id: Some(42), ..request() }.into_book(7);
        assert_eq!(book.id, 7);
        assert_eq!(book.title, "New Title");
        assert_eq!(book.publish_date, 2001);
    }

    #[test]
    fn test_query_params() {
        assert!(BookQuery { rating: None }.validate().is_ok());
        assert!(BookQuery { rating: Some(1) }.validate().is_ok());
        assert!(BookQuery { rating: Some(0) }.validate().is_err());
        assert!(BookQuery { rating: Some(6) }.validate().is_err());
        assert!(BookIdParam { id: 0 }.validate().is_err());
        assert!(PublishYearParam { year: 1990 }.validate().is_err());
        assert!(PublishYearParam { year: 2030 }.validate().is_ok());
        assert!(TextParam { value: "  ".into() }.validate().is_err());
        assert!(TextParam { value: "HP1".into() }.validate().is_ok());
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<BookId> = seed_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
