use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Book, BookStatus, NewBook};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "book_id must not be empty"))]
    pub book_id: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
}

impl From<CreateBookRequest> for NewBook {
    fn from(request: CreateBookRequest) -> Self {
        NewBook {
            book_id: request.book_id,
            title: request.title,
            author: request.author,
        }
    }
}

// A missing borrower_id clears the borrower
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub is_borrowed: bool,
    #[serde(default)]
    pub borrower_id: Option<String>,
}

impl From<UpdateStatusRequest> for BookStatus {
    fn from(request: UpdateStatusRequest) -> Self {
        BookStatus {
            is_borrowed: request.is_borrowed,
            borrower_id: request.borrower_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponse {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub is_borrowed: bool,
    pub borrower_id: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        BookResponse {
            book_id: book.book_id,
            title: book.title,
            author: book.author,
            is_borrowed: book.is_borrowed,
            borrower_id: book.borrower_id,
        }
    }
}
