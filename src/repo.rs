use crate::models::{Book, BookStatus, NewBook};
use std::error::Error;
use std::future::Future;

pub trait BookRepo: Clone + Send + Sync + 'static {
    type Error: Error + Send + Sync + 'static;

    fn list_books(&self) -> impl Future<Output = Result<Vec<Book>, Self::Error>> + Send;

    fn find_book(
        &self,
        book_id: &str,
    ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send;

    /// Returns None if another book already holds the same `book_id`
    fn insert_book(
        &self,
        new_book: NewBook,
    ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send;

    /// Returns None if no book has the given `book_id`
    fn update_book_status(
        &self,
        book_id: &str,
        status: BookStatus,
    ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send;

    /// Returns true if the book existed and was deleted, false otherwise
    fn delete_book(&self, book_id: &str) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
