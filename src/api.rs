use axum::{
    extract::{FromRequest, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;
use validator::Validate;

use crate::dto::{BookResponse, CreateBookRequest, UpdateStatusRequest};
use crate::error::ApiError;
use crate::repo::BookRepo;

#[derive(Clone)]
struct AppState<R> {
    repo: R,
}

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
struct AppJson<T>(T);

pub fn build_api<R: BookRepo>(repo: R) -> Router {
    Router::new()
        .route("/books", get(list_books::<R>).post(create_book::<R>))
        .route("/books/", get(list_books::<R>).post(create_book::<R>))
        .route(
            "/books/{book_id}",
            put(update_book_status::<R>).delete(delete_book::<R>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { repo })
}

async fn list_books<R: BookRepo>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let results = state.repo.list_books().await.map_err(ApiError::store)?;

    info!("Retrieved {} books from the DB", results.len());

    Ok(Json(results.into_iter().map(BookResponse::from).collect()))
}

async fn create_book<R: BookRepo>(
    State(state): State<AppState<R>>,
    AppJson(request): AppJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    request.validate()?;

    let existing = state
        .repo
        .find_book(&request.book_id)
        .await
        .map_err(ApiError::store)?;
    if existing.is_some() {
        info!("Tried to insert a book with an existing ID: {}", request.book_id);
        return Err(ApiError::DuplicateId(request.book_id));
    }

    let book_id = request.book_id.clone();
    let inserted_book = state
        .repo
        .insert_book(request.into())
        .await
        .map_err(ApiError::store)?;

    match inserted_book {
        Some(book) => {
            info!("Inserted book into the DB: {:?}", book);
            Ok((StatusCode::CREATED, Json(book.into())))
        }
        None => {
            info!("Book with ID {} was inserted concurrently", book_id);
            Err(ApiError::DuplicateId(book_id))
        }
    }
}

async fn update_book_status<R: BookRepo>(
    State(state): State<AppState<R>>,
    Path(book_id): Path<String>,
    AppJson(update): AppJson<UpdateStatusRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let updated_book = state
        .repo
        .update_book_status(&book_id, update.into())
        .await
        .map_err(ApiError::store)?;

    match updated_book {
        Some(book) => {
            info!("Updated book status in DB: {:?}", book);
            Ok(Json(book.into()))
        }
        None => {
            info!("Tried to update non-existent book with ID: {}", book_id);
            Err(ApiError::NotFound(book_id))
        }
    }
}

async fn delete_book<R: BookRepo>(
    State(state): State<AppState<R>>,
    Path(book_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .repo
        .delete_book(&book_id)
        .await
        .map_err(ApiError::store)?;

    if deleted {
        info!("Deleted book from DB with ID: {}", book_id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        info!("Tried to delete non-existent book with ID: {}", book_id);
        Err(ApiError::NotFound(book_id))
    }
}
