use crate::models::{Book, BookStatus, NewBook};
use crate::repo::BookRepo;
use crate::schema::books;
use bb8::Pool;
use diesel::pg::PgConnection;
use diesel::result::DatabaseErrorKind;
use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::{
    pooled_connection::{AsyncDieselConnectionManager, PoolError},
    AsyncPgConnection, RunQueryDsl,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;
use tracing::warn;

pub type DBPool = bb8::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub async fn create_db_pool(
    connection_string: String,
    max_connections: u32,
) -> Result<DBPool, PoolError> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(connection_string);
    Pool::builder().max_size(max_connections).build(config).await
}

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("could not connect to the DB to run migrations: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("problem applying migrations: {0}")]
    Apply(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("migration task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Returns how many pending migrations were applied
pub async fn run_migrations(connection_string: String) -> Result<usize, MigrationError> {
    tokio::task::spawn_blocking(move || -> Result<usize, MigrationError> {
        let mut connection = PgConnection::establish(&connection_string)?;
        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(MigrationError::Apply)?;
        Ok(applied.len())
    })
    .await?
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("problem getting a connection from the connection pool: {0}")]
    PoolError(#[from] bb8::RunError<PoolError>),
    #[error("problem executing a statement against the DB: {0}")]
    ResultError(#[from] diesel::result::Error),
}

#[derive(Clone)]
pub struct DatabaseBookRepo {
    pool: DBPool,
}

impl DatabaseBookRepo {
    pub fn new(pool: DBPool) -> Self {
        DatabaseBookRepo { pool }
    }
}

impl BookRepo for DatabaseBookRepo {
    type Error = DatabaseError;

    async fn list_books(&self) -> Result<Vec<Book>, DatabaseError> {
        let mut conn = self.pool.get().await?;

        let books = books::table
            .select(Book::as_select())
            .order(books::id)
            .load(&mut conn)
            .await?;

        Ok(books)
    }

    async fn find_book(&self, book_id: &str) -> Result<Option<Book>, DatabaseError> {
        let mut conn = self.pool.get().await?;

        let maybe_book = books::table
            .filter(books::book_id.eq(book_id))
            .select(Book::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(maybe_book)
    }

    async fn insert_book(&self, new_book: NewBook) -> Result<Option<Book>, DatabaseError> {
        let mut conn = self.pool.get().await?;

        let result = diesel::insert_into(books::table)
            .values(&new_book)
            .returning(Book::as_returning())
            .get_result(&mut conn)
            .await;

        match result {
            Ok(book) => Ok(Some(book)),
            Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info)) => {
                warn!(
                    "Insert of book {} hit the unique constraint: {}",
                    new_book.book_id,
                    info.message()
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update_book_status(
        &self,
        book_id: &str,
        status: BookStatus,
    ) -> Result<Option<Book>, DatabaseError> {
        let mut conn = self.pool.get().await?;

        let updated_book = diesel::update(books::table.filter(books::book_id.eq(book_id)))
            .set(&status)
            .returning(Book::as_returning())
            .get_result(&mut conn)
            .await
            .optional()?;

        Ok(updated_book)
    }

    async fn delete_book(&self, book_id: &str) -> Result<bool, DatabaseError> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(books::table.filter(books::book_id.eq(book_id)))
            .execute(&mut conn)
            .await
            .map(|affected_rows| affected_rows == 1)?;

        Ok(deleted)
    }
}
