//! SQLite Library Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{LibraryRepositoryPort, RepositoryError};
use crate::domain::{Book, BookId, Shelve, ShelveId};

const BOOK_COLUMNS: &str =
    "id, title, author, language, category, isbn10, isbn13, page_count, rating";

/// SQLite Library Repository
pub struct SqliteLibraryRepository {
    pool: DbPool,
}

impl SqliteLibraryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    language: String,
    category: String,
    isbn10: String,
    isbn13: String,
    page_count: i64,
    rating: i64,
}

impl TryFrom<BookRow> for Book {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book {
            id: BookId::new(row.id),
            title: row.title,
            author: row.author,
            language: row.language,
            category: row.category,
            isbn10: row.isbn10,
            isbn13: row.isbn13,
            page_count: u32::try_from(row.page_count)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            rating: i32::try_from(row.rating)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
        })
    }
}

#[derive(FromRow)]
struct ShelveRow {
    id: i64,
    location: String,
    content: String,
}

impl TryFrom<ShelveRow> for Shelve {
    type Error = RepositoryError;

    fn try_from(row: ShelveRow) -> Result<Self, Self::Error> {
        let content: Vec<Book> = serde_json::from_str(&row.content)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        Ok(Shelve {
            id: ShelveId::new(row.id),
            location: row.location,
            content,
        })
    }
}

fn db_err(e: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl LibraryRepositoryPort for SqliteLibraryRepository {
    async fn list_books(&self) -> Result<Vec<Book>, RepositoryError> {
        let rows: Vec<BookRow> =
            sqlx::query_as(&format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY seq"))
                .fetch_all(&self.pool)
                .await
                .map_err(db_err)?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn find_book(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let row: Option<BookRow> =
            sqlx::query_as(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;

        row.map(Book::try_from).transpose()
    }

    async fn create_book(&self, book: Book) -> Result<Book, RepositoryError> {
        // 查重由唯一约束完成，并发插入同一 id 时只有一条生效
        let result = sqlx::query(
            r#"
            INSERT INTO books (id, title, author, language, category, isbn10, isbn13, page_count, rating)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(book.id.value())
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.language)
        .bind(&book.category)
        .bind(&book.isbn10)
        .bind(&book.isbn13)
        .bind(i64::from(book.page_count))
        .bind(book.rating)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        if result.rows_affected() == 0 {
            let existing = self.find_book(book.id).await?.ok_or_else(|| {
                RepositoryError::DatabaseError(format!(
                    "insert of book {} ignored but no existing row found",
                    book.id
                ))
            })?;
            tracing::debug!(book_id = %book.id, "Duplicate book id rejected");
            return Err(RepositoryError::duplicate(existing, book));
        }

        Ok(book)
    }

    async fn list_shelves(&self) -> Result<Vec<Shelve>, RepositoryError> {
        let rows: Vec<ShelveRow> =
            sqlx::query_as("SELECT id, location, content FROM shelves ORDER BY seq")
                .fetch_all(&self.pool)
                .await
                .map_err(db_err)?;

        rows.into_iter().map(Shelve::try_from).collect()
    }

    async fn find_shelve(&self, id: ShelveId) -> Result<Option<Shelve>, RepositoryError> {
        let row: Option<ShelveRow> =
            sqlx::query_as("SELECT id, location, content FROM shelves WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;

        row.map(Shelve::try_from).transpose()
    }

    async fn save_shelve(&self, shelve: Shelve) -> Result<(), RepositoryError> {
        let content = serde_json::to_string(&shelve.content)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO shelves (id, location, content)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                location = excluded.location,
                content = excluded.content
            "#,
        )
        .bind(shelve.id.value())
        .bind(&shelve.location)
        .bind(content)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn count_books(&self) -> Result<usize, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed_books, seed_shelves};
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};
    use std::sync::Arc;
    use tokio::task::JoinSet;

    async fn in_memory_repo() -> SqliteLibraryRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteLibraryRepository::new(pool)
    }

    #[tokio::test]
    async fn test_book_create_find_and_order() {
        let repo = in_memory_repo().await;
        for book in seed_books() {
            repo.create_book(book).await.unwrap();
        }

        let erstes = repo.find_book(BookId::new(1)).await.unwrap().unwrap();
        assert_eq!(erstes, seed_books()[0]);
        assert_eq!(repo.list_books().await.unwrap(), seed_books());
        assert_eq!(repo.count_books().await.unwrap(), 4);
        assert!(repo.find_book(BookId::new(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_reports_existing_record() {
        let repo = in_memory_repo().await;
        repo.create_book(Book::new(1, "Original")).await.unwrap();

        match repo.create_book(Book::new(1, "Kopie")).await {
            Err(RepositoryError::Duplicate { existing, rejected }) => {
                assert_eq!(existing.title, "Original");
                assert_eq!(rejected.title, "Kopie");
            }
            other => panic!("expected duplicate, got {other:?}"),
        }
        assert_eq!(repo.count_books().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_shelves_embed_books_by_value() {
        let repo = in_memory_repo().await;
        for shelve in seed_shelves() {
            repo.save_shelve(shelve).await.unwrap();
        }

        assert_eq!(repo.list_shelves().await.unwrap(), seed_shelves());
        let shelve = repo.find_shelve(ShelveId::new(1)).await.unwrap().unwrap();
        assert_eq!(shelve.content.len(), 3);
        assert!(repo.list_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_shelve_replaces_same_id_in_place() {
        let repo = in_memory_repo().await;
        repo.save_shelve(Shelve::new(1, "Alt", vec![Book::new(1, "a")])).await.unwrap();
        repo.save_shelve(Shelve::new(2, "Flur", vec![])).await.unwrap();
        repo.save_shelve(Shelve::new(1, "Neu", vec![Book::new(2, "b")])).await.unwrap();

        let shelves = repo.list_shelves().await.unwrap();
        let locations: Vec<&str> = shelves.iter().map(|s| s.location.as_str()).collect();
        assert_eq!(locations, vec!["Neu", "Flur"]);

        let shelve = repo.find_shelve(ShelveId::new(1)).await.unwrap().unwrap();
        assert_eq!(shelve, Shelve::new(1, "Neu", vec![Book::new(2, "b")]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_create_same_id_single_winner() {
        let repo = Arc::new(in_memory_repo().await);
        let mut tasks = JoinSet::new();

        for n in 0..16 {
            let repo = repo.clone();
            tasks.spawn(async move { repo.create_book(Book::new(7, format!("Versuch {n}"))).await });
        }

        let mut created = 0;
        while let Some(result) = tasks.join_next().await {
            match result.unwrap() {
                Ok(_) => created += 1,
                Err(RepositoryError::Duplicate { .. }) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.count_books().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("library.db"));

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = SqliteLibraryRepository::new(pool.clone());
        repo.create_book(Book::new(99, "New")).await.unwrap();
        pool.close().await;

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = SqliteLibraryRepository::new(pool);
        assert_eq!(
            repo.find_book(BookId::new(99)).await.unwrap(),
            Some(Book::new(99, "New"))
        );
    }
}
