//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, SeedLibrary};
use crate::application::error::ApplicationError;
use crate::application::ports::LibraryRepositoryPort;
use crate::domain::Book;

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
pub struct CreateBookHandler {
    library_repo: Arc<dyn LibraryRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(library_repo: Arc<dyn LibraryRepositoryPort>) -> Self {
        Self { library_repo }
    }

    /// 追加图书，标识已存在时返回 [`ApplicationError::Conflict`]
    pub async fn handle(&self, command: CreateBook) -> Result<Book, ApplicationError> {
        let book = self.library_repo.create_book(command.book).await?;

        tracing::info!(
            book_id = %book.id,
            title = %book.title,
            "Book created"
        );

        Ok(book)
    }
}

// ============================================================================
// SeedLibrary
// ============================================================================

/// 种子写入结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedLibraryResponse {
    pub books: usize,
    pub shelves: usize,
    /// Repository 已有图书，未写入任何数据
    pub skipped: bool,
}

/// SeedLibrary Handler
pub struct SeedLibraryHandler {
    library_repo: Arc<dyn LibraryRepositoryPort>,
}

impl SeedLibraryHandler {
    pub fn new(library_repo: Arc<dyn LibraryRepositoryPort>) -> Self {
        Self { library_repo }
    }

    /// 仅当 Repository 中没有图书时写入
    pub async fn handle(&self, command: SeedLibrary) -> Result<SeedLibraryResponse, ApplicationError> {
        let existing = self.library_repo.count_books().await?;
        if existing > 0 {
            tracing::info!(existing, "Library already populated, skipping seed");
            return Ok(SeedLibraryResponse {
                books: 0,
                shelves: 0,
                skipped: true,
            });
        }

        let books = command.books.len();
        let shelves = command.shelves.len();

        for book in command.books {
            self.library_repo.create_book(book).await?;
        }
        for shelve in command.shelves {
            self.library_repo.save_shelve(shelve).await?;
        }

        tracing::info!(books, shelves, "Library seeded");

        Ok(SeedLibraryResponse {
            books,
            shelves,
            skipped: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryLibraryRepository;

    fn repo() -> Arc<dyn LibraryRepositoryPort> {
        Arc::new(InMemoryLibraryRepository::new())
    }

    #[tokio::test]
    async fn test_create_then_conflict() {
        let repo = repo();
        let handler = CreateBookHandler::new(repo.clone());

        let stored = handler
            .handle(CreateBook { book: Book::new(10, "Zehn") })
            .await
            .unwrap();
        assert_eq!(stored, Book::new(10, "Zehn"));

        let err = handler
            .handle(CreateBook { book: Book::new(10, "Doppelt") })
            .await
            .unwrap_err();
        match err {
            ApplicationError::Conflict { existing, rejected, .. } => {
                assert_eq!(existing.title, "Zehn");
                assert_eq!(rejected.title, "Doppelt");
            }
            other => panic!("expected conflict, got {other:?}"),
        }

        assert_eq!(repo.count_books().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_into_empty_library() {
        let repo = repo();
        let handler = SeedLibraryHandler::new(repo.clone());

        let result = handler.handle(SeedLibrary::builtin()).await.unwrap();
        assert!(!result.skipped);
        assert_eq!(result.books, 4);
        assert_eq!(result.shelves, 2);
        assert_eq!(repo.list_shelves().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_populated() {
        let repo = repo();
        repo.create_book(Book::new(77, "Vorhanden")).await.unwrap();

        let handler = SeedLibraryHandler::new(repo.clone());
        let result = handler.handle(SeedLibrary::builtin()).await.unwrap();

        assert!(result.skipped);
        assert_eq!(repo.count_books().await.unwrap(), 1);
        assert!(repo.list_shelves().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reopened_sqlite_file_is_not_reseeded() {
        use crate::infrastructure::persistence::sqlite::{
            create_pool, run_migrations, DatabaseConfig, SqliteLibraryRepository,
        };

        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("library.db"));

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo: Arc<dyn LibraryRepositoryPort> = Arc::new(SqliteLibraryRepository::new(pool.clone()));

        let first = SeedLibraryHandler::new(repo.clone())
            .handle(SeedLibrary::builtin())
            .await
            .unwrap();
        assert!(!first.skipped);
        CreateBookHandler::new(repo)
            .handle(CreateBook { book: Book::new(99, "New") })
            .await
            .unwrap();
        pool.close().await;

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo: Arc<dyn LibraryRepositoryPort> = Arc::new(SqliteLibraryRepository::new(pool));

        let second = SeedLibraryHandler::new(repo.clone())
            .handle(SeedLibrary::builtin())
            .await
            .unwrap();
        assert!(second.skipped);

        let ids: Vec<i64> = repo
            .list_books()
            .await
            .unwrap()
            .iter()
            .map(|b| b.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3, 5, 6, 99]);
        assert_eq!(repo.list_shelves().await.unwrap().len(), 2);
    }
}
