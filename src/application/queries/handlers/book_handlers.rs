//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::LibraryRepositoryPort;
use crate::application::queries::{GetBook, ListBooks};
use crate::domain::{Book, BookId};

/// GetBook Handler
pub struct GetBookHandler {
    library_repo: Arc<dyn LibraryRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(library_repo: Arc<dyn LibraryRepositoryPort>) -> Self {
        Self { library_repo }
    }

    /// 不存在、非整数、非正整数的 id 都返回同一种 NotFound
    pub async fn handle(&self, query: GetBook) -> Result<Book, ApplicationError> {
        let Some(id) = BookId::parse(&query.id) else {
            tracing::debug!(raw_id = %query.id, "Unparseable book id");
            return Err(ApplicationError::not_found("Book", query.id));
        };

        self.library_repo
            .find_book(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.id))
    }
}

/// ListBooks Handler
pub struct ListBooksHandler {
    library_repo: Arc<dyn LibraryRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(library_repo: Arc<dyn LibraryRepositoryPort>) -> Self {
        Self { library_repo }
    }

    pub async fn handle(&self, _query: ListBooks) -> Result<Vec<Book>, ApplicationError> {
        Ok(self.library_repo.list_books().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryLibraryRepository;

    async fn handler_with(books: Vec<Book>) -> GetBookHandler {
        let repo = Arc::new(InMemoryLibraryRepository::new());
        for book in books {
            repo.create_book(book).await.unwrap();
        }
        GetBookHandler::new(repo)
    }

    fn get(id: &str) -> GetBook {
        GetBook { id: id.to_string() }
    }

    #[tokio::test]
    async fn test_get_existing_book() {
        let handler = handler_with(vec![Book::new(1, "Erstes Buch")]).await;
        let book = handler.handle(get("1")).await.unwrap();
        assert_eq!(book.title, "Erstes Buch");
    }

    #[tokio::test]
    async fn test_every_bad_id_is_not_found() {
        let handler = handler_with(vec![Book::new(1, "Erstes Buch")]).await;

        for raw in ["2", "0", "-1", "eins", "1e3", ""] {
            let err = handler.handle(get(raw)).await.unwrap_err();
            assert!(
                matches!(err, ApplicationError::NotFound { resource_type: "Book", .. }),
                "id {raw:?} gave {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_list_books_in_insertion_order() {
        let repo = Arc::new(InMemoryLibraryRepository::new());
        for id in [5, 1, 3] {
            repo.create_book(Book::new(id, format!("Buch {id}"))).await.unwrap();
        }

        let books = ListBooksHandler::new(repo).handle(ListBooks).await.unwrap();
        let ids: Vec<i64> = books.iter().map(|b| b.id.value()).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }
}
