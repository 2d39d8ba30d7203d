//! In-Memory Library Repository Implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::application::ports::{LibraryRepositoryPort, RepositoryError};
use crate::domain::{Book, BookId, Shelve, ShelveId};

#[derive(Default)]
struct LibraryState {
    books: Vec<Book>,
    /// book id -> books 中的位置
    index: HashMap<BookId, usize>,
    shelves: Vec<Shelve>,
}

/// 内存图书仓储
///
/// 两个集合由同一把读写锁保护，`create_book` 的查重和追加在同一个写锁内完成
pub struct InMemoryLibraryRepository {
    state: RwLock<LibraryState>,
}

impl InMemoryLibraryRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LibraryState::default()),
        }
    }
}

impl Default for InMemoryLibraryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryRepositoryPort for InMemoryLibraryRepository {
    async fn list_books(&self) -> Result<Vec<Book>, RepositoryError> {
        Ok(self.state.read().await.books.clone())
    }

    async fn find_book(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.index.get(&id).map(|&pos| state.books[pos].clone()))
    }

    async fn create_book(&self, book: Book) -> Result<Book, RepositoryError> {
        let mut state = self.state.write().await;

        if let Some(&pos) = state.index.get(&book.id) {
            let existing = state.books[pos].clone();
            tracing::debug!(book_id = %book.id, "Duplicate book id rejected");
            return Err(RepositoryError::duplicate(existing, book));
        }

        let pos = state.books.len();
        state.index.insert(book.id, pos);
        state.books.push(book.clone());
        Ok(book)
    }

    async fn list_shelves(&self) -> Result<Vec<Shelve>, RepositoryError> {
        Ok(self.state.read().await.shelves.clone())
    }

    async fn find_shelve(&self, id: ShelveId) -> Result<Option<Shelve>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.shelves.iter().find(|s| s.id == id).cloned())
    }

    async fn save_shelve(&self, shelve: Shelve) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        match state.shelves.iter().position(|s| s.id == shelve.id) {
            Some(pos) => state.shelves[pos] = shelve,
            None => state.shelves.push(shelve),
        }
        Ok(())
    }

    async fn count_books(&self) -> Result<usize, RepositoryError> {
        Ok(self.state.read().await.books.len())
    }
}
