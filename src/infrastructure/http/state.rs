//! Application State
//!
//! 包含 Repository 端口和所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateBookHandler,
    // Query handlers
    GetBookHandler, GetShelveHandler, ListBooksHandler, ListShelvesHandler,
    // Ports
    LibraryRepositoryPort,
};

/// 应用状态
///
/// Repository 在构造时注入，Router 不访问任何全局状态
pub struct AppState {
    // ========== Ports ==========
    pub library_repo: Arc<dyn LibraryRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_book_handler: CreateBookHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub list_books_handler: ListBooksHandler,
    pub get_shelve_handler: GetShelveHandler,
    pub list_shelves_handler: ListShelvesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(library_repo: Arc<dyn LibraryRepositoryPort>) -> Self {
        Self {
            library_repo: library_repo.clone(),

            create_book_handler: CreateBookHandler::new(library_repo.clone()),

            get_book_handler: GetBookHandler::new(library_repo.clone()),
            list_books_handler: ListBooksHandler::new(library_repo.clone()),
            get_shelve_handler: GetShelveHandler::new(library_repo.clone()),
            list_shelves_handler: ListShelvesHandler::new(library_repo),
        }
    }
}
