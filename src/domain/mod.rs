//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Library Context: 图书与书架

pub mod library;

pub use library::{seed_books, seed_shelves, Book, BookId, LibraryError, Shelve, ShelveId};
