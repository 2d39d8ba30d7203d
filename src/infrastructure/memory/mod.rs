//! Memory Layer - In-Memory State Management
//!
//! 默认的图书仓储实现，进程内保存图书和书架

mod library_repo;

pub use library_repo::InMemoryLibraryRepository;
