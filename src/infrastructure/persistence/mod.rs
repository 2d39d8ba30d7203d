//! Persistence Layer - 数据持久化
//!
//! 可选的 SQLite 存储实现（每个实体一张表）

pub mod sqlite;

pub use self::sqlite::SqliteLibraryRepository;
