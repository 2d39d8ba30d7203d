//! Repository Ports - 出站端口
//!
//! 定义图书/书架存储的抽象接口
//! 具体实现在 infrastructure 层（内存、SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Book, BookId, Shelve, ShelveId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 标识重复，附带已存在的记录和被拒绝的记录
    #[error("Duplicate entity: book {} already exists", .existing.id)]
    Duplicate {
        existing: Box<Book>,
        rejected: Box<Book>,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl RepositoryError {
    pub fn duplicate(existing: Book, rejected: Book) -> Self {
        Self::Duplicate {
            existing: Box::new(existing),
            rejected: Box::new(rejected),
        }
    }
}

// ============================================================================
// Library Repository
// ============================================================================

/// Library Repository Port
///
/// 唯一持有图书和书架集合，也是图书标识唯一性的唯一裁决者。
/// 实现必须保证 `create_book` 的"检查 + 追加"对并发调用是原子的。
#[async_trait]
pub trait LibraryRepositoryPort: Send + Sync {
    /// 所有图书，按插入顺序
    async fn list_books(&self) -> Result<Vec<Book>, RepositoryError>;

    /// 根据标识查找图书
    async fn find_book(&self, id: BookId) -> Result<Option<Book>, RepositoryError>;

    /// 追加图书；标识已存在时返回 [`RepositoryError::Duplicate`]
    async fn create_book(&self, book: Book) -> Result<Book, RepositoryError>;

    /// 所有书架，按插入顺序
    async fn list_shelves(&self) -> Result<Vec<Shelve>, RepositoryError>;

    /// 根据标识查找书架
    async fn find_shelve(&self, id: ShelveId) -> Result<Option<Shelve>, RepositoryError>;

    /// 保存书架（仅用于种子数据）
    ///
    /// 标识已存在时原位替换，位置不变；新标识追加到末尾
    async fn save_shelve(&self, shelve: Shelve) -> Result<(), RepositoryError>;

    /// 图书数量
    async fn count_books(&self) -> Result<usize, RepositoryError> {
        // 默认实现：取全部再计数
        Ok(self.list_books().await?.len())
    }
}
