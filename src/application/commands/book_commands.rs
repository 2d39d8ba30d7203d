//! Book Commands

use crate::domain::{Book, Shelve};

/// 新增图书命令
///
/// book 已经过入口层的解析与字段校验
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub book: Book,
}

/// 写入种子数据命令
#[derive(Debug, Clone)]
pub struct SeedLibrary {
    pub books: Vec<Book>,
    pub shelves: Vec<Shelve>,
}

impl SeedLibrary {
    /// 内置的种子数据
    pub fn builtin() -> Self {
        Self {
            books: crate::domain::seed_books(),
            shelves: crate::domain::seed_shelves(),
        }
    }
}
