//! Library Context - Entities

use serde::{Deserialize, Serialize};

use super::{BookId, LibraryError, ShelveId};

const ISBN10_LEN: usize = 10;
const ISBN13_LEN: usize = 13;

/// 图书
///
/// 不变量（由 Repository 保证）:
/// - 同一 Repository 内 id 唯一
///
/// 字段形状（ISBN 长度、页数）只在入口处校验，见 [`Book::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    #[serde(alias = "writer")]
    pub author: String,
    pub language: String,
    pub category: String,
    pub isbn10: String,
    pub isbn13: String,
    pub page_count: u32,
    pub rating: i32,
}

impl Book {
    /// 只有标识和标题的图书，其余字段为空
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: BookId::new(id),
            title: title.into(),
            ..Self::default()
        }
    }

    /// 校验字段形状
    ///
    /// - id 为正整数
    /// - isbn10 / isbn13 非空时长度分别为 10 / 13 个字符
    pub fn validate(&self) -> Result<(), LibraryError> {
        if !self.id.is_positive() {
            return Err(LibraryError::InvalidId(self.id));
        }
        if !self.isbn10.is_empty() && self.isbn10.chars().count() != ISBN10_LEN {
            return Err(LibraryError::InvalidIsbn10(self.isbn10.clone()));
        }
        if !self.isbn13.is_empty() && self.isbn13.chars().count() != ISBN13_LEN {
            return Err(LibraryError::InvalidIsbn13(self.isbn13.clone()));
        }
        Ok(())
    }
}

/// 书架 - 按物理位置分组的图书
///
/// content 中的图书是副本，与平铺的图书集合之间没有引用关系
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shelve {
    pub id: ShelveId,
    pub location: String,
    #[serde(alias = "books")]
    pub content: Vec<Book>,
}

impl Shelve {
    pub fn new(id: i64, location: impl Into<String>, content: Vec<Book>) -> Self {
        Self {
            id: ShelveId::new(id),
            location: location.into(),
            content,
        }
    }
}
