//! Library Context - Errors

use thiserror::Error;

use super::BookId;

/// 图书字段规则违反
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("图书标识必须为正整数: {0}")]
    InvalidId(BookId),

    #[error("ISBN-10 必须为 10 个字符: {0:?}")]
    InvalidIsbn10(String),

    #[error("ISBN-13 必须为 13 个字符: {0:?}")]
    InvalidIsbn13(String),
}

impl LibraryError {
    /// 出错字段名（与 JSON 字段一致）
    pub fn field(&self) -> &'static str {
        match self {
            LibraryError::InvalidId(_) => "id",
            LibraryError::InvalidIsbn10(_) => "isbn10",
            LibraryError::InvalidIsbn13(_) => "isbn13",
        }
    }
}
