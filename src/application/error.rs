//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::Book;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    ///
    /// id 为调用方提供的原始文本：不存在、非整数、非正整数都归入这一类
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 标识冲突
    #[error("{resource_type} already exists: {}", .existing.id)]
    Conflict {
        resource_type: &'static str,
        existing: Box<Book>,
        rejected: Box<Book>,
    },

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate { existing, rejected } => Self::Conflict {
                resource_type: "Book",
                existing,
                rejected,
            },
            other => Self::RepositoryError(other.to_string()),
        }
    }
}
