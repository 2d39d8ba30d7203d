//! Data Transfer Objects
//!
//! 请求体解析：原始字节 -> [`Book`]，失败时返回明确的 [`MalformedInput`] 种类

use axum::extract::rejection::BytesRejection;
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;

use crate::domain::Book;

// ============================================================================
// 解析错误
// ============================================================================

/// 请求体无法解析为图书
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    /// JSON 语法错误
    #[error("Invalid JSON syntax at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    /// 请求体为空或被截断
    #[error("Unexpected end of request body")]
    Eof,

    /// JSON 合法但结构/类型不符合图书
    #[error("Invalid book data: {0}")]
    Data(String),

    /// 字段形状校验失败
    #[error("Invalid field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// 请求体无法读取，例如超过大小上限
    #[error("Unreadable request body: {0}")]
    Unreadable(String),
}

impl From<BytesRejection> for MalformedInput {
    fn from(rejection: BytesRejection) -> Self {
        MalformedInput::Unreadable(rejection.body_text())
    }
}

impl From<serde_json::Error> for MalformedInput {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax => MalformedInput::Syntax {
                line: err.line(),
                column: err.column(),
            },
            Category::Eof => MalformedInput::Eof,
            Category::Data | Category::Io => MalformedInput::Data(err.to_string()),
        }
    }
}

/// 解析并校验新增图书的请求体
///
/// 不检查 Content-Type，只看请求体内容。顶层必须是 JSON 对象，
/// 按位置给出字段的数组不算图书
pub fn parse_book(body: &[u8]) -> Result<Book, MalformedInput> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(MalformedInput::Data(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    let book: Book = serde_json::from_value(value)?;
    book.validate().map_err(|e| MalformedInput::Invalid {
        field: e.field(),
        reason: e.to_string(),
    })?;
    Ok(book)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ============================================================================
// Conflict DTO
// ============================================================================

/// 409 响应中的冲突详情
#[derive(Debug, Clone, Serialize)]
pub struct ConflictData {
    pub existing: Book,
    pub rejected: Book,
}
