//! Book Queries

/// 获取图书详情查询
///
/// id 保留调用方的原始文本，由 handler 解析
#[derive(Debug, Clone)]
pub struct GetBook {
    pub id: String,
}

/// 列出所有图书查询
#[derive(Debug, Clone)]
pub struct ListBooks;
