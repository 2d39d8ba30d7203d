//! Shelve Queries

/// 获取书架详情查询
#[derive(Debug, Clone)]
pub struct GetShelve {
    pub id: String,
}

/// 列出所有书架查询
#[derive(Debug, Clone)]
pub struct ListShelves;
