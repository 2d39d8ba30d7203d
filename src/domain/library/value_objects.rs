//! Library Context - Value Objects

use serde::{Deserialize, Serialize};

/// 图书标识（由调用方提供）
///
/// 合法的标识为正整数，JSON 中序列化为裸整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// 从路径参数解析标识
    ///
    /// 非整数与非正整数都返回 None，调用方统一按"未找到"处理
    pub fn parse(raw: &str) -> Option<Self> {
        parse_positive(raw).map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书架标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShelveId(i64);

impl ShelveId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// 解析规则与 [`BookId::parse`] 相同
    pub fn parse(raw: &str) -> Option<Self> {
        parse_positive(raw).map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ShelveId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ShelveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 只接受纯整数文本，前后空白不做裁剪
fn parse_positive(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
