//! Library Context - 图书馆限界上下文
//!
//! 职责:
//! - 图书实体及其字段规则
//! - 书架（按位置分组的图书副本）
//! - 启动时的种子数据

mod entities;
mod errors;
mod seed;
mod value_objects;

pub use entities::{Book, Shelve};
pub use errors::LibraryError;
pub use seed::{seed_books, seed_shelves};
pub use value_objects::{BookId, ShelveId};
