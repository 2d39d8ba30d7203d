//! Liberator - 图书与书架 REST 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Library Context: 图书、书架、种子数据
//!
//! 应用层 (application/):
//! - Ports: LibraryRepositoryPort
//! - Commands: CreateBook, SeedLibrary
//! - Queries: GetBook, ListBooks, GetShelve, ListShelves
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 默认的内存仓储
//! - Persistence: 可选的 SQLite 仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
