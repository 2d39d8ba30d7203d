//! HTTP Routes
//!
//! API Endpoints:
//! - /ping            GET   健康检查
//! - /books           GET   列出所有图书
//! - /books           POST  新增图书（201 / 400 / 409）
//! - /books/{id}      GET   获取图书（404 覆盖无效 id）
//! - /shelves         GET   列出所有书架
//! - /shelves/{id}    GET   获取书架

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(book_routes())
        .merge(shelve_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(handlers::list_books).post(handlers::create_book))
        .route("/books/:id", get(handlers::get_book))
}

/// Shelve 路由
fn shelve_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shelves", get(handlers::list_shelves))
        .route("/shelves/:id", get(handlers::get_shelve))
}
