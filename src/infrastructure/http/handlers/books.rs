//! Book HTTP Handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateBook, GetBook, ListBooks};
use crate::domain::Book;
use crate::infrastructure::http::dto::{parse_book, MalformedInput};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取图书列表
pub async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.list_books_handler.handle(ListBooks).await?;
    Ok(Json(books))
}

/// 获取图书详情
///
/// id 不是正整数时与不存在一样返回 404
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    tracing::debug!(raw_id = %id, "Book lookup");
    let book = state.get_book_handler.handle(GetBook { id }).await?;
    Ok(Json(book))
}

/// 新增图书
///
/// 请求体读取失败（包括超过大小上限）也按 400 处理
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let body = body.map_err(|rejection| {
        let e = MalformedInput::from(rejection);
        tracing::warn!(error = %e, "Unreadable book payload");
        ApiError::from(e)
    })?;

    let book = parse_book(&body).map_err(|e| {
        tracing::warn!(
            error = %e,
            body = %String::from_utf8_lossy(&body),
            "Rejected book payload"
        );
        ApiError::from(e)
    })?;

    let book = state.create_book_handler.handle(CreateBook { book }).await?;
    Ok((StatusCode::CREATED, Json(book)))
}
