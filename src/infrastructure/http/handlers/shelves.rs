//! Shelve HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetShelve, ListShelves};
use crate::domain::Shelve;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取书架列表
pub async fn list_shelves(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Shelve>>, ApiError> {
    let shelves = state.list_shelves_handler.handle(ListShelves).await?;
    Ok(Json(shelves))
}

/// 获取书架详情
pub async fn get_shelve(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Shelve>, ApiError> {
    let shelve = state.get_shelve_handler.handle(GetShelve { id }).await?;
    Ok(Json(shelve))
}
