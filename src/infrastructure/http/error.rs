//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::dto::{ConflictData, MalformedInput};
use crate::application::ApplicationError;
use crate::domain::Book;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T: Serialize = ()> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ErrorResponse<T> {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }
}

/// 错误码定义（与 HTTP 状态码一致）
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const CONFLICT: i32 = 409;
    pub const INTERNAL_ERROR: i32 = 500;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict {
        message: String,
        existing: Box<Book>,
        rejected: Box<Book>,
    },
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(errno = errno::NOT_FOUND, error = %msg, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse::<()>::new(errno::NOT_FOUND, msg)),
                )
                    .into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::<()>::new(errno::BAD_REQUEST, msg)),
                )
                    .into_response()
            }
            ApiError::Conflict {
                message,
                existing,
                rejected,
            } => {
                tracing::warn!(
                    errno = errno::CONFLICT,
                    error = %message,
                    rejected = ?rejected,
                    "Resource conflict"
                );
                let body = ErrorResponse::new(errno::CONFLICT, message).with_data(ConflictData {
                    existing: *existing,
                    rejected: *rejected,
                });
                (StatusCode::CONFLICT, Json(body)).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = errno::INTERNAL_ERROR, error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::<()>::new(errno::INTERNAL_ERROR, msg)),
                )
                    .into_response()
            }
        }
    }
}

impl From<MalformedInput> for ApiError {
    fn from(e: MalformedInput) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("No {} found with id '{}'", resource_type.to_lowercase(), id))
            }
            ApplicationError::Conflict {
                resource_type,
                existing,
                rejected,
            } => ApiError::Conflict {
                message: format!("{} with id {} already exists", resource_type, existing.id),
                existing,
                rejected,
            },
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_errors_map_to_status() {
        let cases = [
            (ApplicationError::not_found("Book", "-1"), StatusCode::NOT_FOUND),
            (
                ApplicationError::RepositoryError("disk full".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApplicationError::Conflict {
                    resource_type: "Book",
                    existing: Box::new(Book::new(1, "a")),
                    rejected: Box::new(Book::new(1, "b")),
                },
                StatusCode::CONFLICT,
            ),
        ];

        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn test_malformed_input_is_bad_request() {
        let response = ApiError::from(MalformedInput::Eof).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_body_carries_both_records() {
        let body = ErrorResponse::new(errno::CONFLICT, "dup").with_data(ConflictData {
            existing: Book::new(1, "a"),
            rejected: Book::new(1, "b"),
        });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["errno"], 409);
        assert_eq!(json["data"]["existing"]["title"], "a");
        assert_eq!(json["data"]["rejected"]["title"], "b");
    }
}
