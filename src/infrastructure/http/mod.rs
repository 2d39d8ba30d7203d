//! HTTP Layer - RESTful API
//!
//! 请求路由：把 HTTP 动词 + 路径映射到 Repository 操作，并把结果/错误翻译为状态码

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
