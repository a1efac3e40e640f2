//! HTTP Server - 路由、中间件和静态 UI
//!
//! Method enforcement comes from axum's `MethodRouter`: a non-POST request
//! to an API route gets 405 without reaching the handler.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{any, get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Embedded browser UI served at the root path
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// 运行 HTTP 服务器
pub async fn run_server(state: AppState, config: ServerConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Quill server starting on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// 创建路由
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // 静态 UI
        .route("/", any(ui_handler))
        // 健康检查
        .route("/health", get(health_handler))
        // 文本 API
        .route("/summarize", post(handlers::summarize))
        .route("/keywords", post(handlers::keywords))
        .route("/rewrite", post(handlers::rewrite))
        .route("/questions", post(handlers::questions))
        .route("/titles", post(handlers::titles))
        .route("/expand", post(handlers::expand))
        // 中间件
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 健康检查处理器
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// 静态 UI 处理器
///
/// The root path answers GET only; any other method is 404, same as any
/// other unknown path.
async fn ui_handler(method: Method) -> Response {
    if method != Method::GET {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(INDEX_HTML).into_response()
}
