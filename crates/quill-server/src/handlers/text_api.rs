//! Text API Handlers
//!
//! Each endpoint follows one template: decode the JSON body, require a
//! non-empty `text`, build the task prompt, call the completion provider
//! once, and shape the reply. Upstream failure detail is logged server-side
//! and never returned to the caller.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use quill_core::api::{
    ErrorResponse, KeywordsResponse, QuestionsResponse, RewriteRequest, RewriteResponse,
    SummarizeResponse, TextRequest, TitlesResponse,
};
use quill_core::prompt;
use quill_core::reply::ListReply;

use crate::state::AppState;

fn bad_request(message: &str) -> Response {
    let error = ErrorResponse {
        error: message.to_string(),
        code: "BAD_REQUEST".to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn upstream_error() -> Response {
    let error = ErrorResponse {
        error: "completion request failed".to_string(),
        code: "UPSTREAM_ERROR".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
}

/// Decode the body and pull out a non-empty `text`, or produce the 400 reply
fn require_text(body: Result<Json<TextRequest>, JsonRejection>) -> Result<String, Response> {
    let Json(req) = body.map_err(|_| bad_request("invalid JSON body"))?;
    if req.text.is_empty() {
        return Err(bad_request("`text` is required"));
    }
    Ok(req.text)
}

/// 摘要处理器
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Response {
    let text = match require_text(body) {
        Ok(text) => text,
        Err(response) => return response,
    };

    match state.provider.complete(&prompt::summarize(&text)).await {
        Ok(out) => Json(SummarizeResponse { summary: out }).into_response(),
        Err(e) => {
            tracing::error!("summarize failed: {}", e);
            upstream_error()
        }
    }
}

/// 关键词处理器
pub async fn keywords(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Response {
    let text = match require_text(body) {
        Ok(text) => text,
        Err(response) => return response,
    };

    match state.provider.complete(&prompt::keywords(&text)).await {
        Ok(out) => Json(KeywordsResponse {
            keywords: ListReply::parse(out).into_vec(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("keywords failed: {}", e);
            upstream_error()
        }
    }
}

/// 改写处理器
pub async fn rewrite(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RewriteRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(_) => return bad_request("invalid JSON body"),
    };
    if req.text.is_empty() {
        return bad_request("`text` is required");
    }

    let task = prompt::rewrite(&req.text, req.tone_or_default());

    match state.provider.complete(&task).await {
        Ok(out) => Json(RewriteResponse { text: out }).into_response(),
        Err(e) => {
            tracing::error!("rewrite failed: {}", e);
            upstream_error()
        }
    }
}

/// 问题生成处理器
pub async fn questions(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Response {
    let text = match require_text(body) {
        Ok(text) => text,
        Err(response) => return response,
    };

    match state.provider.complete(&prompt::questions(&text)).await {
        Ok(out) => Json(QuestionsResponse {
            questions: ListReply::parse(out).into_vec(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("questions failed: {}", e);
            upstream_error()
        }
    }
}

/// 标题生成处理器
pub async fn titles(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Response {
    let text = match require_text(body) {
        Ok(text) => text,
        Err(response) => return response,
    };

    match state.provider.complete(&prompt::titles(&text)).await {
        Ok(out) => Json(TitlesResponse {
            titles: ListReply::parse(out).into_vec(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("titles failed: {}", e);
            upstream_error()
        }
    }
}

/// 扩写处理器
pub async fn expand(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Response {
    let text = match require_text(body) {
        Ok(text) => text,
        Err(response) => return response,
    };

    match state.provider.complete(&prompt::expand(&text)).await {
        Ok(out) => Json(RewriteResponse { text: out }).into_response(),
        Err(e) => {
            tracing::error!("expand failed: {}", e);
            upstream_error()
        }
    }
}
