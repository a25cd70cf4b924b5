use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Json, Redirect},
    routing::get,
    Router,
};
use madmall_core::feed::FeedSnapshot;
use madmall_core::storage::DocumentStore;
use serde::Serialize;

mod content;
mod pages;

use crate::state::AppState;

/// Axum routes.
///
///   GET  /api/content?doc=...            -> document text under the content root (+ ETag)
///   GET  /api/feed                       -> CMS feed snapshot (stub)
///   GET  /plan?view=&board=&width=&height= -> plan page, server-rendered
///   GET  /agents                         -> curriculum inventory page
///   GET  /status                         -> health check
///   GET  /                               -> redirect to /plan
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/plan") }))
        .route("/api/content", get(content::get_content))
        .route("/api/feed", get(get_feed))
        .route("/plan", get(pages::plan_page))
        .route("/agents", get(pages::agents_page))
        .route("/status", get(status))
}

// ── Shared types and helpers used across sub-modules ────────────────────

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, target: &'static str, message: &str) -> ApiError {
    log_api_issue(status, target, message);
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn insert_header_safe(headers: &mut HeaderMap, name: &'static str, value: &str) {
    match value.parse() {
        Ok(parsed) => {
            headers.insert(name, parsed);
        }
        Err(e) => {
            log::warn!("Failed to set header {}={} ({})", name, value, e);
        }
    }
}

fn log_api_issue(status: StatusCode, target: &'static str, message: impl AsRef<str>) {
    let message = message.as_ref();
    if status.is_server_error() {
        log::error!(target: target, "{}", message);
    } else {
        log::warn!(target: target, "{}", message);
    }
}

async fn get_feed() -> Json<Vec<FeedSnapshot>> {
    Json(vec![FeedSnapshot::empty()])
}

async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "running",
        "port": state.port,
        "contentRoot": state.store.content_root().display().to_string(),
    }))
}
