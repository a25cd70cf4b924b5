use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use madmall_core::storage::{DocumentStore, StoreError};
use madmall_core::types::{ContentResponse, DOC_NOT_FOUND};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::{api_error, insert_header_safe, ApiError};
use crate::state::AppState;

const TARGET: &str = "madmall.api.content";

#[derive(Deserialize)]
pub struct ContentQuery {
    doc: Option<String>,
}

fn content_etag(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("\"{}\"", hex::encode(hasher.finalize()))
}

/// GET /api/content?doc=... -- read one document below the content root.
pub async fn get_content(
    State(state): State<AppState>,
    params: Result<Query<ContentQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    // A query string that does not deserialize (e.g. `doc` given twice)
    // carries no usable `doc`.
    let doc = match params.ok().and_then(|Query(params)| params.doc) {
        Some(doc) if !doc.is_empty() => doc,
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                TARGET,
                "Missing query param `doc`.",
            ))
        }
    };

    let content = match state.store.read_document(&doc).await {
        Ok(content) => content,
        Err(StoreError::InvalidPath(_)) => {
            return Err(api_error(StatusCode::BAD_REQUEST, TARGET, "Invalid doc path."));
        }
        Err(StoreError::NotFound { source, .. }) => {
            log::debug!(target: TARGET, "Read of {} failed: {}", doc, source);
            return Err(api_error(StatusCode::NOT_FOUND, TARGET, DOC_NOT_FOUND));
        }
    };

    let etag = content_etag(&content);
    let mut resp_headers = HeaderMap::new();
    insert_header_safe(&mut resp_headers, "etag", &etag);

    // Check If-None-Match for conditional response
    if let Some(if_none_match) = headers.get("if-none-match") {
        if if_none_match.to_str().is_ok_and(|value| value == etag) {
            return Ok((StatusCode::NOT_MODIFIED, resp_headers).into_response());
        }
    }

    Ok((
        StatusCode::OK,
        resp_headers,
        Json(ContentResponse { doc, content }),
    )
        .into_response())
}
