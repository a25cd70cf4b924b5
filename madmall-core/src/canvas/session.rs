//! Async driver that feeds document fetches into a [`PlanCanvas`].

use std::future::Future;
use std::sync::Arc;

use super::controller::{DocRequest, PlanCanvas};
use crate::storage::local::LocalDocumentStore;
use crate::storage::{DocumentStore, StoreError};
use crate::types::Board;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The content endpoint answered with a non-success status.
    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Failed to fetch: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Where the canvas gets documents from.
///
/// `Ok(None)` means the request succeeded but carried no content.
pub trait ContentSource: Send + Sync {
    fn fetch_content(
        &self,
        doc: &str,
    ) -> impl Future<Output = Result<Option<String>, FetchError>> + Send;
}

/// In-process source: store errors map onto the statuses the HTTP
/// endpoint would answer with.
impl ContentSource for LocalDocumentStore {
    fn fetch_content(
        &self,
        doc: &str,
    ) -> impl Future<Output = Result<Option<String>, FetchError>> + Send {
        let read = self.read_document(doc);
        async move {
            match read.await {
                Ok(content) => Ok(Some(content)),
                Err(StoreError::InvalidPath(_)) => Err(FetchError::Status(400)),
                Err(StoreError::NotFound { .. }) => Err(FetchError::Status(404)),
            }
        }
    }
}

impl<T: ContentSource> ContentSource for Arc<T> {
    fn fetch_content(
        &self,
        doc: &str,
    ) -> impl Future<Output = Result<Option<String>, FetchError>> + Send {
        self.as_ref().fetch_content(doc)
    }
}

/// Perform one document request against `source`.
pub async fn fetch_doc<S: ContentSource>(
    source: &S,
    request: &DocRequest,
) -> Result<Option<String>, FetchError> {
    source.fetch_content(&request.doc).await
}

/// One page visit: a canvas plus the source its documents come from.
#[derive(Debug)]
pub struct PlanSession<S> {
    source: S,
    canvas: PlanCanvas,
}

impl<S: ContentSource> PlanSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            canvas: PlanCanvas::new(),
        }
    }

    /// Fetch the boards file and apply it to the canvas.
    pub async fn load(&mut self) {
        let outcome = self.source.fetch_content(self.canvas.boards_doc()).await;
        self.canvas.finish_load(outcome);
    }

    /// Select `board` and wait for its document.
    pub async fn select(&mut self, board: Option<Board>) {
        let Some(request) = self.canvas.select_board(board) else {
            return;
        };
        let outcome = fetch_doc(&self.source, &request).await;
        self.canvas.finish_doc_request(request.token, outcome);
    }

    /// Select by board id. Returns false for unknown ids.
    pub async fn select_by_id(&mut self, id: &str) -> bool {
        let Some(board) = self.canvas.boards_file().find(id).cloned() else {
            return false;
        };
        self.select(Some(board)).await;
        true
    }

    pub fn canvas(&self) -> &PlanCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut PlanCanvas {
        &mut self.canvas
    }
}
