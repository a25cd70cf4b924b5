/// Local filesystem document store.
///
/// Documents live under a single content root that is resolved once at
/// start-up and injected here. Reads are async and never cached.
use std::future::Future;
use std::path::{Path, PathBuf};

use super::{is_safe_relative_path, DocumentStore, StoreError};

#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentStore for LocalDocumentStore {
    fn content_root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, doc: &str) -> Result<PathBuf, StoreError> {
        if !is_safe_relative_path(doc) {
            return Err(StoreError::InvalidPath(doc.to_string()));
        }
        let resolved = self.root.join(doc);
        // Must land strictly below the root, not on it.
        let below_root = resolved.starts_with(&self.root)
            && resolved.components().count() > self.root.components().count();
        if !below_root {
            return Err(StoreError::InvalidPath(doc.to_string()));
        }
        Ok(resolved)
    }

    fn read_document(
        &self,
        doc: &str,
    ) -> impl Future<Output = Result<String, StoreError>> + Send {
        let resolved = self.resolve(doc);
        let doc = doc.to_string();
        async move {
            let path = resolved?;
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| StoreError::NotFound { doc, source })
        }
    }
}
