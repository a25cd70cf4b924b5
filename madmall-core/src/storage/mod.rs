pub mod local;

use std::future::Future;
use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Content root used when no candidate directories are configured.
pub const DEFAULT_CONTENT_ROOT: &str = "content";

/// Read-only access to documents addressed by a logical relative path.
/// Implementations: LocalDocumentStore (filesystem under a content root).
pub trait DocumentStore: Send + Sync {
    /// Directory all logical paths are resolved against.
    fn content_root(&self) -> &Path;

    /// Map a logical path to a file path inside the content root.
    fn resolve(&self, doc: &str) -> Result<PathBuf, StoreError>;

    /// Read the full text of a document.
    fn read_document(
        &self,
        doc: &str,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid doc path: {0}")]
    InvalidPath(String),

    #[error("Doc not found: {doc}")]
    NotFound {
        doc: String,
        #[source]
        source: std::io::Error,
    },
}

/// Check that a logical document path stays relative and never climbs out.
///
/// The value is percent-decoded first so `%2e%2e` is caught the same as `..`.
/// Callers may hand over an already-decoded value; a second decode then
/// refuses names that literally contain `%2e%2e`, which is intended. The
/// undecoded value is what gets joined onto the root.
pub fn is_safe_relative_path(value: &str) -> bool {
    let decoded = percent_decode_str(value).decode_utf8_lossy();
    if decoded.trim().is_empty() || decoded.contains('\0') {
        return false;
    }
    if decoded.contains("..") {
        return false;
    }
    if decoded.starts_with('/') || decoded.starts_with('\\') {
        return false;
    }
    let path = Path::new(decoded.as_ref());
    if path.is_absolute() {
        return false;
    }
    // Windows drive prefixes (`C:`) are absolute-ish even on unix hosts.
    let bytes = decoded.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return false;
    }
    !path
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

/// Pick the content root from an ordered candidate list: the first
/// directory that exists, otherwise the first candidate.
pub fn resolve_content_root(candidates: &[PathBuf]) -> PathBuf {
    for candidate in candidates {
        if candidate.is_dir() {
            return candidate.clone();
        }
    }
    candidates
        .first()
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_ROOT))
}
