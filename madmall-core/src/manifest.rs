/// Curriculum manifest shown on the agents inventory page.
///
/// The manifest is optional: a missing or malformed file yields a fixed
/// placeholder so the page always renders.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestItem {
    pub filename: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumManifest {
    pub source: String,
    pub imported_at: String,
    #[serde(default)]
    pub items: Vec<ManifestItem>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl CurriculumManifest {
    pub fn placeholder() -> Self {
        Self {
            source: "Not configured".to_string(),
            imported_at: "N/A".to_string(),
            items: Vec::new(),
            notes: vec![
                "Manifest not found. Place agents/ibm/manifest.json in the web app root."
                    .to_string(),
            ],
        }
    }

    /// Load from `path`, falling back to [`placeholder`](Self::placeholder).
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!(
                    target: "madmall.manifest",
                    "Failed to parse manifest {}: {}",
                    path.display(),
                    e
                );
                Self::placeholder()
            }),
            Err(_) => {
                log::info!(
                    target: "madmall.manifest",
                    "No manifest at {}, using placeholder",
                    path.display()
                );
                Self::placeholder()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_manifest_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = CurriculumManifest::load(&dir.path().join("manifest.json"));
        assert_eq!(manifest, CurriculumManifest::placeholder());
        assert_eq!(manifest.notes.len(), 1);
    }

    #[test]
    fn test_malformed_manifest_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(&path, "{\"source\": 3}").unwrap();
        assert_eq!(CurriculumManifest::load(&path), CurriculumManifest::placeholder());
    }

    #[test]
    fn test_loads_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(
            &path,
            r#"{ "source": "IBM SkillsBuild", "imported_at": "2025-01-04",
                 "items": [{ "filename": "agents-101.pdf", "path": "agents/ibm/agents-101.pdf" }],
                 "notes": [] }"#,
        )
        .unwrap();
        let manifest = CurriculumManifest::load(&path);
        assert_eq!(manifest.source, "IBM SkillsBuild");
        assert_eq!(manifest.items[0].filename, "agents-101.pdf");
        assert!(manifest.notes.is_empty());
    }
}
