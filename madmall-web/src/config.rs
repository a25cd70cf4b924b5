/// Configuration for the MADMall web server.
/// Reads web.json from $MADMALL_WEB_CONFIG or ~/.config/madmall/web.json
/// (or platform equivalent).
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MADMALL_WEB_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Candidate content directories, probed in order at start-up.
    #[serde(default = "default_content_roots")]
    pub content_roots: Vec<PathBuf>,
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
}

fn default_port() -> u16 {
    3000
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_content_roots() -> Vec<PathBuf> {
    vec![
        PathBuf::from("content"),
        PathBuf::from("apps").join("web").join("content"),
    ]
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("agents").join("ibm").join("manifest.json")
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            content_roots: default_content_roots(),
            manifest_path: default_manifest_path(),
        }
    }
}

/// Config path: $MADMALL_WEB_CONFIG, else ~/.config/madmall/web.json
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("madmall")
        .join("web.json")
}

/// Load config from path. Returns default if file doesn't exist.
pub fn load_config(path: &Path) -> WebConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!(target: "madmall.config", "Failed to parse config {}: {}", path.display(), e);
            WebConfig::default()
        }),
        Err(_) => {
            log::info!(target: "madmall.config", "No config at {}, using defaults", path.display());
            WebConfig::default()
        }
    }
}
