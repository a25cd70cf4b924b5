/// HTTP client for `GET /api/content`, so a canvas can be driven against a
/// running server the same way a browser would.
use std::future::Future;

use madmall_core::canvas::{ContentSource, FetchError};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

#[derive(Deserialize)]
struct ContentBody {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContentClient {
    base_url: String,
    http: reqwest::Client,
}

impl ContentClient {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn content_url(&self, doc: &str) -> String {
        format!(
            "{}/api/content?doc={}",
            self.base_url,
            utf8_percent_encode(doc, NON_ALPHANUMERIC)
        )
    }
}

impl ContentSource for ContentClient {
    fn fetch_content(
        &self,
        doc: &str,
    ) -> impl Future<Output = Result<Option<String>, FetchError>> + Send {
        let request = self.http.get(self.content_url(doc));
        async move {
            let resp = request
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = resp.status();
            if !status.is_success() {
                log::debug!(target: "madmall.client", "Content request answered {}", status);
                return Err(FetchError::Status(status.as_u16()));
            }
            let body: ContentBody = resp
                .json()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))?;
            Ok(body.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_url_encodes_doc() {
        let client = ContentClient::new("http://127.0.0.1:3000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:3000");
        assert_eq!(
            client.content_url("plan/boards.json"),
            "http://127.0.0.1:3000/api/content?doc=plan%2Fboards%2Ejson"
        );
    }
}
