//! Collection loading through the browser's `fetch`.

use gloo_net::http::Request;
use tourdex_search::{Result, SearchError, SourceKind, SourceLoader};

/// Fetches collections from `{base_url}/{file_name}` in the browser.
#[derive(Debug, Clone)]
pub struct FetchSource {
    base_url: String,
}

impl FetchSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, kind: SourceKind) -> String {
        format!("{}/{}", self.base_url, kind.file_name())
    }
}

impl SourceLoader for FetchSource {
    async fn load(&self, kind: SourceKind) -> Result<String> {
        let response = Request::get(&self.url_for(kind))
            .send()
            .await
            .map_err(|e| SearchError::unavailable(kind, format!("Network error: {e}")))?;

        if !response.ok() {
            return Err(SearchError::unavailable(
                kind,
                format!("HTTP {}", response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::unavailable(kind, format!("Failed to read response: {e}")))
    }
}
