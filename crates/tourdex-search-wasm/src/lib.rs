//! Tourdex Search WASM Runtime
//!
//! Browser-side site search using WebAssembly.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import { SiteSearch } from 'tourdex-search-wasm';
//!
//! // Fetch the CMS collections and build the index
//! const search = await SiteSearch.load('https://wanderlust.example');
//!
//! // Search
//! const { exact, nearest } = search.search('goa');
//! console.log(exact.length ? exact : nearest);
//! ```

pub mod fetch;

pub use fetch::FetchSource;
use serde::Serialize;
use tourdex_core::{RoutesConfig, SiteConfig, SourceCollections};
use tourdex_search::{IndexBuilder, SearchIndex, SearchOptions, SearchResults, load_collections};
use wasm_bindgen::prelude::*;

/// Directory under the site root the CMS publishes its collections to.
pub const DEFAULT_DATA_PATH: &str = "data";

/// Initialize the WASM module.
///
/// Sets up panic hook for better error messages in the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the search library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Cut a display snippet around the first match of `query`.
#[wasm_bindgen]
pub fn snippet(text: &str, query: &str, max_chars: usize) -> Option<String> {
    tourdex_search::snippet(text, query, max_chars)
}

/// Site search for the browser.
#[wasm_bindgen]
pub struct SiteSearch {
    index: SearchIndex,
    options: SearchOptions,
}

#[wasm_bindgen]
impl SiteSearch {
    /// Fetch every collection and build the index.
    ///
    /// `data_url` defaults to `{base_url}/data`. Collections that cannot be
    /// fetched are left out; the static pages are always searchable.
    #[wasm_bindgen(js_name = load)]
    pub async fn load(base_url: String, data_url: Option<String>) -> SiteSearch {
        let site = SiteConfig::new("", base_url.as_str());
        let data_url = data_url.unwrap_or_else(|| site.url_for(DEFAULT_DATA_PATH));

        let collections = load_collections(&FetchSource::new(&data_url)).await;
        Self::from_collections(site, &collections)
    }

    /// Search the index.
    ///
    /// Returns `{ query, exact, nearest }`, where at most one list is
    /// non-empty.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        self.results(query)
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize results: {e}")))
    }

    /// Get the number of indexed documents.
    #[wasm_bindgen(js_name = documentCount)]
    pub fn document_count(&self) -> usize {
        self.index.len()
    }
}

impl SiteSearch {
    /// Build from already loaded collections.
    pub fn from_collections(site: SiteConfig, collections: &SourceCollections) -> Self {
        let index = IndexBuilder::new(site, RoutesConfig::default()).build(collections);
        tracing::debug!(documents = index.len(), "Site search ready");

        Self {
            index,
            options: SearchOptions::default(),
        }
    }

    pub fn results(&self, query: &str) -> SearchResults<'_> {
        self.index.search_with(query, &self.options)
    }
}
