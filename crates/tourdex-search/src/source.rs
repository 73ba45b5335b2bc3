//! Loading the CMS collections.
//!
//! Each collection is a JSON document holding either a bare array of records
//! or an object with the array under a collection-specific key. Loading never
//! fails as a whole: a collection that cannot be fetched or parsed is treated
//! as empty and logged.

use std::{collections::HashMap, fmt};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tourdex_core::SourceCollections;
use tracing::{debug, warn};

use crate::{Result, SearchError};

/// The five CMS collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Tours,
    Services,
    Faqs,
    Reviews,
    Partners,
}

impl SourceKind {
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Tours,
        SourceKind::Services,
        SourceKind::Faqs,
        SourceKind::Reviews,
        SourceKind::Partners,
    ];

    /// File name the collection is published under.
    pub fn file_name(self) -> &'static str {
        match self {
            SourceKind::Tours => "tours.json",
            SourceKind::Services => "services.json",
            SourceKind::Faqs => "faqs.json",
            SourceKind::Reviews => "testimonials.json",
            SourceKind::Partners => "partners.json",
        }
    }

    /// Object keys the record array may be wrapped under.
    pub fn collection_keys(self) -> &'static [&'static str] {
        match self {
            SourceKind::Tours => &["tours"],
            SourceKind::Services => &["services", "offerings"],
            SourceKind::Faqs => &["faqs"],
            SourceKind::Reviews => &["testimonials", "reviews"],
            SourceKind::Partners => &["partners"],
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Tours => "tours",
            SourceKind::Services => "services",
            SourceKind::Faqs => "faqs",
            SourceKind::Reviews => "reviews",
            SourceKind::Partners => "partners",
        };
        f.write_str(name)
    }
}

/// Something the raw JSON of a collection can be loaded from.
#[allow(async_fn_in_trait)]
pub trait SourceLoader {
    /// Load the raw JSON text of one collection.
    async fn load(&self, kind: SourceKind) -> Result<String>;
}

/// Parse the records of one collection, skipping records that do not fit.
pub fn parse_collection<T: DeserializeOwned>(kind: SourceKind, json: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(json).map_err(|e| SearchError::Parse {
        kind,
        message: e.to_string(),
    })?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => kind
            .collection_keys()
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or_else(|| SearchError::Parse {
                kind,
                message: format!(
                    "expected an array under one of: {}",
                    kind.collection_keys().join(", ")
                ),
            })?,
        _ => {
            return Err(SearchError::Parse {
                kind,
                message: "expected an array or an object".to_string(),
            });
        }
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(%kind, position, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!(
            %kind,
            skipped = total - records.len(),
            total,
            "Some records could not be parsed"
        );
    }

    Ok(records)
}

async fn load_one<L, T>(loader: &L, kind: SourceKind) -> Vec<T>
where
    L: SourceLoader,
    T: DeserializeOwned,
{
    let outcome = match loader.load(kind).await {
        Ok(json) => parse_collection(kind, &json),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(records) => {
            debug!(%kind, records = records.len(), "Loaded collection");
            records
        }
        Err(e) => {
            warn!(%kind, error = %e, "Collection unavailable, indexing without it");
            Vec::new()
        }
    }
}

/// Load all five collections concurrently.
///
/// Waits for every load to settle. Failures become empty collections.
pub async fn load_collections<L: SourceLoader>(loader: &L) -> SourceCollections {
    let (tours, services, faqs, reviews, partners) = futures::join!(
        load_one(loader, SourceKind::Tours),
        load_one(loader, SourceKind::Services),
        load_one(loader, SourceKind::Faqs),
        load_one(loader, SourceKind::Reviews),
        load_one(loader, SourceKind::Partners),
    );

    SourceCollections {
        tours,
        services,
        faqs,
        reviews,
        partners,
    }
}

/// Collections held in memory, keyed by kind.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<SourceKind, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the JSON of one collection.
    pub fn with(mut self, kind: SourceKind, json: impl Into<String>) -> Self {
        self.insert(kind, json);
        self
    }

    pub fn insert(&mut self, kind: SourceKind, json: impl Into<String>) {
        self.documents.insert(kind, json.into());
    }

    pub fn remove(&mut self, kind: SourceKind) {
        self.documents.remove(&kind);
    }
}

impl SourceLoader for MemorySource {
    async fn load(&self, kind: SourceKind) -> Result<String> {
        self.documents
            .get(&kind)
            .cloned()
            .ok_or_else(|| SearchError::unavailable(kind, "not provided"))
    }
}

/// Collections read from files in a local directory.
#[cfg(feature = "fs")]
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: std::path::PathBuf,
}

#[cfg(feature = "fs")]
impl DirSource {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

#[cfg(feature = "fs")]
impl SourceLoader for DirSource {
    async fn load(&self, kind: SourceKind) -> Result<String> {
        let path = self.dir.join(kind.file_name());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| SearchError::unavailable(kind, format!("{}: {e}", path.display())))
    }
}

/// Collections fetched over HTTP from `{base_url}/{file_name}`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Http(e.to_string()))?;

        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn url_for(&self, kind: SourceKind) -> String {
        format!("{}/{}", self.base_url, kind.file_name())
    }
}

#[cfg(feature = "http")]
impl SourceLoader for HttpSource {
    async fn load(&self, kind: SourceKind) -> Result<String> {
        let url = self.url_for(kind);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::unavailable(kind, format!("network error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::unavailable(kind, format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::unavailable(kind, format!("failed to read response: {e}")))
    }
}
