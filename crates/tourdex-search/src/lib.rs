//! Tourdex Search Library
//!
//! Site search for a tourism website: an index of static pages and CMS
//! records, ranked by weighted substring matches with an edit-distance
//! fallback for misspelled queries.
//!
//! # Features
//!
//! - **Index builder**: Maps tours, services, FAQs, reviews and partners to documents
//! - **Ranking**: Field-weighted scoring with a "did you mean" fallback
//! - **Source loaders**: Memory, local directory (`fs`) and HTTP (`http`) collections
//! - **Index cache**: Builds once per site and rebuilds on invalidation
//!
//! # Example
//!
//! ```no_run
//! use tourdex_core::{Config, SiteConfig, SourceCollections};
//! use tourdex_search::IndexBuilder;
//!
//! let config = Config::for_site(SiteConfig::new("Wanderlust Travels", "https://wanderlust.example"));
//! let index = IndexBuilder::from_config(&config).build(&SourceCollections::default());
//!
//! let results = index.search("contact");
//! for hit in &results.exact {
//!     println!("{} -> {}", hit.document.title, hit.document.url);
//! }
//! ```

pub mod builder;
pub mod cache;
pub mod distance;
pub mod document;
pub mod index;
pub mod pages;
pub mod query;
pub mod slug;
pub mod snippet;
pub mod source;

pub use builder::{IndexBuilder, tour_id};
pub use cache::IndexCache;
pub use distance::{edit_distance, prefix_distance};
pub use document::{Document, DocumentKind, IndexedDocument};
pub use index::{INDEX_VERSION, SearchIndex};
pub use pages::{STATIC_PAGES, StaticPage, static_documents};
pub use query::{
    Relevance, ScoredDocument, SearchOptions, SearchResults, is_searchable, kind_bonus,
    score_document, search,
};
pub use slug::{normalize_duration, slugify};
pub use snippet::{highlight_ranges, snippet};
#[cfg(feature = "fs")]
pub use source::DirSource;
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{MemorySource, SourceKind, SourceLoader, load_collections, parse_collection};
use thiserror::Error;

/// Search-related errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A collection could not be fetched or read.
    #[error("{kind} unavailable: {reason}")]
    SourceUnavailable { kind: SourceKind, reason: String },

    /// A collection was fetched but is not in a recognized shape.
    #[error("failed to parse {kind}: {message}")]
    Parse { kind: SourceKind, message: String },

    /// HTTP client setup error.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SearchError {
    pub fn unavailable(kind: SourceKind, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            kind,
            reason: reason.into(),
        }
    }
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
