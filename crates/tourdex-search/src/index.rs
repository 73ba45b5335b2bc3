//! The in-memory search index.

use serde::Serialize;

use crate::{
    Document, SearchResults,
    document::IndexedDocument,
    query::{self, SearchOptions},
};

/// Index format version, bumped when the serialized layout changes.
pub const INDEX_VERSION: u32 = 1;

/// An ordered, read-only list of indexed documents.
///
/// The derived search text of every document is computed here, once. An index
/// is never patched: to pick up new content, build a new one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchIndex {
    version: u32,
    documents: Vec<IndexedDocument>,
}

impl SearchIndex {
    /// Index `documents`, keeping their order.
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            version: INDEX_VERSION,
            documents: documents.into_iter().map(IndexedDocument::new).collect(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn documents(&self) -> &[IndexedDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Search with the default limits.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        self.search_with(query, &SearchOptions::default())
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> SearchResults<'_> {
        query::search(query, &self.documents, options)
    }

    /// Serialize the index to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::SearchError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentKind;

    fn sample_index() -> SearchIndex {
        SearchIndex::new(vec![
            Document::new(DocumentKind::Page, "Gallery", "https://x.example/gallery.html"),
            Document::new(DocumentKind::Tour, "Kerala Backwaters", "https://x.example/t/1")
                .with_excerpt("Houseboats and tea gardens"),
        ])
    }

    #[test]
    fn test_new_keeps_order() {
        let index = sample_index();
        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
        assert_eq!(index.version(), INDEX_VERSION);
        assert_eq!(index.documents()[0].document().title, "Gallery");
        assert_eq!(
            index.documents()[1].search_text(),
            "kerala backwaters houseboats and tea gardens"
        );
    }

    #[test]
    fn test_search_delegates() {
        let index = sample_index();
        let results = index.search("kerala");
        assert_eq!(results.exact.len(), 1);
        assert_eq!(results.exact[0].document.title, "Kerala Backwaters");
    }

    #[test]
    fn test_empty_index() {
        let index = SearchIndex::default();
        assert!(index.is_empty());
        assert!(index.search("anything").is_empty());
    }

    #[test]
    fn test_to_json_pretty() {
        let json = sample_index().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["documents"][1]["type"], "tour");
        assert_eq!(value["documents"][0]["search_text"], "gallery ");
    }
}
