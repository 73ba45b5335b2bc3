//! Query scoring and result selection.
//!
//! Every document gets an additive score from substring hits on its fields,
//! a bonus for its kind, and a small fuzzy bonus when the query is close to
//! the start of its title. Documents at or above the exact threshold are
//! returned best-first; when none qualify, the titles closest to the whole
//! query are suggested instead.
//!
//! | Signal                                   | Points         |
//! |------------------------------------------|----------------|
//! | title contains query                     | 100            |
//! | title starts with query                  | +50            |
//! | destination contains query               | 90             |
//! | keywords contain query                   | 80             |
//! | excerpt contains query                   | 40             |
//! | kind bonus (tour / page / service)       | 15 / 10 / 8    |
//! | title prefix within 2 edits of query     | 30 − 10×d      |

use serde::Serialize;
use tourdex_core::SearchConfig;

use crate::{
    Document, DocumentKind,
    distance::{edit_distance, prefix_distance},
    document::IndexedDocument,
};

pub const TITLE_CONTAINS_SCORE: u32 = 100;
pub const TITLE_PREFIX_SCORE: u32 = 50;
pub const DESTINATION_SCORE: u32 = 90;
pub const KEYWORDS_SCORE: u32 = 80;
pub const EXCERPT_SCORE: u32 = 40;

/// Largest title-prefix edit distance that still earns a fuzzy bonus.
pub const MAX_FUZZY_DISTANCE: usize = 2;

/// Fuzzy bonus at distance zero; each edit costs `FUZZY_STEP`.
pub const FUZZY_BASE_SCORE: u32 = 30;
pub const FUZZY_STEP: u32 = 10;

/// Limits and thresholds applied by the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Minimum trimmed query length, in characters.
    pub min_query_len: usize,

    /// Score at which a document counts as an exact match.
    pub exact_threshold: u32,

    /// Maximum number of exact matches.
    pub max_results: usize,

    /// Number of nearest-title suggestions.
    pub max_suggestions: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            exact_threshold: 30,
            max_results: 8,
            max_suggestions: 3,
        }
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            min_query_len: config.min_query_len,
            exact_threshold: config.exact_threshold,
            max_results: config.max_results,
            max_suggestions: config.max_suggestions,
        }
    }
}

/// How well a document matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    /// Additive score of an exact match. Higher is better.
    Score(u32),
    /// Edit distance of a nearest suggestion. Lower is better.
    Distance(usize),
}

/// A document ranked for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    pub relevance: Relevance,
}

/// Outcome of a query.
///
/// At most one of `exact` and `nearest` is non-empty. Both are empty when the
/// query is too short or the index holds no documents; use
/// [`is_searchable`] to tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    /// Trimmed query that was executed.
    pub query: String,

    /// Documents at or above the exact threshold, best first.
    pub exact: Vec<ScoredDocument<'a>>,

    /// Closest titles, offered when nothing matched exactly.
    pub nearest: Vec<ScoredDocument<'a>>,
}

impl SearchResults<'_> {
    /// Create empty results.
    pub fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            exact: Vec::new(),
            nearest: Vec::new(),
        }
    }

    /// Check whether neither exact matches nor suggestions were found.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.nearest.is_empty()
    }
}

/// Check whether a query is long enough to be scored.
pub fn is_searchable(query: &str, options: &SearchOptions) -> bool {
    query.trim().chars().count() >= options.min_query_len
}

/// Points a document earns for its kind alone.
pub fn kind_bonus(kind: DocumentKind) -> u32 {
    match kind {
        DocumentKind::Tour => 15,
        DocumentKind::Page => 10,
        DocumentKind::Service => 8,
        DocumentKind::Faq | DocumentKind::Review | DocumentKind::Partner => 0,
    }
}

/// Score one document against an already trimmed, lowercased query.
pub fn score_document(query: &str, doc: &IndexedDocument) -> u32 {
    let title = doc.title_lower();
    let mut score = 0;

    if title.contains(query) {
        score += TITLE_CONTAINS_SCORE;
        if title.starts_with(query) {
            score += TITLE_PREFIX_SCORE;
        }
    }

    if doc
        .destination_lower()
        .is_some_and(|destination| destination.contains(query))
    {
        score += DESTINATION_SCORE;
    }

    if doc.keywords_lower().contains(query) {
        score += KEYWORDS_SCORE;
    }

    if doc.excerpt_lower().contains(query) {
        score += EXCERPT_SCORE;
    }

    score += kind_bonus(doc.document().kind);

    let distance = prefix_distance(query, title);
    if distance <= MAX_FUZZY_DISTANCE {
        score += FUZZY_BASE_SCORE - FUZZY_STEP * distance as u32;
    }

    score
}

/// Rank `documents` against `query`.
pub fn search<'a>(
    query: &str,
    documents: &'a [IndexedDocument],
    options: &SearchOptions,
) -> SearchResults<'a> {
    let trimmed = query.trim();
    if !is_searchable(trimmed, options) {
        return SearchResults::empty(trimmed);
    }

    let needle = trimmed.to_lowercase();

    let mut exact: Vec<(u32, &IndexedDocument)> = documents
        .iter()
        .map(|doc| (score_document(&needle, doc), doc))
        .filter(|(score, _)| *score >= options.exact_threshold)
        .collect();

    if !exact.is_empty() {
        // Stable sort keeps index order among equal scores.
        exact.sort_by(|a, b| b.0.cmp(&a.0));
        exact.truncate(options.max_results);

        tracing::debug!(query = %trimmed, matches = exact.len(), "exact matches");

        return SearchResults {
            query: trimmed.to_string(),
            exact: exact
                .into_iter()
                .map(|(score, doc)| ScoredDocument {
                    document: doc.document(),
                    relevance: Relevance::Score(score),
                })
                .collect(),
            nearest: Vec::new(),
        };
    }

    let mut nearest: Vec<(usize, &IndexedDocument)> = documents
        .iter()
        .map(|doc| (edit_distance(&needle, doc.title_lower()), doc))
        .collect();
    nearest.sort_by_key(|(distance, _)| *distance);
    nearest.truncate(options.max_suggestions);

    tracing::debug!(query = %trimmed, suggestions = nearest.len(), "no exact match, suggesting nearest titles");

    SearchResults {
        query: trimmed.to_string(),
        exact: Vec::new(),
        nearest: nearest
            .into_iter()
            .map(|(distance, doc)| ScoredDocument {
                document: doc.document(),
                relevance: Relevance::Distance(distance),
            })
            .collect(),
    }
}
