//! Searchable documents.
//!
//! A [`Document`] is what callers render; an [`IndexedDocument`] pairs it with
//! the lowercased text the query engine matches against. Only the index
//! creates `IndexedDocument`s, so the derived text always reflects the
//! document it was computed from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of page or record a document points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Page,
    Tour,
    Service,
    Faq,
    Review,
    Partner,
}

impl DocumentKind {
    /// All kinds, in display order.
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::Page,
        DocumentKind::Tour,
        DocumentKind::Service,
        DocumentKind::Faq,
        DocumentKind::Review,
        DocumentKind::Partner,
    ];

    /// Lowercase name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Page => "page",
            DocumentKind::Tour => "tour",
            DocumentKind::Service => "service",
            DocumentKind::Faq => "faq",
            DocumentKind::Review => "review",
            DocumentKind::Partner => "partner",
        }
    }

    /// Default display glyph for result lists.
    pub fn icon(self) -> &'static str {
        match self {
            DocumentKind::Page => "📄",
            DocumentKind::Tour => "🧭",
            DocumentKind::Service => "🛎️",
            DocumentKind::Faq => "❓",
            DocumentKind::Review => "⭐",
            DocumentKind::Partner => "🤝",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single searchable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Display title.
    pub title: String,

    /// Document kind.
    #[serde(rename = "type")]
    pub kind: DocumentKind,

    /// Absolute URL of the target.
    pub url: String,

    /// Free text shown under the title. May be empty.
    #[serde(default)]
    pub excerpt: String,

    /// Extra terms the document should be found by.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Display glyph.
    pub icon: String,

    /// Tour duration, as published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Tour price, as published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Tour destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// In-page fragment identifier the URL points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl Document {
    /// Create a document with the kind's default icon and no optional fields.
    pub fn new(kind: DocumentKind, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            url: url.into(),
            excerpt: String::new(),
            keywords: Vec::new(),
            icon: kind.icon().to_string(),
            duration: None,
            price: None,
            destination: None,
            anchor: None,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_duration(mut self, duration: Option<String>) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_price(mut self, price: Option<String>) -> Self {
        self.price = price;
        self
    }

    pub fn with_destination(mut self, destination: Option<String>) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Lowercased concatenation of title, excerpt and keywords.
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len()
                + self.excerpt.len()
                + self.keywords.iter().map(|k| k.len() + 1).sum::<usize>()
                + 2,
        );
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.excerpt);
        for keyword in &self.keywords {
            text.push(' ');
            text.push_str(keyword);
        }
        text.to_lowercase()
    }
}

/// A document together with the lowercased fields the query engine reads.
#[derive(Debug, Clone, Serialize)]
pub struct IndexedDocument {
    #[serde(flatten)]
    document: Document,

    search_text: String,

    #[serde(skip)]
    title: String,

    #[serde(skip)]
    excerpt: String,

    #[serde(skip)]
    keywords: String,

    #[serde(skip)]
    destination: Option<String>,
}

impl IndexedDocument {
    pub(crate) fn new(document: Document) -> Self {
        Self {
            search_text: document.search_text(),
            title: document.title.to_lowercase(),
            excerpt: document.excerpt.to_lowercase(),
            keywords: document.keywords.join(" ").to_lowercase(),
            destination: document.destination.as_deref().map(str::to_lowercase),
            document,
        }
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Lowercased concatenation of title, excerpt and keywords.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub(crate) fn title_lower(&self) -> &str {
        &self.title
    }

    pub(crate) fn excerpt_lower(&self) -> &str {
        &self.excerpt
    }

    pub(crate) fn keywords_lower(&self) -> &str {
        &self.keywords
    }

    pub(crate) fn destination_lower(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}
