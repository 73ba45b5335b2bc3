//! CMS record types.
//!
//! These mirror the JSON collections the site's CMS publishes. Field aliases
//! accept the spellings different collection exports have used over time.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A tour package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourRecord {
    /// Externally assigned identifier, preferred over a derived slug.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,

    /// Display name.
    #[serde(alias = "title")]
    pub name: String,

    /// Duration as entered in the CMS, e.g. "5 Days / 4 Nights".
    #[serde(default)]
    pub duration: Option<String>,

    /// Main destination.
    #[serde(default)]
    pub destination: Option<String>,

    /// Price, as a number or preformatted text.
    #[serde(default)]
    pub price: Option<Price>,

    /// Highlight bullet points.
    #[serde(default, deserialize_with = "lenient_list")]
    pub highlights: Vec<String>,

    /// Longer description.
    #[serde(default, alias = "overview")]
    pub description: Option<String>,
}

/// A service or offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,

    #[serde(alias = "name")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub features: Vec<String>,
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqRecord {
    #[serde(alias = "question")]
    pub q: String,

    #[serde(default, alias = "answer", deserialize_with = "lenient_text")]
    pub a: String,
}

/// A customer review or testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Reviewer name.
    #[serde(alias = "author")]
    pub name: String,

    #[serde(
        default,
        alias = "text",
        alias = "review",
        deserialize_with = "lenient_text"
    )]
    pub comment: String,

    /// Star rating; half stars are common.
    #[serde(default)]
    pub rating: Option<f32>,
}

/// A partner organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// External link to the partner's own site.
    #[serde(default, alias = "url", alias = "website")]
    pub link: Option<String>,
}

/// A price as published by the CMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) if amount.fract() == 0.0 => write!(f, "{amount:.0}"),
            Price::Amount(amount) => write!(f, "{amount:.2}"),
            Price::Text(text) => f.write_str(text.trim()),
        }
    }
}

/// An identifier exported as either a string or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Accept `"T-7"`, `7` or `null` as an identifier.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let id = Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) if n.fract() == 0.0 => format!("{n:.0}"),
        RawId::Float(n) => n.to_string(),
    });
    Ok(id)
}

/// Treat an explicit `null` list as empty.
fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treat an explicit `null` string as empty.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// All CMS collections the search index is built from.
///
/// Every collection may be empty; a collection that could not be loaded is
/// represented as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceCollections {
    pub tours: Vec<TourRecord>,
    pub services: Vec<ServiceRecord>,
    pub faqs: Vec<FaqRecord>,
    pub reviews: Vec<ReviewRecord>,
    pub partners: Vec<PartnerRecord>,
}

impl SourceCollections {
    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.tours.len()
            + self.services.len()
            + self.faqs.len()
            + self.reviews.len()
            + self.partners.len()
    }

    /// Check whether every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
