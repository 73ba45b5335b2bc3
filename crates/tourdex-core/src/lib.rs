//! Tourdex Core Library
//!
//! Core types, configuration, and error handling for the Tourdex site search.

pub mod config;
pub mod content;
pub mod error;

pub use config::{Config, RoutesConfig, SearchConfig, SiteConfig, SourcesConfig};
pub use content::{
    FaqRecord, PartnerRecord, Price, ReviewRecord, ServiceRecord, SourceCollections, TourRecord,
};
pub use error::{CoreError, Result};
