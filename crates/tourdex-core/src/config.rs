//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Placeholder substituted with a record identifier in detail routes.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Main configuration structure for Tourdex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Where the CMS collections are loaded from.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Query engine settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Page routes used to build document URLs.
    #[serde(default)]
    pub routes: RoutesConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,
}

/// Location of the CMS JSON collections.
///
/// At most one of `url` and `dir` may be set. With neither, only the static
/// pages are indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Base URL the collection files are fetched from.
    #[serde(default)]
    pub url: Option<String>,

    /// Local directory holding the collection files.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Query engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum trimmed query length, in characters.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Score a document needs to count as an exact match.
    #[serde(default = "default_exact_threshold")]
    pub exact_threshold: u32,

    /// Maximum number of exact matches returned.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Number of nearest titles suggested when nothing matches.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

/// Routes of the pages documents link to, relative to `site.base_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Tour detail page; `{id}` is replaced by the tour identifier.
    #[serde(default = "default_tour_detail")]
    pub tour_detail: String,

    /// Service detail page; `{id}` is replaced by the service identifier.
    #[serde(default = "default_service_detail")]
    pub service_detail: String,

    /// Tours listing, linked when a tour has no usable identifier.
    #[serde(default = "default_tours_page")]
    pub tours_page: String,

    /// Services listing, linked when a service has no usable identifier.
    #[serde(default = "default_services_page")]
    pub services_page: String,

    /// Page hosting the FAQ entries.
    #[serde(default = "default_faq_page")]
    pub faq_page: String,

    /// Page hosting the reviews section.
    #[serde(default = "default_home_page")]
    pub reviews_page: String,

    /// Fragment id of the reviews section.
    #[serde(default = "default_reviews_anchor")]
    pub reviews_anchor: String,

    /// Page hosting the partners section.
    #[serde(default = "default_home_page")]
    pub partners_page: String,

    /// Fragment id of the partners section.
    #[serde(default = "default_partners_anchor")]
    pub partners_anchor: String,
}

// Default value functions
fn default_timeout_secs() -> u64 {
    10
}

fn default_min_query_len() -> usize {
    2
}

fn default_exact_threshold() -> u32 {
    30
}

fn default_max_results() -> usize {
    8
}

fn default_max_suggestions() -> usize {
    3
}

fn default_tour_detail() -> String {
    "tour-details.html?id={id}".to_string()
}

fn default_service_detail() -> String {
    "service-details.html?id={id}".to_string()
}

fn default_tours_page() -> String {
    "tours.html".to_string()
}

fn default_services_page() -> String {
    "services.html".to_string()
}

fn default_faq_page() -> String {
    "contact.html".to_string()
}

fn default_home_page() -> String {
    "index.html".to_string()
}

fn default_reviews_anchor() -> String {
    "testimonials".to_string()
}

fn default_partners_anchor() -> String {
    "partners".to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            url: None,
            dir: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            exact_threshold: default_exact_threshold(),
            max_results: default_max_results(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            tour_detail: default_tour_detail(),
            service_detail: default_service_detail(),
            tours_page: default_tours_page(),
            services_page: default_services_page(),
            faq_page: default_faq_page(),
            reviews_page: default_home_page(),
            reviews_anchor: default_reviews_anchor(),
            partners_page: default_home_page(),
            partners_anchor: default_partners_anchor(),
        }
    }
}

impl SiteConfig {
    /// Create a site configuration.
    pub fn new(title: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            base_url: base_url.into(),
        }
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Get the full URL for an in-page fragment.
    pub fn anchor_url(&self, page: &str, anchor: &str) -> String {
        format!("{}#{anchor}", self.url_for(page))
    }
}

impl RoutesConfig {
    /// Path of a tour detail page. The id is percent-encoded.
    pub fn tour_path(&self, id: &str) -> String {
        self.tour_detail.replace(ID_PLACEHOLDER, &encode_id(id))
    }

    /// Path of a service detail page. The id is percent-encoded.
    pub fn service_path(&self, id: &str) -> String {
        self.service_detail.replace(ID_PLACEHOLDER, &encode_id(id))
    }
}

/// Encode an identifier for use as a query value or path segment.
fn encode_id(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl Config {
    /// Create a configuration with default sections for a site.
    pub fn for_site(site: SiteConfig) -> Self {
        Self {
            site,
            sources: SourcesConfig::default(),
            search: SearchConfig::default(),
            routes: RoutesConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `TOURDEX__*` overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("TOURDEX").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::invalid("site.title", "cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::invalid("site.base_url", "cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        if self.sources.url.is_some() && self.sources.dir.is_some() {
            return Err(CoreError::invalid(
                "sources",
                "url and dir are mutually exclusive",
            ));
        }

        if self.search.min_query_len == 0 {
            return Err(CoreError::invalid("search.min_query_len", "must be at least 1"));
        }

        if self.search.max_results == 0 {
            return Err(CoreError::invalid("search.max_results", "must be at least 1"));
        }

        if self.search.max_suggestions == 0 {
            return Err(CoreError::invalid(
                "search.max_suggestions",
                "must be at least 1",
            ));
        }

        for (name, route) in [
            ("routes.tour_detail", &self.routes.tour_detail),
            ("routes.service_detail", &self.routes.service_detail),
        ] {
            if !route.contains(ID_PLACEHOLDER) {
                return Err(CoreError::invalid(
                    name,
                    format!("must contain the {ID_PLACEHOLDER} placeholder"),
                ));
            }
        }

        Ok(())
    }

    /// Resolve a relative `sources.dir` against the directory holding the config file.
    pub fn resolve_source_dir(&self, config_path: &Path) -> Option<PathBuf> {
        let dir = self.sources.dir.as_ref()?;
        if dir.is_absolute() {
            return Some(dir.clone());
        }
        let base = config_path.parent().unwrap_or_else(|| Path::new("."));
        Some(base.join(dir))
    }
}
