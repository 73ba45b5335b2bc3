//! Where the CLI reads collections from.

use std::{path::Path, time::Duration};

use color_eyre::eyre::{Result, WrapErr};
use tourdex_core::Config;
use tourdex_search::{DirSource, HttpSource, SearchError, SourceKind, SourceLoader};

/// The collection source configured for a site.
#[derive(Debug, Clone)]
pub enum SiteSource {
    Http(HttpSource),
    Dir(DirSource),
    /// No `[sources]` configured: only static pages are indexed.
    Unconfigured,
}

impl SiteSource {
    /// Pick the source from `[sources]`: a URL, else a directory resolved
    /// against the config file's location.
    pub fn from_config(config: &Config, config_path: &Path) -> Result<Self> {
        if let Some(url) = &config.sources.url {
            let timeout = Duration::from_secs(config.sources.timeout_secs);
            let source = HttpSource::new(url, timeout).wrap_err("Failed to set up HTTP client")?;
            tracing::debug!(url, ?timeout, "Reading collections over HTTP");
            return Ok(Self::Http(source));
        }

        match config.resolve_source_dir(config_path) {
            Some(dir) => {
                tracing::debug!(dir = %dir.display(), "Reading collections from directory");
                Ok(Self::Dir(DirSource::new(dir)))
            }
            None => {
                tracing::warn!("No [sources] configured, indexing static pages only");
                Ok(Self::Unconfigured)
            }
        }
    }

    /// Human-readable location of `kind`.
    pub fn describe(&self, kind: SourceKind) -> String {
        match self {
            SiteSource::Http(source) => source.url_for(kind),
            SiteSource::Dir(source) => source.dir().join(kind.file_name()).display().to_string(),
            SiteSource::Unconfigured => "(not configured)".to_string(),
        }
    }
}

impl SourceLoader for SiteSource {
    async fn load(&self, kind: SourceKind) -> tourdex_search::Result<String> {
        match self {
            SiteSource::Http(source) => source.load(kind).await,
            SiteSource::Dir(source) => source.load(kind).await,
            SiteSource::Unconfigured => Err(SearchError::unavailable(kind, "no source configured")),
        }
    }
}
