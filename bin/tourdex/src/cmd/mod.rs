//! CLI command implementations.

pub mod check;
pub mod index;
pub mod search;

use std::{path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use tourdex_core::Config;
use tourdex_search::{IndexBuilder, IndexCache, SearchIndex};

use crate::SiteSource;

/// Load the configuration and build the site's index.
pub(crate) async fn load_index(config_path: &Path) -> Result<(Config, Arc<SearchIndex>)> {
    let config = Config::load(config_path).wrap_err("Failed to load configuration")?;
    let source = SiteSource::from_config(&config, config_path)?;

    let cache = IndexCache::new(source, IndexBuilder::from_config(&config));
    let index = cache.index().await;

    Ok((config, index))
}
