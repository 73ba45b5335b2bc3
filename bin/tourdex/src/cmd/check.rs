//! Check command - validate configuration and collection sources

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use tourdex_core::{
    Config, FaqRecord, PartnerRecord, ReviewRecord, ServiceRecord, TourRecord,
};
use tourdex_search::{SearchError, SourceKind, SourceLoader, parse_collection};

use crate::SiteSource;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and loads every collection source.
pub async fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and sources");

    let result = validate(config_path).await;

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate the configuration at `config_path` and every source it names.
pub async fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            return result;
        }
    };

    println!("\nChecking configuration values...");
    check_config_values(&config, &mut result);

    println!("\nChecking sources...");
    match SiteSource::from_config(&config, config_path) {
        Ok(source) => check_sources(&source, &mut result).await,
        Err(e) => result.add_error(format!("Source error: {e}")),
    }

    result
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    if config.sources.url.is_none() && config.sources.dir.is_none() {
        result.add_warning("No [sources] configured, only static pages will be searchable");
    }

    if config.search.exact_threshold == 0 {
        result.add_warning("search.exact_threshold is 0, every document will match");
    }

    println!("  ✓ Configuration values checked");
}

/// Load and parse every collection.
///
/// A missing collection is a warning since the site still works without it.
/// A collection that exists but cannot be parsed is an error.
async fn check_sources(source: &SiteSource, result: &mut ValidationResult) {
    if matches!(source, SiteSource::Unconfigured) {
        println!("  ⚠ No sources to check");
        return;
    }

    for kind in SourceKind::ALL {
        let location = source.describe(kind);
        let outcome = match source.load(kind).await {
            Ok(json) => count_records(kind, &json),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(count) => println!("  ✓ {kind}: {count} record(s) from {location}"),
            Err(e @ SearchError::Parse { .. }) => {
                println!("  ✗ {kind}: {e}");
                result.add_error(format!("{location}: {e}"));
            }
            Err(e) => {
                println!("  ⚠ {kind}: {e}");
                result.add_warning(format!("{kind} unavailable at {location}"));
            }
        }
    }
}

fn count_records(kind: SourceKind, json: &str) -> tourdex_search::Result<usize> {
    Ok(match kind {
        SourceKind::Tours => parse_collection::<TourRecord>(kind, json)?.len(),
        SourceKind::Services => parse_collection::<ServiceRecord>(kind, json)?.len(),
        SourceKind::Faqs => parse_collection::<FaqRecord>(kind, json)?.len(),
        SourceKind::Reviews => parse_collection::<ReviewRecord>(kind, json)?.len(),
        SourceKind::Partners => parse_collection::<PartnerRecord>(kind, json)?.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const CONFIG: &str = r#"
[site]
title = "Test Travels"
base_url = "https://travels.example"

[sources]
dir = "data"
"#;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), CONFIG).unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();
        dir
    }

    #[test]
    fn test_count_records() {
        let json = r#"{"partners": [{"name": "SkyJet"}, {"name": "Stays"}]}"#;
        assert_eq!(count_records(SourceKind::Partners, json).unwrap(), 2);
        assert!(count_records(SourceKind::Partners, "oops").is_err());
    }

    #[tokio::test]
    async fn test_missing_sources_are_warnings() {
        let dir = site();
        let result = validate(&dir.path().join("config.toml")).await;

        assert!(!result.has_errors());
        assert_eq!(result.warnings.len(), SourceKind::ALL.len());
    }

    #[tokio::test]
    async fn test_malformed_source_is_error() {
        let dir = site();
        let data = dir.path().join("data");
        for kind in SourceKind::ALL {
            fs::write(data.join(kind.file_name()), "[]").unwrap();
        }
        fs::write(data.join("faqs.json"), "{\"faqs\": ").unwrap();

        let result = validate(&dir.path().join("config.toml")).await;
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("faqs.json"));
        assert!(!result.has_warnings());
    }

    #[tokio::test]
    async fn test_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate(&dir.path().join("config.toml")).await;
        assert_eq!(result.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_zero_suggestions_is_error() {
        let dir = site();
        let config = dir.path().join("config.toml");
        fs::write(&config, format!("{CONFIG}\n[search]\nmax_suggestions = 0\n")).unwrap();

        let result = validate(&config).await;
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("search.max_suggestions"));
    }

    #[tokio::test]
    async fn test_strict_fails_on_warnings() {
        let dir = site();
        let config = dir.path().join("config.toml");
        assert!(run(&config, false).await.is_ok());
        assert!(run(&config, true).await.is_err());
    }
}
