//! Tourdex CLI Library
//!
//! This library provides the command implementations for the `tourdex` CLI.
//! It is used by the binary entry point and by the integration tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (search, index, check)
//! - [`source`] - Choosing where the CMS collections are read from
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # async fn demo() -> color_eyre::eyre::Result<()> {
//! tourdex::cmd::search::run(Path::new("config.toml"), "goa", false).await?;
//! # Ok(())
//! # }
//! ```

pub mod cmd;
pub mod source;

pub use source::SiteSource;
// Re-export core types for convenience
pub use tourdex_core::Config;
pub use tourdex_search::{IndexBuilder, IndexCache, SearchIndex};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// tourdex::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
