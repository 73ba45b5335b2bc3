//! Tourdex CLI
//!
//! Search a tourism site's static pages and CMS collections.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Tourdex.
#[derive(Parser)]
#[command(
    name = "tourdex",
    version,
    about = "Site search for tourism websites"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Search the site
    Search {
        /// Search query
        query: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the index and dump it as JSON
    Index {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Validate configuration and collection sources
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    tourdex::init_tracing(cli.verbose);

    match cli.command {
        Commands::Search { query, json } => {
            tourdex::cmd::search::run(&cli.config, &query, json).await?;
        }
        Commands::Index { output } => {
            tourdex::cmd::index::run(&cli.config, output.as_deref()).await?;
        }
        Commands::Check { strict } => {
            tourdex::cmd::check::run(&cli.config, strict).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_search_command_parsing() {
        let args = ["tourdex", "search", "golden triangle"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Search { query, json } => {
                assert_eq!(query, "golden triangle");
                assert!(!json);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_search_json() {
        let args = ["tourdex", "search", "goa", "--json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Search { json, .. } => {
                assert!(json);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_index_command_parsing() {
        let args = ["tourdex", "index", "--output", "search.json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Index { output } => {
                assert_eq!(output, Some(std::path::PathBuf::from("search.json")));
            }
            _ => panic!("Expected Index command"),
        }
    }

    #[test]
    fn test_cli_index_to_stdout() {
        let cli = Cli::parse_from(["tourdex", "index"]);
        match cli.command {
            Commands::Index { output } => assert!(output.is_none()),
            _ => panic!("Expected Index command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["tourdex", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["tourdex", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["tourdex", "--config", "site.toml", "search", "kerala"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }

    #[test]
    fn test_cli_search_requires_query() {
        assert!(Cli::try_parse_from(["tourdex", "search"]).is_err());
    }
}
