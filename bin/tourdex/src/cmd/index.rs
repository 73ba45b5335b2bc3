//! Index command - dump the built index as JSON

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

/// Run the index command.
///
/// Writes the index to `output`, or to stdout when no path is given.
pub async fn run(config_path: &Path, output: Option<&Path>) -> Result<()> {
    tracing::info!(?config_path, ?output, "Building index");

    let (_, index) = super::load_index(config_path).await?;
    let json = index.to_json_pretty()?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .wrap_err_with(|| format!("Failed to write index to {}", path.display()))?;
            println!(
                "✓ Wrote {} documents to {}",
                index.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
