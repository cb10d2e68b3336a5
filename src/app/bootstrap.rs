use log::warn;

use crate::app::scraper::Scraper;
use crate::cli::Cli;
use crate::config::{load_scrape_config, ScrapeConfig};
use crate::error::Result;

/// Resolve the effective configuration: builtin or JSON file, then command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<ScrapeConfig> {
    let mut config = match &cli.config {
        Some(path) => load_scrape_config(path)?,
        None => ScrapeConfig::builtin(),
    };

    if !cli.symbols.is_empty() {
        config = config.with_symbols(cli.symbols.iter().map(|s| s.trim().to_uppercase()));
    }
    if let Some(output) = &cli.output {
        config = config.with_output(output);
    }

    Ok(config)
}

/// Entry point used by `main`. Only configuration and output-file errors are returned.
pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let scraper = Scraper::new(config)?;

    let report = scraper.run().await?;
    if !report.skipped.is_empty() {
        warn!(
            "Skipped {} symbol(s): {}",
            report.skipped.len(),
            report
                .skipped
                .iter()
                .map(|s| s.symbol.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
