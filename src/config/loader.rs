use std::{collections::HashMap, fs, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::error::{Context, Result};

use super::{validator, ScrapeConfig, SelectorConfig};

/// Load a scrape configuration from JSON. Keys missing from the file keep their builtin values.
pub fn load_scrape_config(path: &Path) -> Result<ScrapeConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read scrape config JSON at {}", path.display()))?;

    let raw: RawScrapeConfig = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse scrape config JSON at {}", path.display()))?;

    let config = raw.into_scrape_config(ScrapeConfig::builtin());
    validator::validate_scrape_config(&config)?;

    Ok(config)
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawScrapeConfig {
    #[serde(default)]
    symbols: Option<Vec<String>>,
    #[serde(default)]
    url_template: Option<String>,
    #[serde(default)]
    headers: Option<HashMap<String, String>>,
    #[serde(default)]
    selectors: RawSelectorConfig,
    #[serde(default)]
    output: Option<PathBuf>,
}

impl RawScrapeConfig {
    fn into_scrape_config(self, base: ScrapeConfig) -> ScrapeConfig {
        ScrapeConfig {
            symbols: self
                .symbols
                .map(|symbols| symbols.into_iter().map(|s| s.trim().to_string()).collect())
                .unwrap_or(base.symbols),
            url_template: self.url_template.unwrap_or(base.url_template),
            headers: self.headers.unwrap_or(base.headers),
            selectors: self.selectors.into_selector_config(base.selectors),
            output: self.output.unwrap_or(base.output),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawSelectorConfig {
    #[serde(default)]
    container: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    change: Option<String>,
}

impl RawSelectorConfig {
    fn into_selector_config(self, base: SelectorConfig) -> SelectorConfig {
        SelectorConfig {
            container: self.container.unwrap_or(base.container),
            company: self.company.unwrap_or(base.company),
            price: self.price.unwrap_or(base.price),
            change: self.change.unwrap_or(base.change),
        }
    }
}
