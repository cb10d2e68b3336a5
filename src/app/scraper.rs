use std::collections::HashSet;

use log::{debug, error, info};

use crate::config::{validate_scrape_config, ScrapeConfig};
use crate::error::Result;
use crate::extract::QuoteExtractor;
use crate::fetch::PageFetcher;
use crate::records::QuoteBook;
use crate::utils::current_human_timestamp;

/// A symbol that was dropped from the output, with the reason it failed.
#[derive(Debug, Clone)]
pub struct SkippedSymbol {
    pub symbol: String,
    pub reason: String,
}

/// Outcome of one scrape pass.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub book: QuoteBook,
    pub skipped: Vec<SkippedSymbol>,
}

/// Drives fetch, extract, and write for every configured symbol, one at a time.
pub struct Scraper {
    config: ScrapeConfig,
    fetcher: PageFetcher,
    extractor: QuoteExtractor,
}

impl Scraper {
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        validate_scrape_config(&config)?;
        let fetcher = PageFetcher::new(&config)?;
        let extractor = QuoteExtractor::new(&config.selectors)?;

        Ok(Self {
            config,
            fetcher,
            extractor,
        })
    }

    /// Visit every symbol in order. Fetch failures are logged and the symbol is skipped.
    ///
    /// A URL is requested at most once per pass, even when it failed the first time.
    pub async fn scrape(&self) -> ScrapeReport {
        let mut report = ScrapeReport::default();
        let mut visited = HashSet::new();

        for symbol in &self.config.symbols {
            let fetched = match self.fetcher.url_for(symbol) {
                Ok(url) => {
                    if !visited.insert(url.clone()) {
                        debug!("Already visited {}, skipping {}", url, symbol);
                        continue;
                    }
                    self.fetcher.fetch_url(symbol, &url).await
                }
                Err(err) => Err(err),
            };

            match fetched {
                Ok(html) => {
                    let quote = self.extractor.extract(&html);
                    info!("Scraped: {}", quote);
                    report.book.push(quote);
                }
                Err(err) => {
                    error!("Error occurred: {}", err);
                    report.skipped.push(SkippedSymbol {
                        symbol: symbol.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        report
    }

    /// Scrape, then write the collected quotes.
    ///
    /// The output file is only created once every fetch has finished, so a failure
    /// to create it discards the whole pass.
    pub async fn run(&self) -> Result<ScrapeReport> {
        let report = self.scrape().await;

        report.book.save_to_csv(&self.config.output)?;
        info!(
            "Data saved to {} ({} of {} symbols) at {}",
            self.config.output.display(),
            report.book.len(),
            self.config.symbols.len(),
            current_human_timestamp()
        );

        Ok(report)
    }
}
