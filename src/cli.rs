use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quote-scraper")]
#[command(about = "Scrape company name, price and percent change for a list of tickers into a CSV file")]
#[command(version)]
pub struct Cli {
    /// JSON file overriding the builtin symbols, URL template, headers, selectors or output
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the CSV (default: stocks.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ticker symbols to scrape instead of the configured list (e.g. MSFT AAPL)
    pub symbols: Vec<String>,
}
