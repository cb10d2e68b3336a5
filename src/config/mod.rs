use std::collections::HashMap;
use std::path::PathBuf;

mod loader;
pub mod validator;

pub use loader::load_scrape_config;
pub use validator::validate_scrape_config;

/// Placeholder substituted with the ticker symbol when rendering the quote URL.
pub const SYMBOL_PLACEHOLDER: &str = "{symbol}";

pub const DEFAULT_SYMBOLS: &[&str] = &["MSFT", "IBM", "AAPL", "GOOG", "AMZN"];
pub const DEFAULT_URL_TEMPLATE: &str = "https://finance.yahoo.com/quote/{symbol}/";
pub const DEFAULT_OUTPUT_FILE: &str = "stocks.csv";

/// CSS selectors used to pull the quote fields out of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Scope element; the field selectors are evaluated inside its first match.
    pub container: String,
    pub company: String,
    pub price: String,
    pub change: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: "div.container".to_string(),
            company: "h1".to_string(),
            price: "fin-streamer[data-field='regularMarketPrice']".to_string(),
            change: "fin-streamer[data-field='regularMarketChangePercent']".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub symbols: Vec<String>,
    pub url_template: String,
    pub headers: HashMap<String, String>,
    pub selectors: SelectorConfig,
    pub output: PathBuf,
}

impl ScrapeConfig {
    pub fn builtin() -> Self {
        let headers = HashMap::from([(
            "User-Agent".to_string(),
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
        )]);

        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            headers,
            selectors: SelectorConfig::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Replace the symbol list, keeping the order given by the caller.
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = template.into();
        self
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
