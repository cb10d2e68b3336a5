pub mod bootstrap;
pub mod scraper;

pub use bootstrap::run;
pub use scraper::{ScrapeReport, Scraper, SkippedSymbol};
