use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Context, Result};

pub const CSV_HEADER: [&str; 3] = ["Company", "Price", "Change"];

/// The three text fields scraped from one quote page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Change")]
    pub change: String,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{company: {}, price: {}, change: {}}}",
            self.company, self.price, self.change
        )
    }
}

/// Ordered collection of scraped quotes plus CSV persistence.
#[derive(Debug, Default)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Write the header and one row per quote, truncating any existing file.
    pub fn save_to_csv<P: AsRef<Path>>(&self, file_path: P) -> Result<()> {
        let path = file_path.as_ref();
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create CSV file {}", path.display()))?;

        writer.write_record(CSV_HEADER)?;
        for quote in &self.quotes {
            writer.write_record([&quote.company, &quote.price, &quote.change])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Load a file produced by `save_to_csv` back into memory.
    pub fn load_from_csv<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let path = file_path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

        let headers = reader.headers()?.clone();
        if headers.iter().ne(CSV_HEADER) {
            return Err(AppError::message(format!(
                "Unexpected CSV header in {}: {:?}",
                path.display(),
                headers
            )));
        }

        let mut quotes = Vec::new();
        for result in reader.deserialize() {
            let quote: Quote = result.context("Failed to read CSV record")?;
            quotes.push(quote);
        }

        Ok(Self::new(quotes))
    }
}

impl<'a> IntoIterator for &'a QuoteBook {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn quote(company: &str, price: &str, change: &str) -> Quote {
        Quote {
            company: company.to_string(),
            price: price.to_string(),
            change: change.to_string(),
        }
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stocks.csv");
        let book = QuoteBook::new(vec![
            quote("Microsoft Corporation (MSFT)", "415.26", "(+0.76%)"),
            quote("International Business Machines Corporation (IBM)", "183.01", "(-0.12%)"),
        ]);

        book.save_to_csv(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Company,Price,Change\n\
             Microsoft Corporation (MSFT),415.26,(+0.76%)\n\
             International Business Machines Corporation (IBM),183.01,(-0.12%)\n"
        );
    }

    #[test]
    fn empty_book_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stocks.csv");

        QuoteBook::default().save_to_csv(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Company,Price,Change\n");
    }

    #[test]
    fn saving_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stocks.csv");
        fs::write(&path, "stale,data,here\nmore,stale,rows\n").unwrap();

        QuoteBook::new(vec![quote("Amazon.com, Inc. (AMZN)", "178.22", "")])
            .save_to_csv(&path)
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Company,Price,Change\n\"Amazon.com, Inc. (AMZN)\",178.22,\n"
        );
    }

    #[test]
    fn reloads_saved_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stocks.csv");
        let book = QuoteBook::new(vec![quote("Alphabet \"Class C\"", "", "(+1.01%)")]);
        book.save_to_csv(&path).unwrap();

        let loaded = QuoteBook::load_from_csv(&path).unwrap();

        assert_eq!(loaded.quotes(), book.quotes());
    }

    #[test]
    fn rejects_foreign_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.csv");
        fs::write(&path, "market,stockName\nCN,foo\n").unwrap();

        let err = QuoteBook::load_from_csv(&path).unwrap_err();
        assert!(err.to_string().contains("Unexpected CSV header"), "{err}");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("stocks.csv");

        assert!(QuoteBook::default().save_to_csv(&path).is_err());
    }
}
