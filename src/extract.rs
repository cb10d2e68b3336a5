//! HTML extraction of quote fields.
//!
//! Selectors are parsed once up front; extraction itself never fails. A field whose
//! selector matches nothing comes back as an empty string.

use scraper::{ElementRef, Html, Selector};

use crate::config::SelectorConfig;
use crate::error::{AppError, Result};
use crate::records::Quote;

pub struct QuoteExtractor {
    container: Selector,
    company: Selector,
    price: Selector,
    change: Selector,
}

impl QuoteExtractor {
    pub fn new(selectors: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&selectors.container)?,
            company: parse_selector(&selectors.company)?,
            price: parse_selector(&selectors.price)?,
            change: parse_selector(&selectors.change)?,
        })
    }

    /// Pull one quote out of a fetched page.
    ///
    /// Fields are read inside the first element matching the container selector,
    /// or from the whole document when no container is present.
    pub fn extract(&self, html: &str) -> Quote {
        let document = Html::parse_document(html);
        let scope = document
            .select(&self.container)
            .next()
            .unwrap_or_else(|| document.root_element());

        Quote {
            company: child_text(scope, &self.company),
            price: child_text(scope, &self.price),
            change: child_text(scope, &self.change),
        }
    }
}

/// Concatenated text of every descendant matching `selector`, trimmed.
fn child_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|err| AppError::Selector {
        selector: selector.to_string(),
        reason: err.to_string(),
    })
}
