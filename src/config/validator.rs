use reqwest::header::{HeaderName, HeaderValue};
use scraper::Selector;

use crate::error::{AppError, Result};

use super::{ScrapeConfig, SelectorConfig, SYMBOL_PLACEHOLDER};

/// Validate a scrape configuration and surface every problem in one error.
pub fn validate_scrape_config(config: &ScrapeConfig) -> Result<()> {
    let mut issues = Vec::new();

    validate_symbols(config, &mut issues);
    validate_url_template(&config.url_template, &mut issues);
    validate_selectors(&config.selectors, &mut issues);
    validate_headers(config, &mut issues);

    if config.output.as_os_str().is_empty() {
        issues.push("output path must not be empty".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "scrape config invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_symbols(config: &ScrapeConfig, issues: &mut Vec<String>) {
    if config.symbols.is_empty() {
        issues.push("symbol list must not be empty".to_string());
        return;
    }

    let blank = config
        .symbols
        .iter()
        .filter(|symbol| symbol.trim().is_empty())
        .count();
    if blank > 0 {
        issues.push(format!("symbol list contains {blank} blank entries"));
    }
}

fn validate_url_template(template: &str, issues: &mut Vec<String>) {
    if !template.contains(SYMBOL_PLACEHOLDER) {
        issues.push(format!(
            "url_template must contain the {SYMBOL_PLACEHOLDER} placeholder"
        ));
    }
    if !(template.starts_with("http://") || template.starts_with("https://")) {
        issues.push("url_template must be an http(s) URL".to_string());
    }
}

fn validate_selectors(selectors: &SelectorConfig, issues: &mut Vec<String>) {
    let named = [
        ("container", &selectors.container),
        ("company", &selectors.company),
        ("price", &selectors.price),
        ("change", &selectors.change),
    ];

    for (name, selector) in named {
        if let Err(err) = Selector::parse(selector) {
            issues.push(format!("selectors.{name} `{selector}` is not valid CSS: {err}"));
        }
    }
}

fn validate_headers(config: &ScrapeConfig, issues: &mut Vec<String>) {
    for (key, value) in &config.headers {
        if HeaderName::from_bytes(key.as_bytes()).is_err() {
            issues.push(format!("invalid header name `{key}`"));
        }
        // Values with ${VAR} placeholders are checked once expanded.
        if !value.contains("${") && HeaderValue::from_str(value).is_err() {
            issues.push(format!("invalid header value for `{key}`"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_is_valid() {
        validate_scrape_config(&ScrapeConfig::builtin()).expect("builtin should be valid");
    }

    #[test]
    fn rejects_empty_symbol_list() {
        let config = ScrapeConfig::builtin().with_symbols(Vec::<String>::new());

        let err = validate_scrape_config(&config).expect_err("validation should fail");
        assert!(
            err.to_string().contains("must not be empty"),
            "unexpected error message: {err}"
        );
    }

    #[test]
    fn collects_every_issue() {
        let mut config = ScrapeConfig::builtin()
            .with_symbols(["AAPL", "  "])
            .with_url_template("ftp://example.com/quote");
        config.selectors.price = "fin-streamer[".to_string();
        config
            .headers
            .insert("Bad Header".to_string(), "value".to_string());

        let message = validate_scrape_config(&config)
            .expect_err("validation should fail")
            .to_string();

        assert!(message.contains("1 blank entries"), "{message}");
        assert!(message.contains("{symbol} placeholder"), "{message}");
        assert!(message.contains("http(s) URL"), "{message}");
        assert!(message.contains("selectors.price"), "{message}");
        assert!(message.contains("invalid header name"), "{message}");
    }
}
