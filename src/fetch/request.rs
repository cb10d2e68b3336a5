use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{AppError, Context};

use super::FetchResult;

/// Render the quote URL for one symbol. Only the `{symbol}` placeholder is recognised.
pub fn prepare_url(template: &str, symbol: &str) -> FetchResult<String> {
    let mut result = String::with_capacity(template.len() + symbol.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            let mut key = String::new();
            let mut closed = false;
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == '}' {
                    closed = true;
                    break;
                }
                key.push(next);
            }

            if !closed {
                return Err(AppError::message(format!(
                    "Unterminated placeholder in template: {{{key}"
                )));
            }

            match key.as_str() {
                "symbol" => result.push_str(symbol),
                "" => {
                    return Err(AppError::message(
                        "Encountered empty placeholder `{}` in template",
                    ))
                }
                other => {
                    return Err(AppError::message(format!(
                        "No replacement provided for placeholder `{}` in template",
                        other
                    )))
                }
            }
        } else {
            result.push(ch);
        }
    }

    Ok(result)
}

/// Expand `${VAR}` references against the process environment.
pub fn expand_env_vars(value: &str) -> FetchResult<String> {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut name = String::new();
            let mut closed = false;
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == '}' {
                    closed = true;
                    break;
                }
                name.push(next);
            }

            if !closed {
                return Err(AppError::message(
                    "Unterminated environment placeholder in header",
                ));
            }

            if name.is_empty() {
                return Err(AppError::message(
                    "Encountered empty environment placeholder in header",
                ));
            }

            let value = std::env::var(&name).with_context(|| {
                format!(
                    "Environment variable {} required by request header is not set",
                    name
                )
            })?;
            result.push_str(&value);
        } else {
            result.push(ch);
        }
    }

    Ok(result)
}

pub fn build_headers(headers: &HashMap<String, String>) -> FetchResult<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .with_context(|| format!("Invalid header name: {}", key))?;
        let expanded = expand_env_vars(value)?;
        let header_value = HeaderValue::from_str(&expanded)
            .with_context(|| format!("Invalid header value for {}", key))?;
        map.insert(name, header_value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_symbol_into_template() {
        let url = prepare_url("https://finance.yahoo.com/quote/{symbol}/", "MSFT").unwrap();
        assert_eq!(url, "https://finance.yahoo.com/quote/MSFT/");
    }

    #[test]
    fn rejects_unknown_placeholder() {
        let err = prepare_url("https://example.com/{region}/{symbol}", "IBM").unwrap_err();
        assert!(err.to_string().contains("`region`"), "{err}");
    }

    #[test]
    fn rejects_unterminated_placeholder() {
        let err = prepare_url("https://example.com/{symbol", "IBM").unwrap_err();
        assert!(err.to_string().contains("Unterminated"), "{err}");
    }

    #[test]
    fn expands_environment_in_headers() {
        std::env::set_var("QUOTE_SCRAPER_TEST_TOKEN", "abc123");
        let headers = HashMap::from([(
            "Authorization".to_string(),
            "Bearer ${QUOTE_SCRAPER_TEST_TOKEN}".to_string(),
        )]);

        let map = build_headers(&headers).unwrap();
        assert_eq!(map["authorization"], "Bearer abc123");
    }

    #[test]
    fn trailing_placeholder_is_unterminated() {
        let err = expand_env_vars("Bearer ${").unwrap_err();
        assert!(err.to_string().contains("Unterminated"), "{err}");

        let err = expand_env_vars("Bearer ${}").unwrap_err();
        assert!(err.to_string().contains("empty"), "{err}");
    }

    #[test]
    fn missing_environment_variable_is_an_error() {
        let err = expand_env_vars("${QUOTE_SCRAPER_SURELY_UNSET_VAR}").unwrap_err();
        assert!(err.to_string().contains("QUOTE_SCRAPER_SURELY_UNSET_VAR"));
    }
}
