//! Response classification for the catalog search endpoint

use super::CatalogError;
use crate::network::HttpResponse;
use serde::Deserialize;
use serde_json::Value;

/// A catalog item as returned by the API. The schema is the server's
/// business; items are carried as opaque key/value structures.
pub type Item = serde_json::Map<String, Value>;

/// Payload of a successful (HTTP 200) catalog response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogPage {
    /// Total number of items matching the search
    pub items_count: u64,
    /// Items on this page, in server order
    pub items: Vec<Item>,
}

/// Classified outcome of one catalog request
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogResponse {
    /// HTTP 200 with a parseable catalog page
    Success(CatalogPage),
    /// Any other status, carried with the raw body
    Failure { status_code: u16, body_text: String },
}

impl CatalogResponse {
    /// First item of a successful page, if any
    pub fn first_item(&self) -> Option<&Item> {
        match self {
            Self::Success(page) => page.items.first(),
            Self::Failure { .. } => None,
        }
    }

    /// Render the two-line summary the binary prints
    pub fn summary(&self) -> String {
        match self {
            Self::Success(page) => {
                let first = match page.items.first() {
                    Some(item) => Value::Object(item.clone()).to_string(),
                    None => "none".to_string(),
                };
                format!("items found: {}\nfirst item: {}", page.items_count, first)
            }
            Self::Failure {
                status_code,
                body_text,
            } => {
                format!("status code: {}\nresponse body: {}", status_code, body_text)
            }
        }
    }
}

/// Classify a transport-level response.
///
/// A 200 parses into a catalog page; anything else is data, carried as
/// `Failure` with the raw body. A 200 whose body is not the expected
/// shape (not JSON, or missing `items_count`/`items`) is a
/// `MalformedBody` error rather than a crash.
pub fn interpret(response: HttpResponse) -> Result<CatalogResponse, CatalogError> {
    if response.status != 200 {
        return Ok(CatalogResponse::Failure {
            status_code: response.status,
            body_text: response.text,
        });
    }

    let page: CatalogPage = serde_json::from_str(&response.text)?;
    Ok(CatalogResponse::Success(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn http(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: HashMap::new(),
            text: body.to_string(),
            url: "https://www.vinted.fr/api/v2/catalog/items".to_string(),
        }
    }

    #[test]
    fn test_ok_body_parses_into_page() {
        let body = json!({"items_count": 2, "items": [{"id": 1}, {"id": 2}]}).to_string();
        match interpret(http(200, &body)).unwrap() {
            CatalogResponse::Success(page) => {
                assert_eq!(page.items_count, 2);
                assert_eq!(page.items.len(), 2);
                assert_eq!(page.items[0].get("id"), Some(&json!(1)));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_success_summary_shows_first_item() {
        let body = json!({"items_count": 2, "items": [{"id": 1}, {"id": 2}]}).to_string();
        let outcome = interpret(http(200, &body)).unwrap();
        assert_eq!(outcome.summary(), "items found: 2\nfirst item: {\"id\":1}");
    }

    #[test]
    fn test_empty_page_summary_uses_placeholder() {
        let outcome = interpret(http(200, r#"{"items_count": 0, "items": []}"#)).unwrap();
        assert!(outcome.first_item().is_none());
        assert_eq!(outcome.summary(), "items found: 0\nfirst item: none");
    }

    #[test]
    fn test_non_success_status_is_data_not_error() {
        let outcome = interpret(http(403, "Forbidden")).unwrap();
        assert_eq!(
            outcome,
            CatalogResponse::Failure {
                status_code: 403,
                body_text: "Forbidden".to_string(),
            }
        );
        assert_eq!(outcome.summary(), "status code: 403\nresponse body: Forbidden");
    }

    #[test]
    fn test_html_body_on_200_is_malformed() {
        let err = interpret(http(200, "<html>captcha wall</html>")).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedBody(_)));
    }

    #[test]
    fn test_missing_fields_on_200_are_malformed() {
        let err = interpret(http(200, r#"{"items": []}"#)).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedBody(_)));
    }
}
