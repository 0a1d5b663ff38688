//! HTTP response type returned by the session.
//!
//! This module provides the [`HttpResponse`] type carrying the status code,
//! response headers, parsed JSON body, and the continuation URL extracted
//! from the `Link` header. Pagination is driven entirely by that header;
//! the JSON body never embeds a next-page pointer.

use std::collections::HashMap;

use serde_json::Value;

/// A response from the remote service.
///
/// The session constructs one of these for every completed request,
/// regardless of status code. `body` is `None` for empty bodies (204) and
/// for bodies that are not valid JSON.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, lowercased names, possibly multi-valued.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body, if any.
    pub body: Option<Value>,
    /// The absolute URL of the next page, from the `Link` header.
    pub next_link: Option<String>,
}

impl HttpResponse {
    /// Creates a response, extracting the next-page URL from the `Link`
    /// header when present.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Option<Value>) -> Self {
        let next_link = headers
            .get("link")
            .and_then(|values| values.first())
            .and_then(|link| parse_next_link(link));

        Self {
            status,
            headers,
            body,
            next_link,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Extracts a human-readable error message from the response body.
    ///
    /// The service reports errors as `{"message": "..."}`; anything else
    /// falls back to the raw body or the bare status code.
    #[must_use]
    pub fn server_message(&self) -> String {
        match &self.body {
            Some(body) => body
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| body.to_string(), ToString::to_string),
            None => format!("status {}", self.status),
        }
    }
}

/// Parses the `rel="next"` URL out of a `Link` header value.
///
/// The header format is `<url>; rel="next", <url>; rel="prev", ...`.
/// Returns the absolute URL for the `next` relation, if present.
#[must_use]
pub fn parse_next_link(header_value: &str) -> Option<String> {
    for link in header_value.split(',') {
        let link = link.trim();

        let rel = link.split(';').find_map(|part| {
            let part = part.trim();
            part.strip_prefix("rel=").map(|rel| rel.trim_matches('"'))
        });

        if rel == Some("next") {
            let url = link
                .split(';')
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'));
            if let Some(url) = url {
                return Some(url.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_success_for_2xx() {
        for status in [200, 201, 204, 299] {
            let response = HttpResponse::new(status, HashMap::new(), None);
            assert!(response.is_success(), "expected success for {status}");
        }
    }

    #[test]
    fn test_is_success_false_for_4xx_and_5xx() {
        for status in [400, 401, 404, 422, 500, 503] {
            let response = HttpResponse::new(status, HashMap::new(), None);
            assert!(!response.is_success(), "expected failure for {status}");
        }
    }

    #[test]
    fn test_parse_next_link_with_both_relations() {
        let header = r#"<https://example.test/items?page=3>; rel="next", <https://example.test/items?page=1>; rel="prev""#;
        assert_eq!(
            parse_next_link(header),
            Some("https://example.test/items?page=3".to_string())
        );
    }

    #[test]
    fn test_parse_next_link_without_next_relation() {
        let header = r#"<https://example.test/items?page=1>; rel="prev""#;
        assert_eq!(parse_next_link(header), None);
    }

    #[test]
    fn test_new_extracts_next_link_from_headers() {
        let mut headers = HashMap::new();
        headers.insert(
            "link".to_string(),
            vec![r#"<https://example.test/labels?page=2>; rel="next""#.to_string()],
        );

        let response = HttpResponse::new(200, headers, Some(json!([])));
        assert_eq!(
            response.next_link,
            Some("https://example.test/labels?page=2".to_string())
        );
    }

    #[test]
    fn test_server_message_prefers_message_field() {
        let response = HttpResponse::new(422, HashMap::new(), Some(json!({"message": "Validation Failed"})));
        assert_eq!(response.server_message(), "Validation Failed");
    }

    #[test]
    fn test_server_message_falls_back_to_body_then_status() {
        let with_body = HttpResponse::new(500, HashMap::new(), Some(json!({"oops": true})));
        assert_eq!(with_body.server_message(), r#"{"oops":true}"#);

        let without_body = HttpResponse::new(502, HashMap::new(), None);
        assert_eq!(without_body.server_message(), "status 502");
    }
}
