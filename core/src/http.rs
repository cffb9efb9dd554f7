//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and decodes `HttpResponse` values without
//! ever touching the network — an `HttpTransport` implementation supplied by
//! the caller executes the actual I/O. This separation keeps the core
//! deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved across
//! threads and stored without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient::build_*` methods. `path` is the absolute URL,
/// including the encoded query string when one was supplied.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then passed
/// to `ApiClient::decode_response` for status checking and body decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup, first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the content-type header declares a JSON body.
    pub fn is_json(&self) -> bool {
        self.header("content-type")
            .is_some_and(|v| v.contains("application/json"))
    }

    /// Whether the response is 204 No Content.
    pub fn is_no_content(&self) -> bool {
        self.status == 204
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(headers: Vec<(String, String)>, status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers,
            body: String::new(),
        }
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = response(
            vec![("Content-Type".to_string(), "text/html".to_string())],
            200,
        );
        assert_eq!(resp.header("content-type"), Some("text/html"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("text/html"));
        assert_eq!(resp.header("x-missing"), None);
    }

    #[test]
    fn is_json_matches_content_type_with_charset() {
        let resp = response(
            vec![(
                "content-type".to_string(),
                "application/json; charset=utf-8".to_string(),
            )],
            200,
        );
        assert!(resp.is_json());
    }

    #[test]
    fn is_json_rejects_other_content_types() {
        let resp = response(
            vec![("content-type".to_string(), "text/plain".to_string())],
            200,
        );
        assert!(!resp.is_json());

        let no_header = response(Vec::new(), 200);
        assert!(!no_header.is_json());
    }

    #[test]
    fn no_content_is_status_204_only() {
        assert!(response(Vec::new(), 204).is_no_content());
        assert!(!response(Vec::new(), 200).is_no_content());
    }
}
