//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and interprets `HttpResponse` values; the host (the browser's
//! `fetch`, or `ureq` in tests) performs the round-trip. The `Transport`
//! trait is the seam the interceptor drives so the same flow runs in the
//! browser and under native tests.

use std::fmt;

use crate::error::ClientError;

/// HTTP method for a request. The posts endpoint is only ever sent deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the host should do when the server answers with a 3xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectPolicy {
    /// Follow the redirect chain and hand back the final response.
    #[default]
    Follow,
    /// Return the 3xx response itself.
    Manual,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub redirect: RedirectPolicy,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// `status` is the status of the final response after any redirects the
/// host followed.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes an `HttpRequest` on behalf of the core.
///
/// Futures returned here are not required to be `Send`: in the browser they
/// wrap JS promises and run on the page's single thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method: HttpMethod::Delete,
            path: "/posts".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: None,
            redirect: RedirectPolicy::Follow,
        };
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn method_renders_as_wire_token() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn redirects_are_followed_by_default() {
        assert_eq!(RedirectPolicy::default(), RedirectPolicy::Follow);
    }
}
