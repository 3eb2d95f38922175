//! Outcome of a successful API call.

use freshdesk_core::{Error, Result};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Total number of calls allowed per hour for the account.
pub const RATE_LIMIT_TOTAL_HEADER: &str = "x-ratelimit-total";
/// Calls left in the current hour.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
/// Credits consumed by the request that produced the response.
pub const RATE_LIMIT_USED_HEADER: &str = "x-ratelimit-used-currentrequest";

/// Status, headers and decoded body of one completed request.
///
/// Each call returns its own value, so concurrent calls through the same
/// client never observe each other's responses.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderMap,
    body: Value,
}

/// Rate-limit counters reported by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Hourly allowance
    pub total: Option<u64>,
    /// Calls left this hour
    pub remaining: Option<u64>,
    /// Credits used by this request
    pub used_current_request: Option<u64>,
}

impl ApiResponse {
    /// Build a response value.
    #[must_use]
    pub fn new(status: u16, headers: HeaderMap, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers as returned by the server.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of a header, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Decoded JSON body. Empty bodies decode to `null`.
    #[must_use]
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consume the response and return the body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Deserialize the body into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] carrying the response status if the body does
    /// not match `T`.
    pub fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        T::deserialize(&self.body).map_err(|err| Error::Api {
            status: Some(self.status),
            message: format!("Failed to parse response body: {err}"),
        })
    }

    /// Rate-limit counters from the response headers.
    #[must_use]
    pub fn rate_limit(&self) -> RateLimit {
        let parse = |name: &str| self.header(name).and_then(|v| v.trim().parse::<u64>().ok());
        RateLimit {
            total: parse(RATE_LIMIT_TOTAL_HEADER),
            remaining: parse(RATE_LIMIT_REMAINING_HEADER),
            used_current_request: parse(RATE_LIMIT_USED_HEADER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ticket {
        id: u64,
        subject: String,
    }

    fn response(body: Value) -> ApiResponse {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-total", HeaderValue::from_static("5000"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4998"));
        headers.insert("x-ratelimit-used-currentrequest", HeaderValue::from_static("1"));
        ApiResponse::new(200, headers, body)
    }

    #[test]
    fn typed_body() {
        let resp = response(json!({"id": 7, "subject": "Printer on fire"}));
        let ticket: Ticket = resp.json().unwrap();
        assert_eq!(
            ticket,
            Ticket {
                id: 7,
                subject: "Printer on fire".into()
            }
        );
    }

    #[test]
    fn typed_body_mismatch_keeps_status() {
        let resp = response(json!({"id": "seven"}));
        let err = resp.json::<Ticket>().unwrap_err();
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn rate_limit_headers() {
        let limits = response(Value::Null).rate_limit();
        assert_eq!(limits.total, Some(5000));
        assert_eq!(limits.remaining, Some(4998));
        assert_eq!(limits.used_current_request, Some(1));
    }

    #[test]
    fn missing_rate_limit_headers() {
        let resp = ApiResponse::new(204, HeaderMap::new(), Value::Null);
        assert_eq!(resp.rate_limit(), RateLimit::default());
        assert_eq!(resp.header("x-ratelimit-total"), None);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = response(Value::Null);
        assert_eq!(resp.header("X-RateLimit-Remaining"), Some("4998"));
    }
}
