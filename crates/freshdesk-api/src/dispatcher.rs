//! Request dispatch: the single path every API call takes.
//!
//! [`HttpDispatcher`] turns a [`Request`] into one HTTP exchange and
//! classifies the outcome. Resource handles only see the [`Dispatcher`]
//! trait, which keeps them testable against a fake.

use crate::request::{Body, Part, Request};
use crate::response::ApiResponse;
use async_trait::async_trait;
use freshdesk_core::config::API_KEY_PASSWORD;
use freshdesk_core::{Error, FreshdeskConfig, HttpConfig, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

/// Sends a request and classifies its outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Perform exactly one HTTP exchange for `request`.
    ///
    /// # Errors
    ///
    /// Every failure, whether an error status or a transport problem, is
    /// returned as a classified [`Error`].
    async fn dispatch(&self, request: Request) -> Result<ApiResponse>;
}

/// [`Dispatcher`] backed by a `reqwest` client.
pub struct HttpDispatcher {
    http: Client,
    base_url: String,
    api_key: SecretString,
}

impl HttpDispatcher {
    /// Build a dispatcher from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configuration is
    /// incomplete or the HTTP client cannot be built.
    pub fn new(config: &FreshdeskConfig) -> Result<Self> {
        config.validate_required()?;

        let http = build_http_client(config.http())?;
        let base_url = config.base_url();
        debug!(%base_url, "Freshdesk dispatcher ready");

        Ok(Self {
            http,
            base_url,
            api_key: SecretString::from(config.api_key().expose_secret().to_owned()),
        })
    }

    /// Base URL endpoints are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> Result<Url> {
        let url = format!("{}{endpoint}", self.base_url);
        Url::parse(&url)
            .map_err(|err| Error::transport(format!("Invalid request URL `{url}`: {err}")))
    }
}

impl std::fmt::Debug for HttpDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDispatcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, request: Request) -> Result<ApiResponse> {
        let Request {
            method,
            endpoint,
            body,
            query,
        } = request;

        let url = self.build_url(&endpoint)?;
        let mut builder = self
            .http
            .request(method.clone(), url)
            .basic_auth(self.api_key.expose_secret(), Some(API_KEY_PASSWORD))
            .header(ACCEPT, "application/json");

        if let Some(query) = &query {
            let pairs: Vec<(&str, &str)> = query.iter().collect();
            builder = builder.query(&pairs);
        }

        match body {
            Some(Body::Json(payload)) => builder = builder.json(&payload),
            Some(Body::Multipart(parts)) => builder = builder.multipart(build_form(parts)?),
            None => {}
        }

        info!(%method, endpoint = %endpoint, ?query, "Sending Freshdesk request");

        let response = builder.send().await.map_err(|err| {
            let error = Error::from(err);
            warn!(%method, endpoint = %endpoint, %error, "Freshdesk request failed");
            error
        })?;

        let status = response.status();
        let headers = response.headers().clone();

        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let error = Error::from_status(status.as_u16(), text);
            warn!(
                %method,
                endpoint = %endpoint,
                status = status.as_u16(),
                code = error.error_code(),
                "Freshdesk request rejected"
            );
            return Err(error);
        }

        let text = response.text().await.map_err(|err| {
            let mut error = Error::from(err);
            if let Error::Api { status: code, .. } = &mut error {
                code.get_or_insert(status.as_u16());
            }
            error
        })?;
        let body = decode_body(status, &text)?;
        debug!(%method, endpoint = %endpoint, status = status.as_u16(), "Freshdesk request succeeded");

        Ok(ApiResponse::new(status.as_u16(), headers, body))
    }
}

fn build_http_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .pool_idle_timeout(config.pool_idle_timeout)
        .pool_max_idle_per_host(config.pool_max_idle_per_host);

    if !config.enable_compression {
        builder = builder.no_gzip();
    }

    if !config.default_headers.is_empty() {
        builder = builder.default_headers(default_headers(config)?);
    }

    builder.build().map_err(|err| {
        Error::InvalidConfiguration(format!("Failed to build Freshdesk HTTP client: {err}"))
    })
}

fn default_headers(config: &HttpConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.default_headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            Error::InvalidConfiguration(format!("Invalid header name `{name}`: {err}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|err| {
            Error::InvalidConfiguration(format!("Invalid value for header `{name}`: {err}"))
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

fn build_form(parts: Vec<Part>) -> Result<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        let (name, part) = part.into_form_part()?;
        form = form.part(name, part);
    }
    Ok(form)
}

// DELETE and some PUT endpoints answer 204 with no body.
fn decode_body(status: StatusCode, text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(text).map_err(|err| Error::Api {
        status: Some(status.as_u16()),
        message: format!("Failed to decode response body: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshdesk_core::ErrorKind;
    use serde_json::json;

    #[test]
    fn decode_empty_body_as_null() {
        assert_eq!(decode_body(StatusCode::NO_CONTENT, "").unwrap(), Value::Null);
        assert_eq!(decode_body(StatusCode::OK, "  \n").unwrap(), Value::Null);
    }

    #[test]
    fn decode_json_body() {
        let body = decode_body(StatusCode::OK, r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(body, json!([{"id": 1}, {"id": 2}]));
    }

    #[test]
    fn decode_invalid_body_is_generic_error() {
        let err = decode_body(StatusCode::OK, "<html>maintenance</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn dispatcher_requires_api_key() {
        let err = HttpDispatcher::new(&FreshdeskConfig::new("", "acme")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn dispatcher_uses_derived_base_url() {
        let dispatcher = HttpDispatcher::new(&FreshdeskConfig::new("key", "acme")).unwrap();
        assert_eq!(dispatcher.base_url(), "https://acme.freshdesk.com/api/v2");
        assert_eq!(
            dispatcher.build_url("/tickets/42").unwrap().as_str(),
            "https://acme.freshdesk.com/api/v2/tickets/42"
        );
    }

    #[test]
    fn invalid_default_header_rejected() {
        let http = HttpConfig::new().with_header("bad header", "value");
        let config = FreshdeskConfig::new("key", "acme").with_http_config(http);
        let err = HttpDispatcher::new(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn debug_output_hides_api_key() {
        let dispatcher = HttpDispatcher::new(&FreshdeskConfig::new("secret-key", "acme")).unwrap();
        assert!(!format!("{dispatcher:?}").contains("secret-key"));
    }
}
