//! Configuration for Freshdesk clients.
//!
//! A [`FreshdeskConfig`] carries the credentials, the account domain and the
//! transport options. It is validated once, when the client is built, so a
//! misconfigured client fails before any request is sent.

use crate::client::HttpConfig;
use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;
use url::Url;
use validator::Validate;

/// Host that account subdomains live under.
pub const PLATFORM_HOST: &str = "freshdesk.com";

/// Path prefix of the v2 REST API.
pub const API_PATH: &str = "/api/v2";

/// Password sent alongside the API key in basic authentication.
pub const API_KEY_PASSWORD: &str = "X";

/// Configuration for a Freshdesk client instance.
#[derive(Debug, Validate)]
pub struct FreshdeskConfig {
    /// API key of the agent the client acts as
    api_key: SecretString,

    /// Account subdomain, e.g. `acme` for `acme.freshdesk.com`
    #[validate(length(min = 1, max = 255))]
    domain: String,

    /// Replaces the derived `https://{domain}.freshdesk.com/api/v2` base URL
    #[validate(url)]
    base_url_override: Option<String>,

    /// Transport options
    http: HttpConfig,
}

impl FreshdeskConfig {
    /// Create a configuration from an API key and account domain.
    ///
    /// Nothing is validated until [`validate_required`](Self::validate_required)
    /// runs, which the client does on construction.
    #[must_use]
    pub fn new(api_key: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            domain: domain.into(),
            base_url_override: None,
            http: HttpConfig::default(),
        }
    }

    /// Set the transport options.
    #[must_use]
    pub fn with_http_config(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    /// Send requests to `base_url` instead of the account's public endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// The API key.
    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// The account domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The transport options.
    #[must_use]
    pub fn http(&self) -> &HttpConfig {
        &self.http
    }

    /// Base URL every endpoint path is appended to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.{PLATFORM_HOST}{API_PATH}", self.domain),
        }
    }

    /// Check that the configuration can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the API key or domain is
    /// blank, or the resulting base URL does not parse.
    pub fn validate_required(&self) -> Result<(), Error> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(Error::InvalidConfiguration("API key is empty.".to_string()));
        }

        if self.domain.trim().is_empty() {
            return Err(Error::InvalidConfiguration("Domain is empty.".to_string()));
        }

        if !is_subdomain_label(&self.domain) {
            return Err(Error::InvalidConfiguration(format!(
                "Domain `{}` is not a valid account subdomain.",
                self.domain
            )));
        }

        self.validate()?;

        let url = self.parse_base_url()?;
        if url.scheme() != "https" {
            warn!(base_url = %url, "Freshdesk base URL is not using TLS");
        }

        Ok(())
    }

    /// Parse and validate the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_url())
            .map_err(|e| Error::InvalidConfiguration(format!("Invalid base URL: {e}")))
    }
}

/// A single DNS label: ASCII alphanumerics and inner hyphens.
fn is_subdomain_label(domain: &str) -> bool {
    !domain.starts_with('-')
        && !domain.ends_with('-')
        && domain.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_derived_from_domain() {
        let config = FreshdeskConfig::new("key", "acme");
        assert_eq!(config.base_url(), "https://acme.freshdesk.com/api/v2");
        assert!(config.validate_required().is_ok());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = FreshdeskConfig::new("", "acme")
            .validate_required()
            .unwrap_err();
        assert_eq!(err, Error::InvalidConfiguration("API key is empty.".into()));
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let err = FreshdeskConfig::new("   ", "acme")
            .validate_required()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_empty_domain_rejected() {
        let err = FreshdeskConfig::new("key", "")
            .validate_required()
            .unwrap_err();
        assert_eq!(err, Error::InvalidConfiguration("Domain is empty.".into()));
    }

    #[test]
    fn test_domain_with_host_characters_rejected() {
        for domain in ["evil.example#", "acme.evil.com", "acme/x", "-acme", "acme-", "ac me"] {
            let err = FreshdeskConfig::new("key", domain)
                .validate_required()
                .unwrap_err();
            assert!(
                matches!(err, Error::InvalidConfiguration(_)),
                "domain {domain:?}"
            );
        }
    }

    #[test]
    fn test_hyphenated_domain_accepted() {
        let config = FreshdeskConfig::new("key", "acme-support2");
        assert!(config.validate_required().is_ok());
        assert_eq!(config.base_url(), "https://acme-support2.freshdesk.com/api/v2");
    }

    #[test]
    fn test_base_url_override() {
        let config = FreshdeskConfig::new("key", "acme").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert!(config.validate_required().is_ok());
    }

    #[test]
    fn test_invalid_base_url_override_rejected() {
        let err = FreshdeskConfig::new("key", "acme")
            .with_base_url("not a url")
            .validate_required()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_api_key_not_in_debug_output() {
        let config = FreshdeskConfig::new("super-secret-key", "acme");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
    }

    #[test]
    fn test_parse_base_url() {
        let url = FreshdeskConfig::new("key", "acme").parse_base_url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("acme.freshdesk.com"));
        assert_eq!(url.path(), "/api/v2");
    }

    #[test]
    fn test_with_http_config() {
        let http = HttpConfig::new().with_user_agent("custom/1.0");
        let config = FreshdeskConfig::new("key", "acme").with_http_config(http);
        assert_eq!(config.http().user_agent, "custom/1.0");
    }
}
