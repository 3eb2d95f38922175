//! Error types for Freshdesk operations.
//!
//! Every failure surfaced by the client is classified into exactly one
//! [`Error`] variant. HTTP failures keep the status code and the raw response
//! text so callers can branch on the kind and still inspect what the server
//! said.

use thiserror::Error;

/// Main error type for Freshdesk operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The client was constructed with missing or invalid settings.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// HTTP 401: the API key was rejected.
    #[error("Authentication failed ({status}): {message}")]
    Authentication {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// HTTP 403: the authenticated agent lacks permission.
    #[error("Access denied ({status}): {message}")]
    AccessDenied {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// HTTP 404
    #[error("Not found ({status}): {message}")]
    NotFound {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// HTTP 405
    #[error("Method not allowed ({status}): {message}")]
    MethodNotAllowed {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// HTTP 406
    #[error("Unsupported accept header ({status}): {message}")]
    UnsupportedAcceptHeader {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// HTTP 415
    #[error("Unsupported content type ({status}): {message}")]
    UnsupportedContentType {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// HTTP 400 or 422: one or more fields failed validation.
    #[error("Validation failed ({status}): {message}")]
    Validation {
        /// HTTP status code
        status: u16,
        /// Raw response body, usually listing the offending fields
        message: String,
    },

    /// HTTP 409
    #[error("Conflicting state ({status}): {message}")]
    ConflictingState {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// HTTP 429: the account's hourly API quota is spent.
    #[error("Rate limit exceeded ({status}): {message}")]
    RateLimitExceeded {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// Anything else: unclassified statuses, transport failures and
    /// undecodable payloads. `status` is `None` when no response was received.
    #[error("{}", describe_api_error(.status, .message))]
    Api {
        /// HTTP status code, if a response was received
        status: Option<u16>,
        /// Response body or transport error message
        message: String,
    },
}

/// Discriminator for [`Error`] variants, convenient for matching without
/// destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidConfiguration`]
    InvalidConfiguration,
    /// See [`Error::Authentication`]
    Authentication,
    /// See [`Error::AccessDenied`]
    AccessDenied,
    /// See [`Error::NotFound`]
    NotFound,
    /// See [`Error::MethodNotAllowed`]
    MethodNotAllowed,
    /// See [`Error::UnsupportedAcceptHeader`]
    UnsupportedAcceptHeader,
    /// See [`Error::UnsupportedContentType`]
    UnsupportedContentType,
    /// See [`Error::Validation`]
    Validation,
    /// See [`Error::ConflictingState`]
    ConflictingState,
    /// See [`Error::RateLimitExceeded`]
    RateLimitExceeded,
    /// See [`Error::Api`]
    Api,
}

/// Specialized result type for Freshdesk operations.
pub type Result<T> = std::result::Result<T, Error>;

fn describe_api_error(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("API error ({status}): {message}"),
        None => format!("API error: {message}"),
    }
}

impl Error {
    /// Classify a non-success HTTP status and its response text.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 422 => Self::Validation { status, message },
            401 => Self::Authentication { status, message },
            403 => Self::AccessDenied { status, message },
            404 => Self::NotFound { status, message },
            405 => Self::MethodNotAllowed { status, message },
            406 => Self::UnsupportedAcceptHeader { status, message },
            409 => Self::ConflictingState { status, message },
            415 => Self::UnsupportedContentType { status, message },
            429 => Self::RateLimitExceeded { status, message },
            _ => Self::Api {
                status: Some(status),
                message,
            },
        }
    }

    /// Build a generic error for failures where no response was received.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Api {
            status: None,
            message: message.into(),
        }
    }

    /// Returns the kind discriminator.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::AccessDenied { .. } => ErrorKind::AccessDenied,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MethodNotAllowed { .. } => ErrorKind::MethodNotAllowed,
            Self::UnsupportedAcceptHeader { .. } => ErrorKind::UnsupportedAcceptHeader,
            Self::UnsupportedContentType { .. } => ErrorKind::UnsupportedContentType,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::ConflictingState { .. } => ErrorKind::ConflictingState,
            Self::RateLimitExceeded { .. } => ErrorKind::RateLimitExceeded,
            Self::Api { .. } => ErrorKind::Api,
        }
    }

    /// Returns the HTTP status code, if the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidConfiguration(_) => None,
            Self::Authentication { status, .. }
            | Self::AccessDenied { status, .. }
            | Self::NotFound { status, .. }
            | Self::MethodNotAllowed { status, .. }
            | Self::UnsupportedAcceptHeader { status, .. }
            | Self::UnsupportedContentType { status, .. }
            | Self::Validation { status, .. }
            | Self::ConflictingState { status, .. }
            | Self::RateLimitExceeded { status, .. } => Some(*status),
            Self::Api { status, .. } => *status,
        }
    }

    /// Returns the raw response body or failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidConfiguration(message)
            | Self::Authentication { message, .. }
            | Self::AccessDenied { message, .. }
            | Self::NotFound { message, .. }
            | Self::MethodNotAllowed { message, .. }
            | Self::UnsupportedAcceptHeader { message, .. }
            | Self::UnsupportedContentType { message, .. }
            | Self::Validation { message, .. }
            | Self::ConflictingState { message, .. }
            | Self::RateLimitExceeded { message, .. }
            | Self::Api { message, .. } => message,
        }
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidConfiguration => "INVALID_CONFIGURATION",
            ErrorKind::Authentication => "AUTHENTICATION_FAILED",
            ErrorKind::AccessDenied => "ACCESS_DENIED",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorKind::UnsupportedAcceptHeader => "UNSUPPORTED_ACCEPT_HEADER",
            ErrorKind::UnsupportedContentType => "UNSUPPORTED_CONTENT_TYPE",
            ErrorKind::Validation => "VALIDATION_FAILED",
            ErrorKind::ConflictingState => "CONFLICTING_STATE",
            ErrorKind::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            ErrorKind::Api => "API_ERROR",
        }
    }

    /// Returns true for kinds produced by a 4xx response.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|status| (400..500).contains(&status))
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|status| status.as_u16());
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self::Api { status, message }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidConfiguration(format!("invalid URL: {err}"))
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}
