//! Request descriptors handed to a [`Dispatcher`](crate::dispatcher::Dispatcher).

use freshdesk_core::{Error, QueryParams, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// One outbound API call: method, endpoint path, optional body and query.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Path appended to the base URL, starting with `/`
    pub endpoint: String,
    /// Request payload
    pub body: Option<Body>,
    /// Query-string parameters
    pub query: Option<QueryParams>,
}

/// Request payload encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Sent as `application/json`
    Json(Value),
    /// Sent as `multipart/form-data`
    Multipart(Vec<Part>),
}

impl Request {
    /// Create a request without body or query.
    #[must_use]
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            query: None,
        }
    }

    /// `GET` request.
    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// `POST` request.
    #[must_use]
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// `PUT` request.
    #[must_use]
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    /// `DELETE` request.
    #[must_use]
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if `data` cannot be represented as JSON.
    pub fn json<B>(mut self, data: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(data)
            .map_err(|err| Error::transport(format!("Failed to encode request body: {err}")))?;
        self.body = Some(Body::Json(value));
        Ok(self)
    }

    /// Attach a multipart body.
    #[must_use]
    pub fn multipart(mut self, parts: Vec<Part>) -> Self {
        self.body = Some(Body::Multipart(parts));
        self
    }

    /// Attach query parameters. `None` and empty parameter sets are ignored.
    #[must_use]
    pub fn query(mut self, query: Option<QueryParams>) -> Self {
        self.query = query.filter(|q| !q.is_empty());
        self
    }
}

/// Contents of a multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartContents {
    /// UTF-8 text
    Text(String),
    /// Raw bytes, typically a file attachment
    Bytes(Vec<u8>),
}

/// One field of a multipart form.
///
/// Field names may repeat; Freshdesk expects `attachments[]` once per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Form field name
    pub name: String,
    /// Field contents
    pub contents: PartContents,
    /// File name reported for the field
    pub file_name: Option<String>,
    /// MIME type of the contents
    pub mime_type: Option<String>,
}

impl Part {
    /// Text field.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: PartContents::Text(value.into()),
            file_name: None,
            mime_type: None,
        }
    }

    /// File field.
    #[must_use]
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            contents: PartContents::Bytes(bytes.into()),
            file_name: Some(file_name.into()),
            mime_type: None,
        }
    }

    /// Set the MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub(crate) fn into_form_part(self) -> Result<(String, reqwest::multipart::Part)> {
        let mut part = match self.contents {
            PartContents::Text(text) => reqwest::multipart::Part::text(text),
            PartContents::Bytes(bytes) => reqwest::multipart::Part::bytes(bytes),
        };

        if let Some(file_name) = self.file_name {
            part = part.file_name(file_name);
        }

        if let Some(mime_type) = &self.mime_type {
            part = part.mime_str(mime_type).map_err(|err| {
                Error::transport(format!("Invalid MIME type `{mime_type}`: {err}"))
            })?;
        }

        Ok((self.name, part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_body_is_encoded() {
        let request = Request::put("/tickets/42")
            .json(&json!({"status": 5}))
            .unwrap();

        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.body, Some(Body::Json(json!({"status": 5}))));
        assert!(request.query.is_none());
    }

    #[test]
    fn empty_query_is_dropped() {
        let request = Request::get("/tickets").query(Some(QueryParams::new()));
        assert!(request.query.is_none());

        let request = Request::get("/tickets").query(Some(QueryParams::new().with("page", 2)));
        assert_eq!(request.query.unwrap().get("page"), Some("2"));
    }

    #[test]
    fn unencodable_body_is_rejected() {
        use std::collections::HashMap;

        let mut data = HashMap::new();
        data.insert(vec![1u8], "tuple keys are not valid JSON object keys");

        let err = Request::post("/tickets").json(&data).unwrap_err();
        assert_eq!(err.kind(), freshdesk_core::ErrorKind::Api);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn invalid_mime_type_is_rejected() {
        let part = Part::file("attachments[]", "a.txt", b"hi".to_vec()).with_mime_type("not a mime");
        assert!(part.into_form_part().is_err());
    }

    #[test]
    fn file_part_keeps_metadata() {
        let part = Part::file("attachments[]", "log.txt", b"boom".to_vec()).with_mime_type("text/plain");
        assert_eq!(part.file_name.as_deref(), Some("log.txt"));
        assert_eq!(part.mime_type.as_deref(), Some("text/plain"));
        assert_eq!(part.contents, PartContents::Bytes(b"boom".to_vec()));
    }
}
