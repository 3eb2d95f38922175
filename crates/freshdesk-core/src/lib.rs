//! # freshdesk-core
//!
//! Core types shared by the Freshdesk API client.
//!
//! This crate holds everything that does not touch the network: the error
//! taxonomy, client configuration, transport options and the query-string
//! builder.
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP status code classification
//! - [`config`] - Credentials, domain and base URL derivation
//! - [`client`] - HTTP transport options
//! - [`query`] - Query parameter builder

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;

// Re-export commonly used types
pub use client::HttpConfig;
pub use config::FreshdeskConfig;
pub use error::{Error, ErrorKind, Result};
pub use query::QueryParams;
