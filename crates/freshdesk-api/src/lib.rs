//! Asynchronous client for the Freshdesk v2 REST API.
//!
//! [`Freshdesk`] exposes one handle per resource. Handles implement the
//! capability traits in [`prelude`] for the operations their endpoint
//! supports; every call performs exactly one HTTP request and returns an
//! [`ApiResponse`] or a classified [`Error`].

#![deny(missing_docs)]

pub mod client;
pub mod dispatcher;
pub mod request;
pub mod resources;
pub mod response;

pub use client::Freshdesk;
pub use dispatcher::{Dispatcher, HttpDispatcher};
pub use freshdesk_core::{Error, ErrorKind, FreshdeskConfig, HttpConfig, QueryParams};
pub use request::{Body, Part, PartContents, Request};
pub use response::{ApiResponse, RateLimit};

/// Capability traits, needed in scope to call the generic operations.
pub mod prelude {
    pub use crate::resources::capabilities::{
        CategoryScoped, Create, Delete, FolderScoped, List, Monitor, Update, View,
    };
    pub use crate::resources::Resource;
}

/// Convenient result alias that reuses the shared Freshdesk error type.
pub type Result<T> = freshdesk_core::Result<T>;
