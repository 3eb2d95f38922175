//! Resource handles.
//!
//! Each handle is a thin declaration: an endpoint path, an injected
//! [`Dispatcher`], and the capability traits from [`capabilities`] it
//! implements. An operation the endpoint does not support is simply not
//! available on the handle.

use crate::dispatcher::Dispatcher;

/// A remote collection reachable at a fixed endpoint.
pub trait Resource: Send + Sync {
    /// Collection path relative to the API base URL, e.g. `/tickets`.
    const ENDPOINT: &'static str;

    /// Dispatcher used for every call made through this handle.
    fn dispatcher(&self) -> &dyn Dispatcher;

    /// Path of a single member of the collection.
    #[must_use]
    fn member_endpoint(id: u64) -> String {
        format!("{}/{id}", Self::ENDPOINT)
    }
}

/// Path of this resource's collection nested under a parent, e.g.
/// `/solutions/categories` + 7 + `/solutions/folders` gives
/// `/solutions/categories/7/folders`.
#[must_use]
pub fn nested_endpoint(parent_endpoint: &str, parent_id: u64, own_endpoint: &str) -> String {
    let segment = own_endpoint
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    format!("{parent_endpoint}/{parent_id}/{segment}")
}

macro_rules! resource {
    ($(#[$meta:meta])* $name:ident => $endpoint:literal) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            dispatcher: ::std::sync::Arc<dyn $crate::dispatcher::Dispatcher>,
        }

        impl $name {
            /// Create a handle that sends its calls through `dispatcher`.
            #[must_use]
            pub fn new(dispatcher: ::std::sync::Arc<dyn $crate::dispatcher::Dispatcher>) -> Self {
                Self { dispatcher }
            }
        }

        impl $crate::resources::Resource for $name {
            const ENDPOINT: &'static str = $endpoint;

            fn dispatcher(&self) -> &dyn $crate::dispatcher::Dispatcher {
                self.dispatcher.as_ref()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("endpoint", &$endpoint)
                    .finish_non_exhaustive()
            }
        }
    };
}

pub mod admin;
pub mod capabilities;
pub mod discussions;
pub mod people;
pub mod solutions;
pub mod tickets;

pub use admin::{BusinessHours, EmailConfigs, Products, SlaPolicies};
pub use discussions::{Comments, Discussions, Forums, Topics};
pub use people::{Agents, Companies, Contacts, Groups};
pub use solutions::{Articles, Folders, Solutions};
pub use tickets::{Conversations, Tickets, TimeEntries};
