//! Client facade.

use crate::dispatcher::{Dispatcher, HttpDispatcher};
use crate::request::Request;
use crate::resources::{
    Agents, Articles, BusinessHours, Comments, Companies, Contacts, Conversations, Discussions,
    EmailConfigs, Folders, Forums, Groups, Products, SlaPolicies, Solutions, Tickets, TimeEntries,
    Topics,
};
use crate::response::ApiResponse;
use freshdesk_core::{FreshdeskConfig, HttpConfig, Result};
use std::sync::Arc;
use tracing::info;

/// Entry point to the Freshdesk API.
///
/// Every resource handle is created once, when the client is built, and
/// shares the client's dispatcher.
///
/// ```no_run
/// use freshdesk_api::prelude::*;
/// use freshdesk_api::Freshdesk;
///
/// # async fn run() -> freshdesk_api::Result<()> {
/// let freshdesk = Freshdesk::from_credentials("api-key", "acme")?;
/// let ticket = freshdesk.tickets().view(42, None).await?;
/// println!("{}", ticket.body()["subject"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Freshdesk {
    dispatcher: Arc<dyn Dispatcher>,

    agents: Agents,
    companies: Companies,
    contacts: Contacts,
    groups: Groups,

    tickets: Tickets,
    time_entries: TimeEntries,
    conversations: Conversations,

    discussions: Discussions,
    forums: Forums,
    topics: Topics,
    comments: Comments,

    solutions: Solutions,
    folders: Folders,
    articles: Articles,

    products: Products,
    email_configs: EmailConfigs,
    sla_policies: SlaPolicies,
    business_hours: BusinessHours,
}

impl Freshdesk {
    /// Build a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`](freshdesk_core::Error::InvalidConfiguration)
    /// if the API key or domain is blank, or the HTTP client cannot be built.
    pub fn new(config: FreshdeskConfig) -> Result<Self> {
        let dispatcher = HttpDispatcher::new(&config)?;
        info!(base_url = dispatcher.base_url(), "Freshdesk client created");
        Ok(Self::with_dispatcher(Arc::new(dispatcher)))
    }

    /// Build a client with default transport options.
    ///
    /// # Errors
    ///
    /// See [`Freshdesk::new`].
    pub fn from_credentials(api_key: impl Into<String>, domain: impl Into<String>) -> Result<Self> {
        Self::new(FreshdeskConfig::new(api_key, domain))
    }

    /// Build a client with custom transport options.
    ///
    /// # Errors
    ///
    /// See [`Freshdesk::new`].
    pub fn with_options(
        api_key: impl Into<String>,
        domain: impl Into<String>,
        http: HttpConfig,
    ) -> Result<Self> {
        Self::new(FreshdeskConfig::new(api_key, domain).with_http_config(http))
    }

    /// Build a client around any dispatcher.
    #[must_use]
    pub fn with_dispatcher(dispatcher: Arc<dyn Dispatcher>) -> Self {
        let d = || Arc::clone(&dispatcher);
        Self {
            agents: Agents::new(d()),
            companies: Companies::new(d()),
            contacts: Contacts::new(d()),
            groups: Groups::new(d()),

            tickets: Tickets::new(d()),
            time_entries: TimeEntries::new(d()),
            conversations: Conversations::new(d()),

            discussions: Discussions::new(d()),
            forums: Forums::new(d()),
            topics: Topics::new(d()),
            comments: Comments::new(d()),

            solutions: Solutions::new(d()),
            folders: Folders::new(d()),
            articles: Articles::new(d()),

            products: Products::new(d()),
            email_configs: EmailConfigs::new(d()),
            sla_policies: SlaPolicies::new(d()),
            business_hours: BusinessHours::new(d()),

            dispatcher,
        }
    }

    /// Send a hand-built request, for endpoints without a typed handle.
    ///
    /// # Errors
    ///
    /// Returns the classified error for the failed exchange.
    pub async fn request(&self, request: Request) -> Result<ApiResponse> {
        self.dispatcher.dispatch(request).await
    }

    /// Agents.
    #[must_use]
    pub fn agents(&self) -> &Agents {
        &self.agents
    }

    /// Companies.
    #[must_use]
    pub fn companies(&self) -> &Companies {
        &self.companies
    }

    /// Contacts.
    #[must_use]
    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    /// Agent groups.
    #[must_use]
    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    /// Tickets.
    #[must_use]
    pub fn tickets(&self) -> &Tickets {
        &self.tickets
    }

    /// Time entries.
    #[must_use]
    pub fn time_entries(&self) -> &TimeEntries {
        &self.time_entries
    }

    /// Ticket conversations.
    #[must_use]
    pub fn conversations(&self) -> &Conversations {
        &self.conversations
    }

    /// Forum categories.
    #[must_use]
    pub fn discussions(&self) -> &Discussions {
        &self.discussions
    }

    /// Forums.
    #[must_use]
    pub fn forums(&self) -> &Forums {
        &self.forums
    }

    /// Forum topics.
    #[must_use]
    pub fn topics(&self) -> &Topics {
        &self.topics
    }

    /// Topic comments.
    #[must_use]
    pub fn comments(&self) -> &Comments {
        &self.comments
    }

    /// Solution categories.
    #[must_use]
    pub fn solutions(&self) -> &Solutions {
        &self.solutions
    }

    /// Solution folders.
    #[must_use]
    pub fn folders(&self) -> &Folders {
        &self.folders
    }

    /// Solution articles.
    #[must_use]
    pub fn articles(&self) -> &Articles {
        &self.articles
    }

    /// Products.
    #[must_use]
    pub fn products(&self) -> &Products {
        &self.products
    }

    /// Email configs.
    #[must_use]
    pub fn email_configs(&self) -> &EmailConfigs {
        &self.email_configs
    }

    /// SLA policies.
    #[must_use]
    pub fn sla_policies(&self) -> &SlaPolicies {
        &self.sla_policies
    }

    /// Business hours.
    #[must_use]
    pub fn business_hours(&self) -> &BusinessHours {
        &self.business_hours
    }
}

impl std::fmt::Debug for Freshdesk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Freshdesk").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::MockDispatcher;
    use crate::prelude::*;
    use freshdesk_core::ErrorKind;
    use reqwest::header::HeaderMap;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn empty_api_key_is_rejected() {
        let err = Freshdesk::from_credentials("", "acme").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn empty_domain_is_rejected() {
        let err = Freshdesk::from_credentials("key", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn construction_with_options() {
        let http = HttpConfig::new().with_user_agent("helpdesk-sync/1.0");
        assert!(Freshdesk::with_options("key", "acme", http).is_ok());
    }

    #[tokio::test]
    async fn handles_share_the_dispatcher() {
        let mut mock = MockDispatcher::new();
        mock.expect_dispatch()
            .times(3)
            .returning(|req| Ok(ApiResponse::new(200, HeaderMap::new(), json!(req.endpoint))));

        let freshdesk = Freshdesk::with_dispatcher(Arc::new(mock));
        let ticket = freshdesk.tickets().view(1, None).await.unwrap();
        let folders = freshdesk.folders().for_category(7, None).await.unwrap();
        let products = freshdesk.products().all(None).await.unwrap();

        assert_eq!(ticket.body(), &json!("/tickets/1"));
        assert_eq!(folders.body(), &json!("/solutions/categories/7/folders"));
        assert_eq!(products.body(), &json!("/products"));
    }

    #[tokio::test]
    async fn raw_request_goes_through_dispatcher() {
        let mut mock = MockDispatcher::new();
        mock.expect_dispatch()
            .withf(|req| req.method == Method::GET && req.endpoint == "/settings/helpdesk")
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, HeaderMap::new(), json!({"primary_language": "en"}))));

        let freshdesk = Freshdesk::with_dispatcher(Arc::new(mock));
        let response = freshdesk
            .request(Request::get("/settings/helpdesk"))
            .await
            .unwrap();
        assert_eq!(response.body()["primary_language"], "en");
    }
}
