//! Agents, companies, contacts and groups.

use super::capabilities::{Create, Delete, List, Update, View};
use super::Resource;
use crate::request::Request;
use crate::response::ApiResponse;
use freshdesk_core::Result;
use serde::Serialize;

resource! {
    /// Helpdesk agents.
    Agents => "/agents"
}

impl List for Agents {}
impl View for Agents {}
impl Update for Agents {}
impl Delete for Agents {}

impl Agents {
    /// The agent whose API key the client uses.
    pub async fn current(&self) -> Result<ApiResponse> {
        let endpoint = format!("{}/me", Self::ENDPOINT);
        self.dispatcher().dispatch(Request::get(endpoint)).await
    }
}

resource! {
    /// Customer companies.
    Companies => "/companies"
}

impl List for Companies {}
impl Create for Companies {}
impl View for Companies {}
impl Update for Companies {}
impl Delete for Companies {}

impl Companies {
    /// Custom and default company fields.
    pub async fn fields(&self) -> Result<ApiResponse> {
        self.dispatcher()
            .dispatch(Request::get("/company_fields"))
            .await
    }
}

resource! {
    /// Customer contacts (requesters).
    Contacts => "/contacts"
}

impl List for Contacts {}
impl Create for Contacts {}
impl View for Contacts {}
impl Update for Contacts {}
impl Delete for Contacts {}

impl Contacts {
    /// Convert a contact into an agent.
    pub async fn make_agent<B>(&self, id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{}/make_agent", Self::member_endpoint(id));
        let request = Request::put(endpoint).json(data)?;
        self.dispatcher().dispatch(request).await
    }

    /// Custom and default contact fields.
    pub async fn fields(&self) -> Result<ApiResponse> {
        self.dispatcher()
            .dispatch(Request::get("/contact_fields"))
            .await
    }
}

resource! {
    /// Agent groups.
    Groups => "/groups"
}

impl List for Groups {}
impl Create for Groups {}
impl View for Groups {}
impl Update for Groups {}
impl Delete for Groups {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::MockDispatcher;
    use reqwest::header::HeaderMap;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::Arc;

    fn dispatcher(method: Method, endpoint: &'static str) -> Arc<MockDispatcher> {
        let mut mock = MockDispatcher::new();
        mock.expect_dispatch()
            .withf(move |req| req.method == method && req.endpoint == endpoint)
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, HeaderMap::new(), json!({}))));
        Arc::new(mock)
    }

    #[tokio::test]
    async fn current_agent() {
        Agents::new(dispatcher(Method::GET, "/agents/me"))
            .current()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn company_fields() {
        Companies::new(dispatcher(Method::GET, "/company_fields"))
            .fields()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn contact_fields() {
        Contacts::new(dispatcher(Method::GET, "/contact_fields"))
            .fields()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn make_agent_puts_to_member() {
        Contacts::new(dispatcher(Method::PUT, "/contacts/12/make_agent"))
            .make_agent(12, &json!({"occasional": false}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn groups_view() {
        Groups::new(dispatcher(Method::GET, "/groups/5"))
            .view(5, None)
            .await
            .unwrap();
    }
}
