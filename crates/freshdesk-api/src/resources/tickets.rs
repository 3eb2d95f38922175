//! Tickets and the records hanging off them.

use super::capabilities::{Create, Delete, List, Update, View};
use super::Resource;
use crate::request::{Part, Request};
use crate::response::ApiResponse;
use freshdesk_core::{QueryParams, Result};
use serde::Serialize;

resource! {
    /// Support tickets.
    Tickets => "/tickets"
}

impl List for Tickets {}
impl Create for Tickets {}
impl View for Tickets {}
impl Update for Tickets {}
impl Delete for Tickets {}

impl Tickets {
    /// Create a ticket with file attachments.
    ///
    /// Fields go in as text parts (`subject`, `email`, `status`, ...) and
    /// each file as an `attachments[]` part.
    pub async fn create_with_attachments(&self, parts: Vec<Part>) -> Result<ApiResponse> {
        self.dispatcher()
            .dispatch(Request::post(Self::ENDPOINT).multipart(parts))
            .await
    }

    /// Restore a deleted ticket.
    pub async fn restore(&self, id: u64) -> Result<ApiResponse> {
        let endpoint = format!("{}/restore", Self::member_endpoint(id));
        self.dispatcher().dispatch(Request::put(endpoint)).await
    }

    /// Custom and default ticket fields.
    pub async fn fields(&self) -> Result<ApiResponse> {
        self.dispatcher()
            .dispatch(Request::get("/ticket_fields"))
            .await
    }

    /// Replies and notes on a ticket.
    pub async fn conversations(&self, id: u64, query: Option<QueryParams>) -> Result<ApiResponse> {
        let endpoint = format!("{}/conversations", Self::member_endpoint(id));
        self.dispatcher()
            .dispatch(Request::get(endpoint).query(query))
            .await
    }

    /// Time logged against a ticket.
    pub async fn time_entries(&self, id: u64) -> Result<ApiResponse> {
        let endpoint = format!("{}/time_entries", Self::member_endpoint(id));
        self.dispatcher().dispatch(Request::get(endpoint)).await
    }

    /// Search with the filter query language, e.g. `"priority:3 AND status:2"`.
    /// The expression is wrapped in double quotes as the API requires.
    pub async fn search(&self, expression: &str, page: Option<u32>) -> Result<ApiResponse> {
        let mut query = QueryParams::new().with("query", format!("\"{expression}\""));
        query.push_opt("page", page);
        self.dispatcher()
            .dispatch(Request::get("/search/tickets").query(Some(query)))
            .await
    }
}

resource! {
    /// Time tracked by agents.
    TimeEntries => "/time_entries"
}

impl List for TimeEntries {}
impl Update for TimeEntries {}
impl Delete for TimeEntries {}

impl TimeEntries {
    /// Log time against a ticket.
    pub async fn create<B>(&self, ticket_id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{}/{ticket_id}/time_entries", Tickets::ENDPOINT);
        let request = Request::post(endpoint).json(data)?;
        self.dispatcher().dispatch(request).await
    }

    /// Start or stop the timer of a time entry.
    pub async fn toggle_timer(&self, id: u64) -> Result<ApiResponse> {
        let endpoint = format!("{}/toggle_timer", Self::member_endpoint(id));
        self.dispatcher().dispatch(Request::put(endpoint)).await
    }
}

resource! {
    /// Ticket replies and notes.
    Conversations => "/conversations"
}

impl Update for Conversations {}
impl Delete for Conversations {}

impl Conversations {
    /// Reply to a ticket.
    pub async fn reply<B>(&self, ticket_id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{}/{ticket_id}/reply", Tickets::ENDPOINT);
        let request = Request::post(endpoint).json(data)?;
        self.dispatcher().dispatch(request).await
    }

    /// Add a note to a ticket.
    pub async fn note<B>(&self, ticket_id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{}/{ticket_id}/notes", Tickets::ENDPOINT);
        let request = Request::post(endpoint).json(data)?;
        self.dispatcher().dispatch(request).await
    }
}
