//! Community forums: categories, forums, topics and comments.

use super::capabilities::{Create, Delete, List, Monitor, Update, View};
use super::Resource;
use crate::request::Request;
use crate::response::ApiResponse;
use freshdesk_core::{QueryParams, Result};
use serde::Serialize;

resource! {
    /// Forum categories.
    Discussions => "/discussions/categories"
}

impl List for Discussions {}
impl Create for Discussions {}
impl View for Discussions {}
impl Update for Discussions {}
impl Delete for Discussions {}

impl Discussions {
    /// Forums in a category.
    pub async fn forums(&self, id: u64, query: Option<QueryParams>) -> Result<ApiResponse> {
        let endpoint = format!("{}/forums", Self::member_endpoint(id));
        self.dispatcher()
            .dispatch(Request::get(endpoint).query(query))
            .await
    }
}

resource! {
    /// Forums.
    Forums => "/discussions/forums"
}

impl View for Forums {}
impl Update for Forums {}
impl Delete for Forums {}
impl Monitor for Forums {}

impl Forums {
    /// Create a forum in a category.
    pub async fn create<B>(&self, category_id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{}/forums", Discussions::member_endpoint(category_id));
        let request = Request::post(endpoint).json(data)?;
        self.dispatcher().dispatch(request).await
    }

    /// Topics in a forum.
    pub async fn topics(&self, id: u64, query: Option<QueryParams>) -> Result<ApiResponse> {
        let endpoint = format!("{}/topics", Self::member_endpoint(id));
        self.dispatcher()
            .dispatch(Request::get(endpoint).query(query))
            .await
    }
}

resource! {
    /// Forum topics.
    Topics => "/discussions/topics"
}

impl View for Topics {}
impl Update for Topics {}
impl Delete for Topics {}
impl Monitor for Topics {}

impl Topics {
    /// Create a topic in a forum.
    pub async fn create<B>(&self, forum_id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{}/topics", Forums::member_endpoint(forum_id));
        let request = Request::post(endpoint).json(data)?;
        self.dispatcher().dispatch(request).await
    }

    /// Comments on a topic.
    pub async fn comments(&self, id: u64, query: Option<QueryParams>) -> Result<ApiResponse> {
        let endpoint = format!("{}/comments", Self::member_endpoint(id));
        self.dispatcher()
            .dispatch(Request::get(endpoint).query(query))
            .await
    }
}

resource! {
    /// Comments on forum topics.
    Comments => "/discussions/comments"
}

impl Update for Comments {}
impl Delete for Comments {}

impl Comments {
    /// Comment on a topic.
    pub async fn create<B>(&self, topic_id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{}/comments", Topics::member_endpoint(topic_id));
        let request = Request::post(endpoint).json(data)?;
        self.dispatcher().dispatch(request).await
    }
}
