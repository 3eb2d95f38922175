//! Capability traits composed by resource handles.
//!
//! Every method is implemented once here against [`Resource::ENDPOINT`] and
//! the handle's dispatcher; a handle opts in with an empty `impl`.

use super::{nested_endpoint, Resource};
use crate::request::Request;
use crate::response::ApiResponse;
use async_trait::async_trait;
use freshdesk_core::{QueryParams, Result};
use serde::Serialize;

/// `GET {endpoint}`
#[async_trait]
pub trait List: Resource {
    /// List the collection.
    async fn all(&self, query: Option<QueryParams>) -> Result<ApiResponse> {
        self.dispatcher()
            .dispatch(Request::get(Self::ENDPOINT).query(query))
            .await
    }
}

/// `GET {endpoint}/{id}`
#[async_trait]
pub trait View: Resource {
    /// Fetch one member. Use the `include` query parameter to embed related
    /// records; each include costs an extra API credit.
    async fn view(&self, id: u64, query: Option<QueryParams>) -> Result<ApiResponse> {
        self.dispatcher()
            .dispatch(Request::get(Self::member_endpoint(id)).query(query))
            .await
    }
}

/// `POST {endpoint}`
#[async_trait]
pub trait Create: Resource {
    /// Create a member from `data`.
    async fn create<B>(&self, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = Request::post(Self::ENDPOINT).json(data)?;
        self.dispatcher().dispatch(request).await
    }
}

/// `PUT {endpoint}/{id}`
#[async_trait]
pub trait Update: Resource {
    /// Apply the fields in `data` to a member.
    async fn update<B>(&self, id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = Request::put(Self::member_endpoint(id)).json(data)?;
        self.dispatcher().dispatch(request).await
    }
}

/// `DELETE {endpoint}/{id}`
#[async_trait]
pub trait Delete: Resource {
    /// Delete a member.
    async fn delete(&self, id: u64) -> Result<ApiResponse> {
        self.dispatcher()
            .dispatch(Request::delete(Self::member_endpoint(id)))
            .await
    }
}

/// Resources that live under a parent category.
#[async_trait]
pub trait CategoryScoped: Resource {
    /// Collection path of the parent categories.
    const CATEGORY_ENDPOINT: &'static str;

    /// `GET {category_endpoint}/{id}/{last segment of endpoint}`
    async fn for_category(&self, category_id: u64, query: Option<QueryParams>) -> Result<ApiResponse> {
        let endpoint = nested_endpoint(Self::CATEGORY_ENDPOINT, category_id, Self::ENDPOINT);
        self.dispatcher()
            .dispatch(Request::get(endpoint).query(query))
            .await
    }

    /// `POST {category_endpoint}/{id}`
    async fn create<B>(&self, category_id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + Sync + ?Sized,
    {
        let endpoint = format!("{}/{category_id}", Self::CATEGORY_ENDPOINT);
        let request = Request::post(endpoint).json(data)?;
        self.dispatcher().dispatch(request).await
    }
}

/// Resources that live under a parent folder.
#[async_trait]
pub trait FolderScoped: Resource {
    /// Collection path of the parent folders.
    const FOLDER_ENDPOINT: &'static str;

    /// `GET {folder_endpoint}/{id}/{last segment of endpoint}`
    async fn for_folder(&self, folder_id: u64, query: Option<QueryParams>) -> Result<ApiResponse> {
        let endpoint = nested_endpoint(Self::FOLDER_ENDPOINT, folder_id, Self::ENDPOINT);
        self.dispatcher()
            .dispatch(Request::get(endpoint).query(query))
            .await
    }

    /// `POST {folder_endpoint}/{id}`
    async fn create<B>(&self, folder_id: u64, data: &B) -> Result<ApiResponse>
    where
        B: Serialize + Sync + ?Sized,
    {
        let endpoint = format!("{}/{folder_id}", Self::FOLDER_ENDPOINT);
        let request = Request::post(endpoint).json(data)?;
        self.dispatcher().dispatch(request).await
    }
}

/// Following a forum or topic to be notified of new posts.
#[async_trait]
pub trait Monitor: Resource {
    /// `POST {endpoint}/{id}/follow`, for `user_id` or the current agent.
    async fn monitor(&self, id: u64, user_id: Option<u64>) -> Result<ApiResponse> {
        let mut request = Request::post(follow_endpoint::<Self>(id));
        if let Some(user_id) = user_id {
            request = request.json(&serde_json::json!({ "user_id": user_id }))?;
        }
        self.dispatcher().dispatch(request).await
    }

    /// `DELETE {endpoint}/{id}/follow`
    async fn unmonitor(&self, id: u64, user_id: Option<u64>) -> Result<ApiResponse> {
        let request = Request::delete(follow_endpoint::<Self>(id)).query(user_query(user_id));
        self.dispatcher().dispatch(request).await
    }

    /// `GET {endpoint}/{id}/follow`; answers 404 when not followed.
    async fn monitor_status(&self, id: u64, user_id: Option<u64>) -> Result<ApiResponse> {
        let request = Request::get(follow_endpoint::<Self>(id)).query(user_query(user_id));
        self.dispatcher().dispatch(request).await
    }
}

fn follow_endpoint<R: Resource + ?Sized>(id: u64) -> String {
    format!("{}/follow", R::member_endpoint(id))
}

fn user_query(user_id: Option<u64>) -> Option<QueryParams> {
    user_id.map(|user_id| QueryParams::new().with("user_id", user_id))
}
