mod types;

pub use types::VersionHistoryListParams;

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

/// System information, version and global settings.
#[derive(Clone)]
pub struct AdminApi {
    client: Arc<HttpClient>,
}

impl AdminApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn apps_list(&self) -> ApiResult<Value> {
        self.client.get("admin/apps/").await
    }

    pub async fn models_list(&self) -> ApiResult<Value> {
        self.client.get("admin/models/").await
    }

    pub async fn settings_retrieve(&self) -> ApiResult<Value> {
        self.client.get("admin/settings/").await
    }

    pub async fn settings_update<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.put("admin/settings/", request).await
    }

    pub async fn settings_partial_update<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch("admin/settings/", request).await
    }

    pub async fn system_retrieve(&self) -> ApiResult<Value> {
        self.client.get("admin/system/").await
    }

    pub async fn system_create(&self) -> ApiResult<Value> {
        self.client.post_empty("admin/system/").await
    }

    pub async fn version_retrieve(&self) -> ApiResult<Value> {
        self.client.get("admin/version/").await
    }

    pub async fn version_history_list(
        &self,
        params: &VersionHistoryListParams,
    ) -> ApiResult<Value> {
        self.client.get_with_query("admin/version/history/", params).await
    }

    pub async fn version_history_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("admin/version/history/{}/", id)).await
    }
}
