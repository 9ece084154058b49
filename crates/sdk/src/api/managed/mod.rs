mod types;

pub use types::BlueprintsListParams;

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

/// Blueprint instances.
#[derive(Clone)]
pub struct ManagedApi {
    client: Arc<HttpClient>,
}

impl ManagedApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn blueprints_list(
        &self,
        params: &BlueprintsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("managed/blueprints/", params, paging).await
    }

    pub async fn blueprints_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("managed/blueprints/", request).await
    }

    pub async fn blueprints_available_list(&self) -> ApiResult<Value> {
        self.client.get("managed/blueprints/available/").await
    }

    pub async fn blueprints_retrieve(&self, instance_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("managed/blueprints/{}/", instance_uuid)).await
    }

    pub async fn blueprints_update<B: Serialize + ?Sized>(
        &self,
        instance_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("managed/blueprints/{}/", instance_uuid), request).await
    }

    pub async fn blueprints_partial_update<B: Serialize + ?Sized>(
        &self,
        instance_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("managed/blueprints/{}/", instance_uuid), request).await
    }

    pub async fn blueprints_destroy(&self, instance_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("managed/blueprints/{}/", instance_uuid)).await
    }

    pub async fn blueprints_apply_create(&self, instance_uuid: &str) -> ApiResult<Value> {
        self.client.post_empty(&format!("managed/blueprints/{}/apply/", instance_uuid)).await
    }

    pub async fn blueprints_used_by_list(&self, instance_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("managed/blueprints/{}/used_by/", instance_uuid)).await
    }
}
