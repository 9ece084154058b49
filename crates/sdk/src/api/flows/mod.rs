mod types;

pub use types::{BindingsListParams, ExecutorGetParams, ExecutorSolveParams, InstancesListParams};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

#[derive(Clone)]
pub struct FlowsApi {
    client: Arc<HttpClient>,
}

impl FlowsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn bindings_list(
        &self,
        params: &BindingsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("flows/bindings/", params, paging).await
    }

    pub async fn bindings_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("flows/bindings/", request).await
    }

    pub async fn bindings_retrieve(&self, fsb_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("flows/bindings/{}/", fsb_uuid)).await
    }

    pub async fn bindings_update<B: Serialize + ?Sized>(
        &self,
        fsb_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("flows/bindings/{}/", fsb_uuid), request).await
    }

    pub async fn bindings_partial_update<B: Serialize + ?Sized>(
        &self,
        fsb_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("flows/bindings/{}/", fsb_uuid), request).await
    }

    pub async fn bindings_destroy(&self, fsb_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("flows/bindings/{}/", fsb_uuid)).await
    }

    pub async fn bindings_used_by_list(&self, fsb_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("flows/bindings/{}/used_by/", fsb_uuid)).await
    }

    pub async fn executor_get(
        &self,
        flow_slug: &str,
        params: &ExecutorGetParams,
    ) -> ApiResult<Value> {
        self.client.get_with_query(&format!("flows/executor/{}/", flow_slug), params).await
    }

    pub async fn executor_solve<B: Serialize + ?Sized>(
        &self,
        flow_slug: &str,
        request: &B,
        params: &ExecutorSolveParams,
    ) -> ApiResult<Value> {
        self.client
            .post_with_query(&format!("flows/executor/{}/", flow_slug), request, params)
            .await
    }

    pub async fn inspector_get(&self, flow_slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("flows/inspector/{}/", flow_slug)).await
    }

    pub async fn instances_list(
        &self,
        params: &InstancesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("flows/instances/", params, paging).await
    }

    pub async fn instances_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("flows/instances/", request).await
    }

    pub async fn instances_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("flows/instances/{}/", slug)).await
    }

    pub async fn instances_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("flows/instances/{}/", slug), request).await
    }

    pub async fn instances_partial_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("flows/instances/{}/", slug), request).await
    }

    pub async fn instances_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("flows/instances/{}/", slug)).await
    }

    pub async fn instances_diagram_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("flows/instances/{}/diagram/", slug)).await
    }

    pub async fn instances_execute_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("flows/instances/{}/execute/", slug)).await
    }

    pub async fn instances_export_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("flows/instances/{}/export/", slug)).await
    }

    pub async fn instances_set_background_create(&self, slug: &str) -> ApiResult<Value> {
        self.client.post_empty(&format!("flows/instances/{}/set_background/", slug)).await
    }

    pub async fn instances_set_background_url_create<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("flows/instances/{}/set_background_url/", slug), request).await
    }

    pub async fn instances_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("flows/instances/{}/used_by/", slug)).await
    }

    pub async fn instances_cache_clear_create(&self) -> ApiResult<Value> {
        self.client.post_empty("flows/instances/cache_clear/").await
    }

    pub async fn instances_cache_info_retrieve(&self) -> ApiResult<Value> {
        self.client.get("flows/instances/cache_info/").await
    }

    pub async fn instances_import_create(&self) -> ApiResult<Value> {
        self.client.post_empty("flows/instances/import/").await
    }
}
