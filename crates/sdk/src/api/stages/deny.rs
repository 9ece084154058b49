use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::DenyListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn deny_list(
        &self,
        params: &DenyListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/deny/", params, paging).await
    }

    pub async fn deny_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/deny/", request).await
    }

    pub async fn deny_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/deny/{}/", stage_uuid)).await
    }

    pub async fn deny_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/deny/{}/", stage_uuid), request).await
    }

    pub async fn deny_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/deny/{}/", stage_uuid), request).await
    }

    pub async fn deny_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/deny/{}/", stage_uuid)).await
    }

    pub async fn deny_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/deny/{}/used_by/", stage_uuid)).await
    }
}
