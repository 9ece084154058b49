use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::DummyListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn dummy_list(
        &self,
        params: &DummyListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/dummy/", params, paging).await
    }

    pub async fn dummy_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/dummy/", request).await
    }

    pub async fn dummy_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/dummy/{}/", stage_uuid)).await
    }

    pub async fn dummy_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/dummy/{}/", stage_uuid), request).await
    }

    pub async fn dummy_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/dummy/{}/", stage_uuid), request).await
    }

    pub async fn dummy_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/dummy/{}/", stage_uuid)).await
    }

    pub async fn dummy_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/dummy/{}/used_by/", stage_uuid)).await
    }
}
