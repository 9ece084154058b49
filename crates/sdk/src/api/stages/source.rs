use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::SourceListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn source_list(
        &self,
        params: &SourceListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/source/", params, paging).await
    }

    pub async fn source_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/source/", request).await
    }

    pub async fn source_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/source/{}/", stage_uuid)).await
    }

    pub async fn source_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/source/{}/", stage_uuid), request).await
    }

    pub async fn source_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/source/{}/", stage_uuid), request).await
    }

    pub async fn source_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/source/{}/", stage_uuid)).await
    }

    pub async fn source_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/source/{}/used_by/", stage_uuid)).await
    }
}
