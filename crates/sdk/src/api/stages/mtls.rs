use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::MtlsListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn mtls_list(
        &self,
        params: &MtlsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/mtls/", params, paging).await
    }

    pub async fn mtls_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/mtls/", request).await
    }

    pub async fn mtls_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/mtls/{}/", stage_uuid)).await
    }

    pub async fn mtls_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/mtls/{}/", stage_uuid), request).await
    }

    pub async fn mtls_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/mtls/{}/", stage_uuid), request).await
    }

    pub async fn mtls_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/mtls/{}/", stage_uuid)).await
    }

    pub async fn mtls_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/mtls/{}/used_by/", stage_uuid)).await
    }
}
