use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::ConsentListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn consent_list(
        &self,
        params: &ConsentListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/consent/", params, paging).await
    }

    pub async fn consent_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/consent/", request).await
    }

    pub async fn consent_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/consent/{}/", stage_uuid)).await
    }

    pub async fn consent_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/consent/{}/", stage_uuid), request).await
    }

    pub async fn consent_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/consent/{}/", stage_uuid), request).await
    }

    pub async fn consent_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/consent/{}/", stage_uuid)).await
    }

    pub async fn consent_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/consent/{}/used_by/", stage_uuid)).await
    }
}
