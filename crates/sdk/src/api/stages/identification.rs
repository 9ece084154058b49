use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::IdentificationListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn identification_list(
        &self,
        params: &IdentificationListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/identification/", params, paging).await
    }

    pub async fn identification_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/identification/", request).await
    }

    pub async fn identification_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/identification/{}/", stage_uuid)).await
    }

    pub async fn identification_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/identification/{}/", stage_uuid), request).await
    }

    pub async fn identification_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/identification/{}/", stage_uuid), request).await
    }

    pub async fn identification_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/identification/{}/", stage_uuid)).await
    }

    pub async fn identification_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/identification/{}/used_by/", stage_uuid)).await
    }
}
