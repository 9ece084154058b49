use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::PasswordListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn password_list(
        &self,
        params: &PasswordListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/password/", params, paging).await
    }

    pub async fn password_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/password/", request).await
    }

    pub async fn password_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/password/{}/", stage_uuid)).await
    }

    pub async fn password_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/password/{}/", stage_uuid), request).await
    }

    pub async fn password_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/password/{}/", stage_uuid), request).await
    }

    pub async fn password_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/password/{}/", stage_uuid)).await
    }

    pub async fn password_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/password/{}/used_by/", stage_uuid)).await
    }
}
