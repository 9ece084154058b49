use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::UserWriteListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn user_write_list(
        &self,
        params: &UserWriteListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/user_write/", params, paging).await
    }

    pub async fn user_write_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/user_write/", request).await
    }

    pub async fn user_write_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/user_write/{}/", stage_uuid)).await
    }

    pub async fn user_write_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/user_write/{}/", stage_uuid), request).await
    }

    pub async fn user_write_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/user_write/{}/", stage_uuid), request).await
    }

    pub async fn user_write_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/user_write/{}/", stage_uuid)).await
    }

    pub async fn user_write_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/user_write/{}/used_by/", stage_uuid)).await
    }
}
