use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::UserDeleteListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn user_delete_list(
        &self,
        params: &UserDeleteListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/user_delete/", params, paging).await
    }

    pub async fn user_delete_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/user_delete/", request).await
    }

    pub async fn user_delete_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/user_delete/{}/", stage_uuid)).await
    }

    pub async fn user_delete_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/user_delete/{}/", stage_uuid), request).await
    }

    pub async fn user_delete_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/user_delete/{}/", stage_uuid), request).await
    }

    pub async fn user_delete_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/user_delete/{}/", stage_uuid)).await
    }

    pub async fn user_delete_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/user_delete/{}/used_by/", stage_uuid)).await
    }
}
