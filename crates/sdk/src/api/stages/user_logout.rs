use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::UserLogoutListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn user_logout_list(
        &self,
        params: &UserLogoutListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/user_logout/", params, paging).await
    }

    pub async fn user_logout_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/user_logout/", request).await
    }

    pub async fn user_logout_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/user_logout/{}/", stage_uuid)).await
    }

    pub async fn user_logout_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/user_logout/{}/", stage_uuid), request).await
    }

    pub async fn user_logout_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/user_logout/{}/", stage_uuid), request).await
    }

    pub async fn user_logout_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/user_logout/{}/", stage_uuid)).await
    }

    pub async fn user_logout_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/user_logout/{}/used_by/", stage_uuid)).await
    }
}
