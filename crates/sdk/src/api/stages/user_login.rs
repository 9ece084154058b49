use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::UserLoginListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn user_login_list(
        &self,
        params: &UserLoginListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/user_login/", params, paging).await
    }

    pub async fn user_login_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/user_login/", request).await
    }

    pub async fn user_login_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/user_login/{}/", stage_uuid)).await
    }

    pub async fn user_login_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/user_login/{}/", stage_uuid), request).await
    }

    pub async fn user_login_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/user_login/{}/", stage_uuid), request).await
    }

    pub async fn user_login_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/user_login/{}/", stage_uuid)).await
    }

    pub async fn user_login_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/user_login/{}/used_by/", stage_uuid)).await
    }
}
