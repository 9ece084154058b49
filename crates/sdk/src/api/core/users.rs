use serde::Serialize;
use serde_json::Value;

use super::{CoreApi, types::{UsersListParams, UsersRecoveryEmailCreateParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl CoreApi {
    pub async fn users_list(
        &self,
        params: &UsersListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("core/users/", params, paging).await
    }

    pub async fn users_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("core/users/", request).await
    }

    pub async fn users_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("core/users/{}/", id)).await
    }

    pub async fn users_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("core/users/{}/", id), request).await
    }

    pub async fn users_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("core/users/{}/", id), request).await
    }

    pub async fn users_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("core/users/{}/", id)).await
    }

    pub async fn users_impersonate_create<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("core/users/{}/impersonate/", id), request).await
    }

    pub async fn users_recovery_create(&self, id: i32) -> ApiResult<Value> {
        self.client.post_empty(&format!("core/users/{}/recovery/", id)).await
    }

    pub async fn users_recovery_email_create(
        &self,
        id: i32,
        params: &UsersRecoveryEmailCreateParams,
    ) -> ApiResult<Value> {
        self.client
            .post_empty_with_query(&format!("core/users/{}/recovery_email/", id), params)
            .await
    }

    pub async fn users_set_password_create<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("core/users/{}/set_password/", id), request).await
    }

    pub async fn users_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("core/users/{}/used_by/", id)).await
    }

    pub async fn users_impersonate_end_retrieve(&self) -> ApiResult<Value> {
        self.client.get("core/users/impersonate_end/").await
    }

    pub async fn users_me_retrieve(&self) -> ApiResult<Value> {
        self.client.get("core/users/me/").await
    }

    pub async fn users_paths_retrieve(&self) -> ApiResult<Value> {
        self.client.get("core/users/paths/").await
    }

    pub async fn users_service_account_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("core/users/service_account/", request).await
    }
}
