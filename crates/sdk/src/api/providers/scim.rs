use serde::Serialize;
use serde_json::Value;

use super::{ProvidersApi, types::{ScimGroupsListParams, ScimListParams, ScimUsersListParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn scim_list(
        &self,
        params: &ScimListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/scim/", params, paging).await
    }

    pub async fn scim_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/scim/", request).await
    }

    pub async fn scim_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/scim/{}/", id)).await
    }

    pub async fn scim_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/scim/{}/", id), request).await
    }

    pub async fn scim_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/scim/{}/", id), request).await
    }

    pub async fn scim_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/scim/{}/", id)).await
    }

    pub async fn scim_sync_object_create<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("providers/scim/{}/sync/object/", id), request).await
    }

    pub async fn scim_sync_status_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/scim/{}/sync/status/", id)).await
    }

    pub async fn scim_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/scim/{}/used_by/", id)).await
    }

    pub async fn scim_groups_list(
        &self,
        params: &ScimGroupsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/scim_groups/", params, paging).await
    }

    pub async fn scim_groups_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/scim_groups/", request).await
    }

    pub async fn scim_groups_retrieve(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/scim_groups/{}/", id)).await
    }

    pub async fn scim_groups_destroy(&self, id: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/scim_groups/{}/", id)).await
    }

    pub async fn scim_groups_used_by_list(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/scim_groups/{}/used_by/", id)).await
    }

    pub async fn scim_users_list(
        &self,
        params: &ScimUsersListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/scim_users/", params, paging).await
    }

    pub async fn scim_users_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/scim_users/", request).await
    }

    pub async fn scim_users_retrieve(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/scim_users/{}/", id)).await
    }

    pub async fn scim_users_destroy(&self, id: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/scim_users/{}/", id)).await
    }

    pub async fn scim_users_used_by_list(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/scim_users/{}/used_by/", id)).await
    }
}
