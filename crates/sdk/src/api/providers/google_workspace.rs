use serde::Serialize;
use serde_json::Value;

use super::{
    ProvidersApi,
    types::{
        GoogleWorkspaceGroupsListParams, GoogleWorkspaceListParams, GoogleWorkspaceUsersListParams,
    },
};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn google_workspace_list(
        &self,
        params: &GoogleWorkspaceListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/google_workspace/", params, paging).await
    }

    pub async fn google_workspace_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("providers/google_workspace/", request).await
    }

    pub async fn google_workspace_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/google_workspace/{}/", id)).await
    }

    pub async fn google_workspace_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/google_workspace/{}/", id), request).await
    }

    pub async fn google_workspace_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/google_workspace/{}/", id), request).await
    }

    pub async fn google_workspace_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/google_workspace/{}/", id)).await
    }

    pub async fn google_workspace_sync_object_create<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("providers/google_workspace/{}/sync/object/", id), request).await
    }

    pub async fn google_workspace_sync_status_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/google_workspace/{}/sync/status/", id)).await
    }

    pub async fn google_workspace_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/google_workspace/{}/used_by/", id)).await
    }

    pub async fn google_workspace_groups_list(
        &self,
        params: &GoogleWorkspaceGroupsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/google_workspace_groups/", params, paging).await
    }

    pub async fn google_workspace_groups_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("providers/google_workspace_groups/", request).await
    }

    pub async fn google_workspace_groups_retrieve(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/google_workspace_groups/{}/", id)).await
    }

    pub async fn google_workspace_groups_destroy(&self, id: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/google_workspace_groups/{}/", id)).await
    }

    pub async fn google_workspace_groups_used_by_list(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/google_workspace_groups/{}/used_by/", id)).await
    }

    pub async fn google_workspace_users_list(
        &self,
        params: &GoogleWorkspaceUsersListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/google_workspace_users/", params, paging).await
    }

    pub async fn google_workspace_users_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("providers/google_workspace_users/", request).await
    }

    pub async fn google_workspace_users_retrieve(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/google_workspace_users/{}/", id)).await
    }

    pub async fn google_workspace_users_destroy(&self, id: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/google_workspace_users/{}/", id)).await
    }

    pub async fn google_workspace_users_used_by_list(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/google_workspace_users/{}/used_by/", id)).await
    }
}
