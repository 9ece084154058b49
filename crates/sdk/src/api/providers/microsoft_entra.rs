use serde::Serialize;
use serde_json::Value;

use super::{
    ProvidersApi,
    types::{
        MicrosoftEntraGroupsListParams, MicrosoftEntraListParams, MicrosoftEntraUsersListParams,
    },
};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn microsoft_entra_list(
        &self,
        params: &MicrosoftEntraListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/microsoft_entra/", params, paging).await
    }

    pub async fn microsoft_entra_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("providers/microsoft_entra/", request).await
    }

    pub async fn microsoft_entra_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/microsoft_entra/{}/", id)).await
    }

    pub async fn microsoft_entra_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/microsoft_entra/{}/", id), request).await
    }

    pub async fn microsoft_entra_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/microsoft_entra/{}/", id), request).await
    }

    pub async fn microsoft_entra_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/microsoft_entra/{}/", id)).await
    }

    pub async fn microsoft_entra_sync_object_create<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("providers/microsoft_entra/{}/sync/object/", id), request).await
    }

    pub async fn microsoft_entra_sync_status_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/microsoft_entra/{}/sync/status/", id)).await
    }

    pub async fn microsoft_entra_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/microsoft_entra/{}/used_by/", id)).await
    }

    pub async fn microsoft_entra_groups_list(
        &self,
        params: &MicrosoftEntraGroupsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/microsoft_entra_groups/", params, paging).await
    }

    pub async fn microsoft_entra_groups_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("providers/microsoft_entra_groups/", request).await
    }

    pub async fn microsoft_entra_groups_retrieve(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/microsoft_entra_groups/{}/", id)).await
    }

    pub async fn microsoft_entra_groups_destroy(&self, id: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/microsoft_entra_groups/{}/", id)).await
    }

    pub async fn microsoft_entra_groups_used_by_list(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/microsoft_entra_groups/{}/used_by/", id)).await
    }

    pub async fn microsoft_entra_users_list(
        &self,
        params: &MicrosoftEntraUsersListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/microsoft_entra_users/", params, paging).await
    }

    pub async fn microsoft_entra_users_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("providers/microsoft_entra_users/", request).await
    }

    pub async fn microsoft_entra_users_retrieve(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/microsoft_entra_users/{}/", id)).await
    }

    pub async fn microsoft_entra_users_destroy(&self, id: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/microsoft_entra_users/{}/", id)).await
    }

    pub async fn microsoft_entra_users_used_by_list(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("providers/microsoft_entra_users/{}/used_by/", id)).await
    }
}
