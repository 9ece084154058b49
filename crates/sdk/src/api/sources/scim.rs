use serde::Serialize;
use serde_json::Value;

use super::{SourcesApi, types::{ScimGroupsListParams, ScimListParams, ScimUsersListParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl SourcesApi {
    pub async fn scim_list(
        &self,
        params: &ScimListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/scim/", params, paging).await
    }

    pub async fn scim_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("sources/scim/", request).await
    }

    pub async fn scim_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/scim/{}/", slug)).await
    }

    pub async fn scim_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/scim/{}/", slug), request).await
    }

    pub async fn scim_partial_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/scim/{}/", slug), request).await
    }

    pub async fn scim_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/scim/{}/", slug)).await
    }

    pub async fn scim_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/scim/{}/used_by/", slug)).await
    }

    pub async fn scim_groups_list(
        &self,
        params: &ScimGroupsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/scim_groups/", params, paging).await
    }

    pub async fn scim_groups_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("sources/scim_groups/", request).await
    }

    pub async fn scim_groups_retrieve(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/scim_groups/{}/", id)).await
    }

    pub async fn scim_groups_update<B: Serialize + ?Sized>(
        &self,
        id: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/scim_groups/{}/", id), request).await
    }

    pub async fn scim_groups_partial_update<B: Serialize + ?Sized>(
        &self,
        id: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/scim_groups/{}/", id), request).await
    }

    pub async fn scim_groups_destroy(&self, id: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/scim_groups/{}/", id)).await
    }

    pub async fn scim_groups_used_by_list(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/scim_groups/{}/used_by/", id)).await
    }

    pub async fn scim_users_list(
        &self,
        params: &ScimUsersListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/scim_users/", params, paging).await
    }

    pub async fn scim_users_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("sources/scim_users/", request).await
    }

    pub async fn scim_users_retrieve(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/scim_users/{}/", id)).await
    }

    pub async fn scim_users_update<B: Serialize + ?Sized>(
        &self,
        id: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/scim_users/{}/", id), request).await
    }

    pub async fn scim_users_partial_update<B: Serialize + ?Sized>(
        &self,
        id: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/scim_users/{}/", id), request).await
    }

    pub async fn scim_users_destroy(&self, id: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/scim_users/{}/", id)).await
    }

    pub async fn scim_users_used_by_list(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/scim_users/{}/used_by/", id)).await
    }
}
