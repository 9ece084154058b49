use serde::Serialize;
use serde_json::Value;

use super::{CoreApi, types::{GroupsListParams, GroupsRetrieveParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl CoreApi {
    pub async fn groups_list(
        &self,
        params: &GroupsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("core/groups/", params, paging).await
    }

    pub async fn groups_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("core/groups/", request).await
    }

    pub async fn groups_retrieve(
        &self,
        group_uuid: &str,
        params: &GroupsRetrieveParams,
    ) -> ApiResult<Value> {
        self.client.get_with_query(&format!("core/groups/{}/", group_uuid), params).await
    }

    pub async fn groups_update<B: Serialize + ?Sized>(
        &self,
        group_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("core/groups/{}/", group_uuid), request).await
    }

    pub async fn groups_partial_update<B: Serialize + ?Sized>(
        &self,
        group_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("core/groups/{}/", group_uuid), request).await
    }

    pub async fn groups_destroy(&self, group_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("core/groups/{}/", group_uuid)).await
    }

    pub async fn groups_add_user_create<B: Serialize + ?Sized>(
        &self,
        group_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("core/groups/{}/add_user/", group_uuid), request).await
    }

    pub async fn groups_remove_user_create<B: Serialize + ?Sized>(
        &self,
        group_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("core/groups/{}/remove_user/", group_uuid), request).await
    }

    pub async fn groups_used_by_list(&self, group_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/groups/{}/used_by/", group_uuid)).await
    }
}
