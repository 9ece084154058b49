use serde::Serialize;
use serde_json::Value;

use super::{ProvidersApi, types::{Oauth2ListParams, Oauth2PreviewUserRetrieveParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn oauth2_list(
        &self,
        params: &Oauth2ListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/oauth2/", params, paging).await
    }

    pub async fn oauth2_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/oauth2/", request).await
    }

    pub async fn oauth2_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/oauth2/{}/", id)).await
    }

    pub async fn oauth2_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/oauth2/{}/", id), request).await
    }

    pub async fn oauth2_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/oauth2/{}/", id), request).await
    }

    pub async fn oauth2_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/oauth2/{}/", id)).await
    }

    pub async fn oauth2_preview_user_retrieve(
        &self,
        id: i32,
        params: &Oauth2PreviewUserRetrieveParams,
    ) -> ApiResult<Value> {
        self.client.get_with_query(&format!("providers/oauth2/{}/preview_user/", id), params).await
    }

    pub async fn oauth2_setup_urls_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/oauth2/{}/setup_urls/", id)).await
    }

    pub async fn oauth2_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/oauth2/{}/used_by/", id)).await
    }
}
