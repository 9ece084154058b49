use serde::Serialize;
use serde_json::Value;

use super::{CoreApi, types::TokensListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl CoreApi {
    pub async fn tokens_list(
        &self,
        params: &TokensListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("core/tokens/", params, paging).await
    }

    pub async fn tokens_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("core/tokens/", request).await
    }

    pub async fn tokens_retrieve(&self, identifier: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/tokens/{}/", identifier)).await
    }

    pub async fn tokens_update<B: Serialize + ?Sized>(
        &self,
        identifier: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("core/tokens/{}/", identifier), request).await
    }

    pub async fn tokens_partial_update<B: Serialize + ?Sized>(
        &self,
        identifier: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("core/tokens/{}/", identifier), request).await
    }

    pub async fn tokens_destroy(&self, identifier: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("core/tokens/{}/", identifier)).await
    }

    pub async fn tokens_set_key_create<B: Serialize + ?Sized>(
        &self,
        identifier: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("core/tokens/{}/set_key/", identifier), request).await
    }

    pub async fn tokens_used_by_list(&self, identifier: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/tokens/{}/used_by/", identifier)).await
    }

    pub async fn tokens_view_key_retrieve(&self, identifier: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/tokens/{}/view_key/", identifier)).await
    }
}
