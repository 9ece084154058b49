use serde::Serialize;
use serde_json::Value;

use super::{ProvidersApi, types::ProxyListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn proxy_list(
        &self,
        params: &ProxyListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/proxy/", params, paging).await
    }

    pub async fn proxy_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/proxy/", request).await
    }

    pub async fn proxy_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/proxy/{}/", id)).await
    }

    pub async fn proxy_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/proxy/{}/", id), request).await
    }

    pub async fn proxy_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/proxy/{}/", id), request).await
    }

    pub async fn proxy_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/proxy/{}/", id)).await
    }

    pub async fn proxy_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/proxy/{}/used_by/", id)).await
    }
}
