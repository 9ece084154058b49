use serde::Serialize;
use serde_json::Value;

use super::{ProvidersApi, types::SsfListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn ssf_list(
        &self,
        params: &SsfListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/ssf/", params, paging).await
    }

    pub async fn ssf_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/ssf/", request).await
    }

    pub async fn ssf_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/ssf/{}/", id)).await
    }

    pub async fn ssf_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/ssf/{}/", id), request).await
    }

    pub async fn ssf_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/ssf/{}/", id), request).await
    }

    pub async fn ssf_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/ssf/{}/", id)).await
    }

    pub async fn ssf_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/ssf/{}/used_by/", id)).await
    }
}
