use serde::Serialize;
use serde_json::Value;

use super::{ProvidersApi, types::RacListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn rac_list(
        &self,
        params: &RacListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/rac/", params, paging).await
    }

    pub async fn rac_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/rac/", request).await
    }

    pub async fn rac_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/rac/{}/", id)).await
    }

    pub async fn rac_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/rac/{}/", id), request).await
    }

    pub async fn rac_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/rac/{}/", id), request).await
    }

    pub async fn rac_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/rac/{}/", id)).await
    }

    pub async fn rac_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/rac/{}/used_by/", id)).await
    }
}
