use serde::Serialize;
use serde_json::Value;

use super::{ProvidersApi, types::RadiusListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn radius_list(
        &self,
        params: &RadiusListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/radius/", params, paging).await
    }

    pub async fn radius_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/radius/", request).await
    }

    pub async fn radius_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/radius/{}/", id)).await
    }

    pub async fn radius_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/radius/{}/", id), request).await
    }

    pub async fn radius_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/radius/{}/", id), request).await
    }

    pub async fn radius_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/radius/{}/", id)).await
    }

    pub async fn radius_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/radius/{}/used_by/", id)).await
    }
}
