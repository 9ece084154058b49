use serde::Serialize;
use serde_json::Value;

use super::AuthenticatorsApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl AuthenticatorsApi {
    pub async fn static_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/static/", &(), paging).await
    }

    pub async fn static_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/static/{}/", id)).await
    }

    pub async fn static_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/static/{}/", id), request).await
    }

    pub async fn static_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/static/{}/", id), request).await
    }

    pub async fn static_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/static/{}/", id)).await
    }

    pub async fn static_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/static/{}/used_by/", id)).await
    }
}
