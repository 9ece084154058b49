use serde::Serialize;
use serde_json::Value;

use super::AuthenticatorsApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl AuthenticatorsApi {
    pub async fn duo_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/duo/", &(), paging).await
    }

    pub async fn duo_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/duo/{}/", id)).await
    }

    pub async fn duo_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/duo/{}/", id), request).await
    }

    pub async fn duo_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/duo/{}/", id), request).await
    }

    pub async fn duo_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/duo/{}/", id)).await
    }

    pub async fn duo_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/duo/{}/used_by/", id)).await
    }
}
