use serde::Serialize;
use serde_json::Value;

use super::AuthenticatorsApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl AuthenticatorsApi {
    pub async fn totp_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/totp/", &(), paging).await
    }

    pub async fn totp_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/totp/{}/", id)).await
    }

    pub async fn totp_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/totp/{}/", id), request).await
    }

    pub async fn totp_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/totp/{}/", id), request).await
    }

    pub async fn totp_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/totp/{}/", id)).await
    }

    pub async fn totp_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/totp/{}/used_by/", id)).await
    }
}
