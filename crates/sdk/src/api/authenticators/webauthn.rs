use serde::Serialize;
use serde_json::Value;

use super::AuthenticatorsApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl AuthenticatorsApi {
    pub async fn webauthn_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/webauthn/", &(), paging).await
    }

    pub async fn webauthn_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/webauthn/{}/", id)).await
    }

    pub async fn webauthn_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/webauthn/{}/", id), request).await
    }

    pub async fn webauthn_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/webauthn/{}/", id), request).await
    }

    pub async fn webauthn_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/webauthn/{}/", id)).await
    }

    pub async fn webauthn_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/webauthn/{}/used_by/", id)).await
    }
}
