use serde::Serialize;
use serde_json::Value;

use super::AuthenticatorsApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl AuthenticatorsApi {
    pub async fn email_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/email/", &(), paging).await
    }

    pub async fn email_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/email/{}/", id)).await
    }

    pub async fn email_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/email/{}/", id), request).await
    }

    pub async fn email_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/email/{}/", id), request).await
    }

    pub async fn email_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/email/{}/", id)).await
    }

    pub async fn email_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/email/{}/used_by/", id)).await
    }
}
