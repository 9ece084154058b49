use serde::Serialize;
use serde_json::Value;

use super::AuthenticatorsApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl AuthenticatorsApi {
    pub async fn sms_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/sms/", &(), paging).await
    }

    pub async fn sms_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/sms/{}/", id)).await
    }

    pub async fn sms_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/sms/{}/", id), request).await
    }

    pub async fn sms_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/sms/{}/", id), request).await
    }

    pub async fn sms_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/sms/{}/", id)).await
    }

    pub async fn sms_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/sms/{}/used_by/", id)).await
    }
}
