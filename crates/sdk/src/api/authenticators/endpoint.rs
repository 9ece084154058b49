use serde_json::Value;

use super::AuthenticatorsApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl AuthenticatorsApi {
    pub async fn endpoint_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/endpoint/", &(), paging).await
    }

    pub async fn endpoint_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/endpoint/{}/", uuid)).await
    }

    pub async fn endpoint_used_by_list(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/endpoint/{}/used_by/", uuid)).await
    }
}
