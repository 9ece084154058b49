mod bindings;
mod dummy;
mod event_matcher;
mod expression;
mod geoip;
mod password;
mod reputation;
mod types;
mod unique_password;

pub use types::{
    AllListParams, BindingsListParams, DummyListParams, EventMatcherListParams,
    ExpressionListParams, PasswordExpiryListParams, PasswordListParams, ReputationListParams,
    ReputationScoresListParams, UniquePasswordListParams,
};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

#[derive(Clone)]
pub struct PoliciesApi {
    client: Arc<HttpClient>,
}

impl PoliciesApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn all_list(
        &self,
        params: &AllListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/all/", params, paging).await
    }

    pub async fn all_retrieve(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/all/{}/", policy_uuid)).await
    }

    pub async fn all_destroy(&self, policy_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/all/{}/", policy_uuid)).await
    }

    pub async fn all_test_create<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("policies/all/{}/test/", policy_uuid), request).await
    }

    pub async fn all_used_by_list(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/all/{}/used_by/", policy_uuid)).await
    }

    pub async fn all_cache_clear_create(&self) -> ApiResult<Value> {
        self.client.post_empty("policies/all/cache_clear/").await
    }

    pub async fn all_cache_info_retrieve(&self) -> ApiResult<Value> {
        self.client.get("policies/all/cache_info/").await
    }

    pub async fn all_types_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/all/types/", &(), paging).await
    }
}
