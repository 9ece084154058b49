use serde::Serialize;
use serde_json::Value;

use super::{PoliciesApi, types::EventMatcherListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PoliciesApi {
    pub async fn event_matcher_list(
        &self,
        params: &EventMatcherListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/event_matcher/", params, paging).await
    }

    pub async fn event_matcher_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("policies/event_matcher/", request).await
    }

    pub async fn event_matcher_retrieve(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/event_matcher/{}/", policy_uuid)).await
    }

    pub async fn event_matcher_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("policies/event_matcher/{}/", policy_uuid), request).await
    }

    pub async fn event_matcher_partial_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("policies/event_matcher/{}/", policy_uuid), request).await
    }

    pub async fn event_matcher_destroy(&self, policy_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/event_matcher/{}/", policy_uuid)).await
    }

    pub async fn event_matcher_used_by_list(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/event_matcher/{}/used_by/", policy_uuid)).await
    }
}
