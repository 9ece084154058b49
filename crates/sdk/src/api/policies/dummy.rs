use serde::Serialize;
use serde_json::Value;

use super::{PoliciesApi, types::DummyListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PoliciesApi {
    pub async fn dummy_list(
        &self,
        params: &DummyListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/dummy/", params, paging).await
    }

    pub async fn dummy_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("policies/dummy/", request).await
    }

    pub async fn dummy_retrieve(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/dummy/{}/", policy_uuid)).await
    }

    pub async fn dummy_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("policies/dummy/{}/", policy_uuid), request).await
    }

    pub async fn dummy_partial_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("policies/dummy/{}/", policy_uuid), request).await
    }

    pub async fn dummy_destroy(&self, policy_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/dummy/{}/", policy_uuid)).await
    }

    pub async fn dummy_used_by_list(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/dummy/{}/used_by/", policy_uuid)).await
    }
}
