use serde::Serialize;
use serde_json::Value;

use super::{PoliciesApi, types::{ReputationListParams, ReputationScoresListParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PoliciesApi {
    pub async fn reputation_list(
        &self,
        params: &ReputationListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/reputation/", params, paging).await
    }

    pub async fn reputation_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("policies/reputation/", request).await
    }

    pub async fn reputation_retrieve(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/reputation/{}/", policy_uuid)).await
    }

    pub async fn reputation_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("policies/reputation/{}/", policy_uuid), request).await
    }

    pub async fn reputation_partial_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("policies/reputation/{}/", policy_uuid), request).await
    }

    pub async fn reputation_destroy(&self, policy_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/reputation/{}/", policy_uuid)).await
    }

    pub async fn reputation_used_by_list(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/reputation/{}/used_by/", policy_uuid)).await
    }

    pub async fn reputation_scores_list(
        &self,
        params: &ReputationScoresListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/reputation/scores/", params, paging).await
    }

    pub async fn reputation_scores_retrieve(&self, reputation_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/reputation/scores/{}/", reputation_uuid)).await
    }

    pub async fn reputation_scores_destroy(&self, reputation_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/reputation/scores/{}/", reputation_uuid)).await
    }

    pub async fn reputation_scores_used_by_list(&self, reputation_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/reputation/scores/{}/used_by/", reputation_uuid)).await
    }
}
