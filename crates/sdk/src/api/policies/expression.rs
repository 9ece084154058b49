use serde::Serialize;
use serde_json::Value;

use super::{PoliciesApi, types::ExpressionListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PoliciesApi {
    pub async fn expression_list(
        &self,
        params: &ExpressionListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/expression/", params, paging).await
    }

    pub async fn expression_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("policies/expression/", request).await
    }

    pub async fn expression_retrieve(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/expression/{}/", policy_uuid)).await
    }

    pub async fn expression_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("policies/expression/{}/", policy_uuid), request).await
    }

    pub async fn expression_partial_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("policies/expression/{}/", policy_uuid), request).await
    }

    pub async fn expression_destroy(&self, policy_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/expression/{}/", policy_uuid)).await
    }

    pub async fn expression_used_by_list(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/expression/{}/used_by/", policy_uuid)).await
    }
}
