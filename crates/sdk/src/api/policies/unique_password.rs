use serde::Serialize;
use serde_json::Value;

use super::{PoliciesApi, types::UniquePasswordListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PoliciesApi {
    pub async fn unique_password_list(
        &self,
        params: &UniquePasswordListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/unique_password/", params, paging).await
    }

    pub async fn unique_password_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("policies/unique_password/", request).await
    }

    pub async fn unique_password_retrieve(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/unique_password/{}/", policy_uuid)).await
    }

    pub async fn unique_password_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("policies/unique_password/{}/", policy_uuid), request).await
    }

    pub async fn unique_password_partial_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("policies/unique_password/{}/", policy_uuid), request).await
    }

    pub async fn unique_password_destroy(&self, policy_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/unique_password/{}/", policy_uuid)).await
    }

    pub async fn unique_password_used_by_list(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/unique_password/{}/used_by/", policy_uuid)).await
    }
}
