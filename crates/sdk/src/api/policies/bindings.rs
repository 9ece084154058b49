use serde::Serialize;
use serde_json::Value;

use super::{PoliciesApi, types::BindingsListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PoliciesApi {
    pub async fn bindings_list(
        &self,
        params: &BindingsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/bindings/", params, paging).await
    }

    pub async fn bindings_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("policies/bindings/", request).await
    }

    pub async fn bindings_retrieve(&self, policy_binding_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/bindings/{}/", policy_binding_uuid)).await
    }

    pub async fn bindings_update<B: Serialize + ?Sized>(
        &self,
        policy_binding_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("policies/bindings/{}/", policy_binding_uuid), request).await
    }

    pub async fn bindings_partial_update<B: Serialize + ?Sized>(
        &self,
        policy_binding_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("policies/bindings/{}/", policy_binding_uuid), request).await
    }

    pub async fn bindings_destroy(&self, policy_binding_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/bindings/{}/", policy_binding_uuid)).await
    }

    pub async fn bindings_used_by_list(&self, policy_binding_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/bindings/{}/used_by/", policy_binding_uuid)).await
    }
}
