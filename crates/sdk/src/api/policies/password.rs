use serde::Serialize;
use serde_json::Value;

use super::{PoliciesApi, types::{PasswordExpiryListParams, PasswordListParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PoliciesApi {
    pub async fn password_list(
        &self,
        params: &PasswordListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/password/", params, paging).await
    }

    pub async fn password_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("policies/password/", request).await
    }

    pub async fn password_retrieve(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/password/{}/", policy_uuid)).await
    }

    pub async fn password_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("policies/password/{}/", policy_uuid), request).await
    }

    pub async fn password_partial_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("policies/password/{}/", policy_uuid), request).await
    }

    pub async fn password_destroy(&self, policy_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/password/{}/", policy_uuid)).await
    }

    pub async fn password_used_by_list(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/password/{}/used_by/", policy_uuid)).await
    }

    pub async fn password_expiry_list(
        &self,
        params: &PasswordExpiryListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/password_expiry/", params, paging).await
    }

    pub async fn password_expiry_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("policies/password_expiry/", request).await
    }

    pub async fn password_expiry_retrieve(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/password_expiry/{}/", policy_uuid)).await
    }

    pub async fn password_expiry_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("policies/password_expiry/{}/", policy_uuid), request).await
    }

    pub async fn password_expiry_partial_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("policies/password_expiry/{}/", policy_uuid), request).await
    }

    pub async fn password_expiry_destroy(&self, policy_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/password_expiry/{}/", policy_uuid)).await
    }

    pub async fn password_expiry_used_by_list(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/password_expiry/{}/used_by/", policy_uuid)).await
    }
}
