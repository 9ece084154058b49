use serde::Serialize;
use serde_json::Value;

use super::PoliciesApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PoliciesApi {
    pub async fn geoip_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/geoip/", &(), paging).await
    }

    pub async fn geoip_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("policies/geoip/", request).await
    }

    pub async fn geoip_retrieve(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/geoip/{}/", policy_uuid)).await
    }

    pub async fn geoip_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("policies/geoip/{}/", policy_uuid), request).await
    }

    pub async fn geoip_partial_update<B: Serialize + ?Sized>(
        &self,
        policy_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("policies/geoip/{}/", policy_uuid), request).await
    }

    pub async fn geoip_destroy(&self, policy_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("policies/geoip/{}/", policy_uuid)).await
    }

    pub async fn geoip_used_by_list(&self, policy_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("policies/geoip/{}/used_by/", policy_uuid)).await
    }

    pub async fn geoip_iso3166_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("policies/geoip_iso3166/", &(), paging).await
    }
}
