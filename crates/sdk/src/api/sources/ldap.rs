use serde::Serialize;
use serde_json::Value;

use super::{SourcesApi, types::LdapListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl SourcesApi {
    pub async fn ldap_list(
        &self,
        params: &LdapListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/ldap/", params, paging).await
    }

    pub async fn ldap_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("sources/ldap/", request).await
    }

    pub async fn ldap_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/ldap/{}/", slug)).await
    }

    pub async fn ldap_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/ldap/{}/", slug), request).await
    }

    pub async fn ldap_partial_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/ldap/{}/", slug), request).await
    }

    pub async fn ldap_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/ldap/{}/", slug)).await
    }

    pub async fn ldap_debug_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/ldap/{}/debug/", slug)).await
    }

    pub async fn ldap_sync_status_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/ldap/{}/sync/status/", slug)).await
    }

    pub async fn ldap_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/ldap/{}/used_by/", slug)).await
    }
}
