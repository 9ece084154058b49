use serde::Serialize;
use serde_json::Value;

use super::{ProvidersApi, types::LdapListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn ldap_list(
        &self,
        params: &LdapListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/ldap/", params, paging).await
    }

    pub async fn ldap_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/ldap/", request).await
    }

    pub async fn ldap_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/ldap/{}/", id)).await
    }

    pub async fn ldap_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/ldap/{}/", id), request).await
    }

    pub async fn ldap_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/ldap/{}/", id), request).await
    }

    pub async fn ldap_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/ldap/{}/", id)).await
    }

    pub async fn ldap_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/ldap/{}/used_by/", id)).await
    }
}
