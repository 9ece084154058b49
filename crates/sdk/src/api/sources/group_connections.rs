use serde::Serialize;
use serde_json::Value;

use super::{
    SourcesApi,
    types::{
        GroupConnectionsAllListParams, GroupConnectionsKerberosListParams,
        GroupConnectionsLdapListParams, GroupConnectionsOauthListParams,
        GroupConnectionsPlexListParams, GroupConnectionsSamlListParams,
        GroupConnectionsTelegramListParams,
    },
};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl SourcesApi {
    pub async fn group_connections_all_list(
        &self,
        params: &GroupConnectionsAllListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/group_connections/all/", params, paging).await
    }

    pub async fn group_connections_all_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/all/{}/", id)).await
    }

    pub async fn group_connections_all_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/group_connections/all/{}/", id), request).await
    }

    pub async fn group_connections_all_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/group_connections/all/{}/", id), request).await
    }

    pub async fn group_connections_all_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/group_connections/all/{}/", id)).await
    }

    pub async fn group_connections_all_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/all/{}/used_by/", id)).await
    }

    pub async fn group_connections_kerberos_list(
        &self,
        params: &GroupConnectionsKerberosListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/group_connections/kerberos/", params, paging).await
    }

    pub async fn group_connections_kerberos_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("sources/group_connections/kerberos/", request).await
    }

    pub async fn group_connections_kerberos_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/kerberos/{}/", id)).await
    }

    pub async fn group_connections_kerberos_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/group_connections/kerberos/{}/", id), request).await
    }

    pub async fn group_connections_kerberos_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/group_connections/kerberos/{}/", id), request).await
    }

    pub async fn group_connections_kerberos_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/group_connections/kerberos/{}/", id)).await
    }

    pub async fn group_connections_kerberos_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/kerberos/{}/used_by/", id)).await
    }

    pub async fn group_connections_ldap_list(
        &self,
        params: &GroupConnectionsLdapListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/group_connections/ldap/", params, paging).await
    }

    pub async fn group_connections_ldap_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("sources/group_connections/ldap/", request).await
    }

    pub async fn group_connections_ldap_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/ldap/{}/", id)).await
    }

    pub async fn group_connections_ldap_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/group_connections/ldap/{}/", id), request).await
    }

    pub async fn group_connections_ldap_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/group_connections/ldap/{}/", id), request).await
    }

    pub async fn group_connections_ldap_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/group_connections/ldap/{}/", id)).await
    }

    pub async fn group_connections_ldap_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/ldap/{}/used_by/", id)).await
    }

    pub async fn group_connections_oauth_list(
        &self,
        params: &GroupConnectionsOauthListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/group_connections/oauth/", params, paging).await
    }

    pub async fn group_connections_oauth_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("sources/group_connections/oauth/", request).await
    }

    pub async fn group_connections_oauth_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/oauth/{}/", id)).await
    }

    pub async fn group_connections_oauth_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/group_connections/oauth/{}/", id), request).await
    }

    pub async fn group_connections_oauth_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/group_connections/oauth/{}/", id), request).await
    }

    pub async fn group_connections_oauth_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/group_connections/oauth/{}/", id)).await
    }

    pub async fn group_connections_oauth_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/oauth/{}/used_by/", id)).await
    }

    pub async fn group_connections_plex_list(
        &self,
        params: &GroupConnectionsPlexListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/group_connections/plex/", params, paging).await
    }

    pub async fn group_connections_plex_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("sources/group_connections/plex/", request).await
    }

    pub async fn group_connections_plex_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/plex/{}/", id)).await
    }

    pub async fn group_connections_plex_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/group_connections/plex/{}/", id), request).await
    }

    pub async fn group_connections_plex_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/group_connections/plex/{}/", id), request).await
    }

    pub async fn group_connections_plex_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/group_connections/plex/{}/", id)).await
    }

    pub async fn group_connections_plex_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/plex/{}/used_by/", id)).await
    }

    pub async fn group_connections_saml_list(
        &self,
        params: &GroupConnectionsSamlListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/group_connections/saml/", params, paging).await
    }

    pub async fn group_connections_saml_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("sources/group_connections/saml/", request).await
    }

    pub async fn group_connections_saml_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/saml/{}/", id)).await
    }

    pub async fn group_connections_saml_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/group_connections/saml/{}/", id), request).await
    }

    pub async fn group_connections_saml_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/group_connections/saml/{}/", id), request).await
    }

    pub async fn group_connections_saml_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/group_connections/saml/{}/", id)).await
    }

    pub async fn group_connections_saml_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/saml/{}/used_by/", id)).await
    }

    pub async fn group_connections_telegram_list(
        &self,
        params: &GroupConnectionsTelegramListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/group_connections/telegram/", params, paging).await
    }

    pub async fn group_connections_telegram_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("sources/group_connections/telegram/", request).await
    }

    pub async fn group_connections_telegram_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/telegram/{}/", id)).await
    }

    pub async fn group_connections_telegram_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/group_connections/telegram/{}/", id), request).await
    }

    pub async fn group_connections_telegram_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/group_connections/telegram/{}/", id), request).await
    }

    pub async fn group_connections_telegram_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/group_connections/telegram/{}/", id)).await
    }

    pub async fn group_connections_telegram_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("sources/group_connections/telegram/{}/used_by/", id)).await
    }
}
