use serde::Serialize;
use serde_json::Value;

use super::{
    PropertyMappingsApi,
    types::{
        SourceKerberosListParams, SourceLdapListParams, SourceOauthListParams, SourcePlexListParams,
        SourceSamlListParams, SourceScimListParams, SourceTelegramListParams,
    },
};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PropertyMappingsApi {
    pub async fn source_kerberos_list(
        &self,
        params: &SourceKerberosListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/source/kerberos/", params, paging).await
    }

    pub async fn source_kerberos_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/source/kerberos/", request).await
    }

    pub async fn source_kerberos_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/kerberos/{}/", pm_uuid)).await
    }

    pub async fn source_kerberos_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/source/kerberos/{}/", pm_uuid), request).await
    }

    pub async fn source_kerberos_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/source/kerberos/{}/", pm_uuid), request).await
    }

    pub async fn source_kerberos_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/source/kerberos/{}/", pm_uuid)).await
    }

    pub async fn source_kerberos_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/kerberos/{}/used_by/", pm_uuid)).await
    }

    pub async fn source_ldap_list(
        &self,
        params: &SourceLdapListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/source/ldap/", params, paging).await
    }

    pub async fn source_ldap_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("propertymappings/source/ldap/", request).await
    }

    pub async fn source_ldap_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/ldap/{}/", pm_uuid)).await
    }

    pub async fn source_ldap_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/source/ldap/{}/", pm_uuid), request).await
    }

    pub async fn source_ldap_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/source/ldap/{}/", pm_uuid), request).await
    }

    pub async fn source_ldap_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/source/ldap/{}/", pm_uuid)).await
    }

    pub async fn source_ldap_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/ldap/{}/used_by/", pm_uuid)).await
    }

    pub async fn source_oauth_list(
        &self,
        params: &SourceOauthListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/source/oauth/", params, paging).await
    }

    pub async fn source_oauth_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/source/oauth/", request).await
    }

    pub async fn source_oauth_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/oauth/{}/", pm_uuid)).await
    }

    pub async fn source_oauth_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/source/oauth/{}/", pm_uuid), request).await
    }

    pub async fn source_oauth_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/source/oauth/{}/", pm_uuid), request).await
    }

    pub async fn source_oauth_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/source/oauth/{}/", pm_uuid)).await
    }

    pub async fn source_oauth_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/oauth/{}/used_by/", pm_uuid)).await
    }

    pub async fn source_plex_list(
        &self,
        params: &SourcePlexListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/source/plex/", params, paging).await
    }

    pub async fn source_plex_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("propertymappings/source/plex/", request).await
    }

    pub async fn source_plex_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/plex/{}/", pm_uuid)).await
    }

    pub async fn source_plex_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/source/plex/{}/", pm_uuid), request).await
    }

    pub async fn source_plex_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/source/plex/{}/", pm_uuid), request).await
    }

    pub async fn source_plex_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/source/plex/{}/", pm_uuid)).await
    }

    pub async fn source_plex_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/plex/{}/used_by/", pm_uuid)).await
    }

    pub async fn source_saml_list(
        &self,
        params: &SourceSamlListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/source/saml/", params, paging).await
    }

    pub async fn source_saml_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("propertymappings/source/saml/", request).await
    }

    pub async fn source_saml_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/saml/{}/", pm_uuid)).await
    }

    pub async fn source_saml_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/source/saml/{}/", pm_uuid), request).await
    }

    pub async fn source_saml_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/source/saml/{}/", pm_uuid), request).await
    }

    pub async fn source_saml_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/source/saml/{}/", pm_uuid)).await
    }

    pub async fn source_saml_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/saml/{}/used_by/", pm_uuid)).await
    }

    pub async fn source_scim_list(
        &self,
        params: &SourceScimListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/source/scim/", params, paging).await
    }

    pub async fn source_scim_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("propertymappings/source/scim/", request).await
    }

    pub async fn source_scim_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/scim/{}/", pm_uuid)).await
    }

    pub async fn source_scim_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/source/scim/{}/", pm_uuid), request).await
    }

    pub async fn source_scim_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/source/scim/{}/", pm_uuid), request).await
    }

    pub async fn source_scim_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/source/scim/{}/", pm_uuid)).await
    }

    pub async fn source_scim_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/scim/{}/used_by/", pm_uuid)).await
    }

    pub async fn source_telegram_list(
        &self,
        params: &SourceTelegramListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/source/telegram/", params, paging).await
    }

    pub async fn source_telegram_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/source/telegram/", request).await
    }

    pub async fn source_telegram_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/telegram/{}/", pm_uuid)).await
    }

    pub async fn source_telegram_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/source/telegram/{}/", pm_uuid), request).await
    }

    pub async fn source_telegram_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/source/telegram/{}/", pm_uuid), request).await
    }

    pub async fn source_telegram_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/source/telegram/{}/", pm_uuid)).await
    }

    pub async fn source_telegram_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/source/telegram/{}/used_by/", pm_uuid)).await
    }
}
