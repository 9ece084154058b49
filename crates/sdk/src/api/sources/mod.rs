mod group_connections;
mod kerberos;
mod ldap;
mod oauth;
mod plex;
mod saml;
mod scim;
mod telegram;
mod types;
mod user_connections;

pub use types::{
    AllListParams, GroupConnectionsAllListParams, GroupConnectionsKerberosListParams,
    GroupConnectionsLdapListParams, GroupConnectionsOauthListParams, GroupConnectionsPlexListParams,
    GroupConnectionsSamlListParams, GroupConnectionsTelegramListParams, KerberosListParams,
    LdapListParams, OauthListParams, PlexListParams, PlexRedeemTokenAuthenticatedCreateParams,
    PlexRedeemTokenCreateParams, SamlListParams, ScimGroupsListParams, ScimListParams,
    ScimUsersListParams, TelegramListParams, UserConnectionsAllListParams,
    UserConnectionsKerberosListParams, UserConnectionsLdapListParams,
    UserConnectionsOauthListParams, UserConnectionsPlexListParams, UserConnectionsSamlListParams,
    UserConnectionsTelegramListParams,
};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

#[derive(Clone)]
pub struct SourcesApi {
    client: Arc<HttpClient>,
}

impl SourcesApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn all_list(
        &self,
        params: &AllListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/all/", params, paging).await
    }

    pub async fn all_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/all/{}/", slug)).await
    }

    pub async fn all_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/all/{}/", slug)).await
    }

    pub async fn all_set_icon_create(&self, slug: &str) -> ApiResult<Value> {
        self.client.post_empty(&format!("sources/all/{}/set_icon/", slug)).await
    }

    pub async fn all_set_icon_url_create<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("sources/all/{}/set_icon_url/", slug), request).await
    }

    pub async fn all_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/all/{}/used_by/", slug)).await
    }

    pub async fn all_types_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/all/types/", &(), paging).await
    }

    pub async fn all_user_settings_list(
        &self,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/all/user_settings/", &(), paging).await
    }
}
