mod google_workspace;
mod ldap;
mod microsoft_entra;
mod oauth2;
mod proxy;
mod rac;
mod radius;
mod saml;
mod scim;
mod ssf;
mod types;

pub use types::{
    AllListParams, GoogleWorkspaceGroupsListParams, GoogleWorkspaceListParams,
    GoogleWorkspaceUsersListParams, LdapListParams, MicrosoftEntraGroupsListParams,
    MicrosoftEntraListParams, MicrosoftEntraUsersListParams, Oauth2ListParams,
    Oauth2PreviewUserRetrieveParams, ProxyListParams, RacListParams, RadiusListParams,
    SamlListParams, SamlMetadataRetrieveParams, SamlPreviewUserRetrieveParams, ScimGroupsListParams,
    ScimListParams, ScimUsersListParams, SsfListParams,
};

use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

#[derive(Clone)]
pub struct ProvidersApi {
    client: Arc<HttpClient>,
}

impl ProvidersApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn all_list(
        &self,
        params: &AllListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/all/", params, paging).await
    }

    pub async fn all_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/all/{}/", id)).await
    }

    pub async fn all_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/all/{}/", id)).await
    }

    pub async fn all_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/all/{}/used_by/", id)).await
    }

    pub async fn all_types_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/all/types/", &(), paging).await
    }
}
