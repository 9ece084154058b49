mod notification;
mod provider;
mod source;
mod types;

pub use types::{
    AllListParams, AllTestCreateParams, ProviderGoogleWorkspaceListParams,
    ProviderMicrosoftEntraListParams, ProviderRacListParams, ProviderRadiusListParams,
    ProviderSamlListParams, ProviderScimListParams, ProviderScopeListParams,
    SourceKerberosListParams, SourceLdapListParams, SourceOauthListParams, SourcePlexListParams,
    SourceSamlListParams, SourceScimListParams, SourceTelegramListParams,
};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

#[derive(Clone)]
pub struct PropertyMappingsApi {
    client: Arc<HttpClient>,
}

impl PropertyMappingsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn all_list(
        &self,
        params: &AllListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/all/", params, paging).await
    }

    pub async fn all_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/all/{}/", pm_uuid)).await
    }

    pub async fn all_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/all/{}/", pm_uuid)).await
    }

    pub async fn all_test_create<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
        params: &AllTestCreateParams,
    ) -> ApiResult<Value> {
        self.client
            .post_with_query(&format!("propertymappings/all/{}/test/", pm_uuid), request, params)
            .await
    }

    pub async fn all_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/all/{}/used_by/", pm_uuid)).await
    }

    pub async fn all_types_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/all/types/", &(), paging).await
    }
}
