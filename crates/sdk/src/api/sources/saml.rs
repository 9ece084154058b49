use serde::Serialize;
use serde_json::Value;

use super::{SourcesApi, types::SamlListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl SourcesApi {
    pub async fn saml_list(
        &self,
        params: &SamlListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/saml/", params, paging).await
    }

    pub async fn saml_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("sources/saml/", request).await
    }

    pub async fn saml_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/saml/{}/", slug)).await
    }

    pub async fn saml_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/saml/{}/", slug), request).await
    }

    pub async fn saml_partial_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/saml/{}/", slug), request).await
    }

    pub async fn saml_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/saml/{}/", slug)).await
    }

    pub async fn saml_metadata_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/saml/{}/metadata/", slug)).await
    }

    pub async fn saml_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/saml/{}/used_by/", slug)).await
    }
}
