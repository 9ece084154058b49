use serde::Serialize;
use serde_json::Value;

use super::{SourcesApi, types::OauthListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl SourcesApi {
    pub async fn oauth_list(
        &self,
        params: &OauthListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/oauth/", params, paging).await
    }

    pub async fn oauth_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("sources/oauth/", request).await
    }

    pub async fn oauth_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/oauth/{}/", slug)).await
    }

    pub async fn oauth_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/oauth/{}/", slug), request).await
    }

    pub async fn oauth_partial_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/oauth/{}/", slug), request).await
    }

    pub async fn oauth_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/oauth/{}/", slug)).await
    }

    pub async fn oauth_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/oauth/{}/used_by/", slug)).await
    }

    pub async fn oauth_source_types_list(
        &self,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/oauth/source_types/", &(), paging).await
    }
}
