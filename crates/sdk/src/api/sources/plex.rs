use serde::Serialize;
use serde_json::Value;

use super::{
    SourcesApi,
    types::{PlexListParams, PlexRedeemTokenAuthenticatedCreateParams, PlexRedeemTokenCreateParams},
};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl SourcesApi {
    pub async fn plex_list(
        &self,
        params: &PlexListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/plex/", params, paging).await
    }

    pub async fn plex_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("sources/plex/", request).await
    }

    pub async fn plex_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/plex/{}/", slug)).await
    }

    pub async fn plex_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/plex/{}/", slug), request).await
    }

    pub async fn plex_partial_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/plex/{}/", slug), request).await
    }

    pub async fn plex_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/plex/{}/", slug)).await
    }

    pub async fn plex_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/plex/{}/used_by/", slug)).await
    }

    pub async fn plex_redeem_token_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
        params: &PlexRedeemTokenCreateParams,
    ) -> ApiResult<Value> {
        self.client.post_with_query("sources/plex/redeem_token/", request, params).await
    }

    pub async fn plex_redeem_token_authenticated_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
        params: &PlexRedeemTokenAuthenticatedCreateParams,
    ) -> ApiResult<Value> {
        self.client
            .post_with_query("sources/plex/redeem_token_authenticated/", request, params)
            .await
    }
}
