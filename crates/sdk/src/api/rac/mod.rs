mod types;

pub use types::{ConnectionTokensListParams, EndpointsListParams};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

/// Remote access (RAC) endpoints and connection tokens.
#[derive(Clone)]
pub struct RacApi {
    client: Arc<HttpClient>,
}

impl RacApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn connection_tokens_list(
        &self,
        params: &ConnectionTokensListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("rac/connection_tokens/", params, paging).await
    }

    pub async fn connection_tokens_retrieve(
        &self,
        connection_token_uuid: &str,
    ) -> ApiResult<Value> {
        self.client.get(&format!("rac/connection_tokens/{}/", connection_token_uuid)).await
    }

    pub async fn connection_tokens_update<B: Serialize + ?Sized>(
        &self,
        connection_token_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("rac/connection_tokens/{}/", connection_token_uuid), request).await
    }

    pub async fn connection_tokens_partial_update<B: Serialize + ?Sized>(
        &self,
        connection_token_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .patch(&format!("rac/connection_tokens/{}/", connection_token_uuid), request)
            .await
    }

    pub async fn connection_tokens_destroy(&self, connection_token_uuid: &str) -> ApiResult<()> {
        self.client
            .delete_status(&format!("rac/connection_tokens/{}/", connection_token_uuid))
            .await
    }

    pub async fn connection_tokens_used_by_list(
        &self,
        connection_token_uuid: &str,
    ) -> ApiResult<Value> {
        self.client.get(&format!("rac/connection_tokens/{}/used_by/", connection_token_uuid)).await
    }

    pub async fn endpoints_list(
        &self,
        params: &EndpointsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("rac/endpoints/", params, paging).await
    }

    pub async fn endpoints_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("rac/endpoints/", request).await
    }

    pub async fn endpoints_retrieve(&self, pbm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("rac/endpoints/{}/", pbm_uuid)).await
    }

    pub async fn endpoints_update<B: Serialize + ?Sized>(
        &self,
        pbm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("rac/endpoints/{}/", pbm_uuid), request).await
    }

    pub async fn endpoints_partial_update<B: Serialize + ?Sized>(
        &self,
        pbm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("rac/endpoints/{}/", pbm_uuid), request).await
    }

    pub async fn endpoints_destroy(&self, pbm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("rac/endpoints/{}/", pbm_uuid)).await
    }

    pub async fn endpoints_used_by_list(&self, pbm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("rac/endpoints/{}/used_by/", pbm_uuid)).await
    }
}
