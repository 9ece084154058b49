mod types;

pub use types::{AccessTokensListParams, AuthorizationCodesListParams, RefreshTokensListParams};

use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

/// Tokens and authorization codes issued by OAuth2 providers.
#[derive(Clone)]
pub struct OAuth2Api {
    client: Arc<HttpClient>,
}

impl OAuth2Api {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn access_tokens_list(
        &self,
        params: &AccessTokensListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("oauth2/access_tokens/", params, paging).await
    }

    pub async fn access_tokens_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("oauth2/access_tokens/{}/", id)).await
    }

    pub async fn access_tokens_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("oauth2/access_tokens/{}/", id)).await
    }

    pub async fn access_tokens_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("oauth2/access_tokens/{}/used_by/", id)).await
    }

    pub async fn authorization_codes_list(
        &self,
        params: &AuthorizationCodesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("oauth2/authorization_codes/", params, paging).await
    }

    pub async fn authorization_codes_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("oauth2/authorization_codes/{}/", id)).await
    }

    pub async fn authorization_codes_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("oauth2/authorization_codes/{}/", id)).await
    }

    pub async fn authorization_codes_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("oauth2/authorization_codes/{}/used_by/", id)).await
    }

    pub async fn refresh_tokens_list(
        &self,
        params: &RefreshTokensListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("oauth2/refresh_tokens/", params, paging).await
    }

    pub async fn refresh_tokens_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("oauth2/refresh_tokens/{}/", id)).await
    }

    pub async fn refresh_tokens_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("oauth2/refresh_tokens/{}/", id)).await
    }

    pub async fn refresh_tokens_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("oauth2/refresh_tokens/{}/used_by/", id)).await
    }
}
