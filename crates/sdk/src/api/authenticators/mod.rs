mod admin;
mod duo;
mod email;
mod endpoint;
mod sms;
mod static_tokens;
mod totp;
mod types;
mod webauthn;

pub use types::AdminAllListParams;

use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

/// Authenticator devices and admin-side device management.
#[derive(Clone)]
pub struct AuthenticatorsApi {
    client: Arc<HttpClient>,
}

impl AuthenticatorsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn all_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/all/", &(), paging).await
    }
}
