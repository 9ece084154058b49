mod application_entitlements;
mod applications;
mod authenticated_sessions;
mod brands;
mod groups;
mod shortcuts;
mod tokens;
mod types;
mod user_consent;
mod users;

pub use types::{
    ApplicationEntitlementsListParams, ApplicationsCheckAccessRetrieveParams,
    ApplicationsListParams, AuthenticatedSessionsListParams, BrandsListParams, GroupsListParams,
    GroupsRetrieveParams, TokensListParams, UserConsentListParams, UsersListParams,
    UsersRecoveryEmailCreateParams,
};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Clone)]
pub struct CoreApi {
    client: Arc<HttpClient>,
}

impl CoreApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn transactional_applications_update<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put("core/transactional/applications/", request).await
    }
}
