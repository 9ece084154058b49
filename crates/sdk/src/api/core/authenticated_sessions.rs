use serde_json::Value;

use super::{CoreApi, types::AuthenticatedSessionsListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl CoreApi {
    pub async fn authenticated_sessions_list(
        &self,
        params: &AuthenticatedSessionsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("core/authenticated_sessions/", params, paging).await
    }

    pub async fn authenticated_sessions_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/authenticated_sessions/{}/", uuid)).await
    }

    pub async fn authenticated_sessions_destroy(&self, uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("core/authenticated_sessions/{}/", uuid)).await
    }

    pub async fn authenticated_sessions_used_by_list(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/authenticated_sessions/{}/used_by/", uuid)).await
    }
}
