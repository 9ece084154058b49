use serde_json::Value;

use super::{CoreApi, types::UserConsentListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl CoreApi {
    pub async fn user_consent_list(
        &self,
        params: &UserConsentListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("core/user_consent/", params, paging).await
    }

    pub async fn user_consent_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("core/user_consent/{}/", id)).await
    }

    pub async fn user_consent_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("core/user_consent/{}/", id)).await
    }

    pub async fn user_consent_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("core/user_consent/{}/used_by/", id)).await
    }
}
