use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::EmailListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn email_list(
        &self,
        params: &EmailListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/email/", params, paging).await
    }

    pub async fn email_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/email/", request).await
    }

    pub async fn email_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/email/{}/", stage_uuid)).await
    }

    pub async fn email_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/email/{}/", stage_uuid), request).await
    }

    pub async fn email_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/email/{}/", stage_uuid), request).await
    }

    pub async fn email_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/email/{}/", stage_uuid)).await
    }

    pub async fn email_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/email/{}/used_by/", stage_uuid)).await
    }

    pub async fn email_templates_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/email/templates/", &(), paging).await
    }
}
