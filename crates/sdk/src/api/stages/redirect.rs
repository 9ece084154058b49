use serde::Serialize;
use serde_json::Value;

use super::StagesApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn redirect_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/redirect/", &(), paging).await
    }

    pub async fn redirect_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/redirect/", request).await
    }

    pub async fn redirect_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/redirect/{}/", stage_uuid)).await
    }

    pub async fn redirect_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/redirect/{}/", stage_uuid), request).await
    }

    pub async fn redirect_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/redirect/{}/", stage_uuid), request).await
    }

    pub async fn redirect_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/redirect/{}/", stage_uuid)).await
    }

    pub async fn redirect_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/redirect/{}/used_by/", stage_uuid)).await
    }
}
