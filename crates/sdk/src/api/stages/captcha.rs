use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::CaptchaListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn captcha_list(
        &self,
        params: &CaptchaListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/captcha/", params, paging).await
    }

    pub async fn captcha_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("stages/captcha/", request).await
    }

    pub async fn captcha_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/captcha/{}/", stage_uuid)).await
    }

    pub async fn captcha_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/captcha/{}/", stage_uuid), request).await
    }

    pub async fn captcha_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/captcha/{}/", stage_uuid), request).await
    }

    pub async fn captcha_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/captcha/{}/", stage_uuid)).await
    }

    pub async fn captcha_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/captcha/{}/used_by/", stage_uuid)).await
    }
}
