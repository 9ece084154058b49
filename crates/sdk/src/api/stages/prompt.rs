use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::{PromptPromptsListParams, PromptStagesListParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn prompt_prompts_list(
        &self,
        params: &PromptPromptsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/prompt/prompts/", params, paging).await
    }

    pub async fn prompt_prompts_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/prompt/prompts/", request).await
    }

    pub async fn prompt_prompts_retrieve(&self, prompt_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/prompt/prompts/{}/", prompt_uuid)).await
    }

    pub async fn prompt_prompts_update<B: Serialize + ?Sized>(
        &self,
        prompt_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/prompt/prompts/{}/", prompt_uuid), request).await
    }

    pub async fn prompt_prompts_partial_update<B: Serialize + ?Sized>(
        &self,
        prompt_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/prompt/prompts/{}/", prompt_uuid), request).await
    }

    pub async fn prompt_prompts_destroy(&self, prompt_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/prompt/prompts/{}/", prompt_uuid)).await
    }

    pub async fn prompt_prompts_used_by_list(&self, prompt_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/prompt/prompts/{}/used_by/", prompt_uuid)).await
    }

    pub async fn prompt_prompts_preview_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/prompt/prompts/preview/", request).await
    }

    pub async fn prompt_stages_list(
        &self,
        params: &PromptStagesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/prompt/stages/", params, paging).await
    }

    pub async fn prompt_stages_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/prompt/stages/", request).await
    }

    pub async fn prompt_stages_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/prompt/stages/{}/", stage_uuid)).await
    }

    pub async fn prompt_stages_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/prompt/stages/{}/", stage_uuid), request).await
    }

    pub async fn prompt_stages_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/prompt/stages/{}/", stage_uuid), request).await
    }

    pub async fn prompt_stages_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/prompt/stages/{}/", stage_uuid)).await
    }

    pub async fn prompt_stages_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/prompt/stages/{}/used_by/", stage_uuid)).await
    }
}
