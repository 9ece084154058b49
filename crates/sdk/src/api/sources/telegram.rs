use serde::Serialize;
use serde_json::Value;

use super::{SourcesApi, types::TelegramListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl SourcesApi {
    pub async fn telegram_list(
        &self,
        params: &TelegramListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/telegram/", params, paging).await
    }

    pub async fn telegram_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("sources/telegram/", request).await
    }

    pub async fn telegram_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/telegram/{}/", slug)).await
    }

    pub async fn telegram_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/telegram/{}/", slug), request).await
    }

    pub async fn telegram_partial_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/telegram/{}/", slug), request).await
    }

    pub async fn telegram_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/telegram/{}/", slug)).await
    }

    pub async fn telegram_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/telegram/{}/used_by/", slug)).await
    }
}
