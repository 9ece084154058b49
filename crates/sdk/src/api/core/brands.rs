use serde::Serialize;
use serde_json::Value;

use super::{CoreApi, types::BrandsListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl CoreApi {
    pub async fn brands_list(
        &self,
        params: &BrandsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("core/brands/", params, paging).await
    }

    pub async fn brands_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("core/brands/", request).await
    }

    pub async fn brands_retrieve(&self, brand_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/brands/{}/", brand_uuid)).await
    }

    pub async fn brands_update<B: Serialize + ?Sized>(
        &self,
        brand_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("core/brands/{}/", brand_uuid), request).await
    }

    pub async fn brands_partial_update<B: Serialize + ?Sized>(
        &self,
        brand_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("core/brands/{}/", brand_uuid), request).await
    }

    pub async fn brands_destroy(&self, brand_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("core/brands/{}/", brand_uuid)).await
    }

    pub async fn brands_used_by_list(&self, brand_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/brands/{}/used_by/", brand_uuid)).await
    }

    pub async fn brands_current_retrieve(&self) -> ApiResult<Value> {
        self.client.get("core/brands/current/").await
    }
}
