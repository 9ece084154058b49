use serde::Serialize;
use serde_json::Value;

use super::{CoreApi, types::{ApplicationsCheckAccessRetrieveParams, ApplicationsListParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl CoreApi {
    pub async fn applications_list(
        &self,
        params: &ApplicationsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("core/applications/", params, paging).await
    }

    pub async fn applications_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("core/applications/", request).await
    }

    pub async fn applications_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/applications/{}/", slug)).await
    }

    pub async fn applications_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("core/applications/{}/", slug), request).await
    }

    pub async fn applications_partial_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("core/applications/{}/", slug), request).await
    }

    pub async fn applications_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("core/applications/{}/", slug)).await
    }

    pub async fn applications_check_access_retrieve(
        &self,
        slug: &str,
        params: &ApplicationsCheckAccessRetrieveParams,
    ) -> ApiResult<Value> {
        self.client
            .get_with_query(&format!("core/applications/{}/check_access/", slug), params)
            .await
    }

    pub async fn applications_set_icon_create(&self, slug: &str) -> ApiResult<Value> {
        self.client.post_empty(&format!("core/applications/{}/set_icon/", slug)).await
    }

    pub async fn applications_set_icon_url_create<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post(&format!("core/applications/{}/set_icon_url/", slug), request).await
    }

    pub async fn applications_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/applications/{}/used_by/", slug)).await
    }
}
