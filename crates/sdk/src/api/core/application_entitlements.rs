use serde::Serialize;
use serde_json::Value;

use super::{CoreApi, types::ApplicationEntitlementsListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl CoreApi {
    pub async fn application_entitlements_list(
        &self,
        params: &ApplicationEntitlementsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("core/application_entitlements/", params, paging).await
    }

    pub async fn application_entitlements_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("core/application_entitlements/", request).await
    }

    pub async fn application_entitlements_retrieve(&self, pbm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/application_entitlements/{}/", pbm_uuid)).await
    }

    pub async fn application_entitlements_update<B: Serialize + ?Sized>(
        &self,
        pbm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("core/application_entitlements/{}/", pbm_uuid), request).await
    }

    pub async fn application_entitlements_partial_update<B: Serialize + ?Sized>(
        &self,
        pbm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("core/application_entitlements/{}/", pbm_uuid), request).await
    }

    pub async fn application_entitlements_destroy(&self, pbm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("core/application_entitlements/{}/", pbm_uuid)).await
    }

    pub async fn application_entitlements_used_by_list(&self, pbm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("core/application_entitlements/{}/used_by/", pbm_uuid)).await
    }
}
