use serde::Serialize;
use serde_json::Value;

use super::PropertyMappingsApi;
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PropertyMappingsApi {
    pub async fn notification_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/notification/", &(), paging).await
    }

    pub async fn notification_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/notification/", request).await
    }

    pub async fn notification_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/notification/{}/", pm_uuid)).await
    }

    pub async fn notification_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/notification/{}/", pm_uuid), request).await
    }

    pub async fn notification_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/notification/{}/", pm_uuid), request).await
    }

    pub async fn notification_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/notification/{}/", pm_uuid)).await
    }

    pub async fn notification_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/notification/{}/used_by/", pm_uuid)).await
    }
}
