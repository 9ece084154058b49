mod types;

pub use types::{
    EventsListParams, EventsTopPerUserListParams, EventsVolumeListParams, NotificationsListParams,
    RulesListParams, TransportsListParams,
};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

/// Audit events, notifications, notification rules and transports.
#[derive(Clone)]
pub struct EventsApi {
    client: Arc<HttpClient>,
}

impl EventsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn events_list(
        &self,
        params: &EventsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("events/events/", params, paging).await
    }

    pub async fn events_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("events/events/", request).await
    }

    pub async fn events_retrieve(&self, event_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("events/events/{}/", event_uuid)).await
    }

    pub async fn events_update<B: Serialize + ?Sized>(
        &self,
        event_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("events/events/{}/", event_uuid), request).await
    }

    pub async fn events_partial_update<B: Serialize + ?Sized>(
        &self,
        event_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("events/events/{}/", event_uuid), request).await
    }

    pub async fn events_destroy(&self, event_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("events/events/{}/", event_uuid)).await
    }

    pub async fn events_actions_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("events/events/actions/", &(), paging).await
    }

    pub async fn events_top_per_user_list(
        &self,
        params: &EventsTopPerUserListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("events/events/top_per_user/", params, paging).await
    }

    pub async fn events_volume_list(
        &self,
        params: &EventsVolumeListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("events/events/volume/", params, paging).await
    }

    pub async fn notifications_list(
        &self,
        params: &NotificationsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("events/notifications/", params, paging).await
    }

    pub async fn notifications_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("events/notifications/{}/", uuid)).await
    }

    pub async fn notifications_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("events/notifications/{}/", uuid), request).await
    }

    pub async fn notifications_partial_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("events/notifications/{}/", uuid), request).await
    }

    pub async fn notifications_destroy(&self, uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("events/notifications/{}/", uuid)).await
    }

    pub async fn notifications_used_by_list(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("events/notifications/{}/used_by/", uuid)).await
    }

    pub async fn notifications_mark_all_seen_create(&self) -> ApiResult<Value> {
        self.client.post_empty("events/notifications/mark_all_seen/").await
    }

    pub async fn rules_list(
        &self,
        params: &RulesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("events/rules/", params, paging).await
    }

    pub async fn rules_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("events/rules/", request).await
    }

    pub async fn rules_retrieve(&self, pbm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("events/rules/{}/", pbm_uuid)).await
    }

    pub async fn rules_update<B: Serialize + ?Sized>(
        &self,
        pbm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("events/rules/{}/", pbm_uuid), request).await
    }

    pub async fn rules_partial_update<B: Serialize + ?Sized>(
        &self,
        pbm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("events/rules/{}/", pbm_uuid), request).await
    }

    pub async fn rules_destroy(&self, pbm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("events/rules/{}/", pbm_uuid)).await
    }

    pub async fn rules_used_by_list(&self, pbm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("events/rules/{}/used_by/", pbm_uuid)).await
    }

    pub async fn transports_list(
        &self,
        params: &TransportsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("events/transports/", params, paging).await
    }

    pub async fn transports_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("events/transports/", request).await
    }

    pub async fn transports_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("events/transports/{}/", uuid)).await
    }

    pub async fn transports_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("events/transports/{}/", uuid), request).await
    }

    pub async fn transports_partial_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("events/transports/{}/", uuid), request).await
    }

    pub async fn transports_destroy(&self, uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("events/transports/{}/", uuid)).await
    }

    pub async fn transports_test_create(&self, uuid: &str) -> ApiResult<Value> {
        self.client.post_empty(&format!("events/transports/{}/test/", uuid)).await
    }

    pub async fn transports_used_by_list(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("events/transports/{}/used_by/", uuid)).await
    }
}
