mod types;

pub use types::{SchedulesListParams, TasksListParams};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

/// Background task schedules, task history and worker status.
#[derive(Clone)]
pub struct TasksApi {
    client: Arc<HttpClient>,
}

impl TasksApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn schedules_list(
        &self,
        params: &SchedulesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("tasks/schedules/", params, paging).await
    }

    pub async fn schedules_retrieve(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("tasks/schedules/{}/", id)).await
    }

    pub async fn schedules_update<B: Serialize + ?Sized>(
        &self,
        id: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("tasks/schedules/{}/", id), request).await
    }

    pub async fn schedules_partial_update<B: Serialize + ?Sized>(
        &self,
        id: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("tasks/schedules/{}/", id), request).await
    }

    pub async fn schedules_send_create(&self, id: &str) -> ApiResult<Value> {
        self.client.post_empty(&format!("tasks/schedules/{}/send/", id)).await
    }

    pub async fn tasks_list(
        &self,
        params: &TasksListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("tasks/tasks/", params, paging).await
    }

    pub async fn tasks_retrieve(&self, message_id: &str) -> ApiResult<Value> {
        self.client.get(&format!("tasks/tasks/{}/", message_id)).await
    }

    pub async fn tasks_retry_create(&self, message_id: &str) -> ApiResult<Value> {
        self.client.post_empty(&format!("tasks/tasks/{}/retry/", message_id)).await
    }

    pub async fn tasks_status_retrieve(&self) -> ApiResult<Value> {
        self.client.get("tasks/tasks/status/").await
    }

    pub async fn workers_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("tasks/workers", &(), paging).await
    }
}
