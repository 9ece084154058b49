mod types;

pub use types::{
    InstancesHealthListParams, InstancesListParams, LdapAccessCheckParams, RadiusAccessCheckParams,
    ServiceConnectionsDockerListParams, ServiceConnectionsKubernetesListParams,
};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

#[derive(Clone)]
pub struct OutpostsApi {
    client: Arc<HttpClient>,
}

impl OutpostsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn instances_list(
        &self,
        params: &InstancesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("outposts/instances/", params, paging).await
    }

    pub async fn instances_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("outposts/instances/", request).await
    }

    pub async fn instances_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("outposts/instances/{}/", uuid)).await
    }

    pub async fn instances_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("outposts/instances/{}/", uuid), request).await
    }

    pub async fn instances_partial_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("outposts/instances/{}/", uuid), request).await
    }

    pub async fn instances_destroy(&self, uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("outposts/instances/{}/", uuid)).await
    }

    pub async fn instances_health_list(
        &self,
        uuid: &str,
        params: &InstancesHealthListParams,
    ) -> ApiResult<Value> {
        self.client.get_with_query(&format!("outposts/instances/{}/health/", uuid), params).await
    }

    pub async fn instances_used_by_list(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("outposts/instances/{}/used_by/", uuid)).await
    }

    pub async fn instances_default_settings_retrieve(&self) -> ApiResult<Value> {
        self.client.get("outposts/instances/default_settings/").await
    }

    pub async fn ldap_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("outposts/ldap/", &(), paging).await
    }

    pub async fn ldap_access_check(
        &self,
        id: i32,
        params: &LdapAccessCheckParams,
    ) -> ApiResult<Value> {
        self.client.get_with_query(&format!("outposts/ldap/{}/check_access/", id), params).await
    }

    pub async fn proxy_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("outposts/proxy/", &(), paging).await
    }

    pub async fn radius_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("outposts/radius/", &(), paging).await
    }

    pub async fn radius_access_check(
        &self,
        id: i32,
        params: &RadiusAccessCheckParams,
    ) -> ApiResult<Value> {
        self.client.get_with_query(&format!("outposts/radius/{}/check_access/", id), params).await
    }

    pub async fn service_connections_all_list(
        &self,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("outposts/service_connections/all/", &(), paging).await
    }

    pub async fn service_connections_all_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("outposts/service_connections/all/{}/", uuid)).await
    }

    pub async fn service_connections_all_destroy(&self, uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("outposts/service_connections/all/{}/", uuid)).await
    }

    pub async fn service_connections_all_state_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("outposts/service_connections/all/{}/state/", uuid)).await
    }

    pub async fn service_connections_all_used_by_list(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("outposts/service_connections/all/{}/used_by/", uuid)).await
    }

    pub async fn service_connections_all_types_list(
        &self,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("outposts/service_connections/all/types/", &(), paging).await
    }

    pub async fn service_connections_docker_list(
        &self,
        params: &ServiceConnectionsDockerListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("outposts/service_connections/docker/", params, paging).await
    }

    pub async fn service_connections_docker_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("outposts/service_connections/docker/", request).await
    }

    pub async fn service_connections_docker_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("outposts/service_connections/docker/{}/", uuid)).await
    }

    pub async fn service_connections_docker_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("outposts/service_connections/docker/{}/", uuid), request).await
    }

    pub async fn service_connections_docker_partial_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("outposts/service_connections/docker/{}/", uuid), request).await
    }

    pub async fn service_connections_docker_destroy(&self, uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("outposts/service_connections/docker/{}/", uuid)).await
    }

    pub async fn service_connections_docker_used_by_list(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("outposts/service_connections/docker/{}/used_by/", uuid)).await
    }

    pub async fn service_connections_kubernetes_list(
        &self,
        params: &ServiceConnectionsKubernetesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("outposts/service_connections/kubernetes/", params, paging).await
    }

    pub async fn service_connections_kubernetes_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("outposts/service_connections/kubernetes/", request).await
    }

    pub async fn service_connections_kubernetes_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("outposts/service_connections/kubernetes/{}/", uuid)).await
    }

    pub async fn service_connections_kubernetes_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .put(&format!("outposts/service_connections/kubernetes/{}/", uuid), request)
            .await
    }

    pub async fn service_connections_kubernetes_partial_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .patch(&format!("outposts/service_connections/kubernetes/{}/", uuid), request)
            .await
    }

    pub async fn service_connections_kubernetes_destroy(&self, uuid: &str) -> ApiResult<()> {
        self.client
            .delete_status(&format!("outposts/service_connections/kubernetes/{}/", uuid))
            .await
    }

    pub async fn service_connections_kubernetes_used_by_list(
        &self,
        uuid: &str,
    ) -> ApiResult<Value> {
        self.client.get(&format!("outposts/service_connections/kubernetes/{}/used_by/", uuid)).await
    }
}
