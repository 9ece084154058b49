mod types;

pub use types::{
    PermissionsAssignedByRolesListParams, PermissionsAssignedByUsersListParams,
    PermissionsListParams, PermissionsRolesListParams, PermissionsUsersListParams,
};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

#[derive(Clone)]
pub struct RbacApi {
    client: Arc<HttpClient>,
}

impl RbacApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn initial_permissions_list(
        &self,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("rbac/initial_permissions/", &(), paging).await
    }

    pub async fn initial_permissions_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("rbac/initial_permissions/", request).await
    }

    pub async fn initial_permissions_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("rbac/initial_permissions/{}/", id)).await
    }

    pub async fn initial_permissions_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("rbac/initial_permissions/{}/", id), request).await
    }

    pub async fn initial_permissions_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("rbac/initial_permissions/{}/", id), request).await
    }

    pub async fn initial_permissions_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("rbac/initial_permissions/{}/", id)).await
    }

    pub async fn initial_permissions_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("rbac/initial_permissions/{}/used_by/", id)).await
    }

    pub async fn permissions_list(
        &self,
        params: &PermissionsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("rbac/permissions/", params, paging).await
    }

    pub async fn permissions_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("rbac/permissions/{}/", id)).await
    }

    pub async fn permissions_assigned_by_roles_list(
        &self,
        params: &PermissionsAssignedByRolesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("rbac/permissions/assigned_by_roles/", params, paging).await
    }

    pub async fn permissions_assigned_by_roles_assign<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .post(&format!("rbac/permissions/assigned_by_roles/{}/assign/", uuid), request)
            .await
    }

    pub async fn permissions_assigned_by_roles_unassign_partial_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .patch(&format!("rbac/permissions/assigned_by_roles/{}/unassign/", uuid), request)
            .await
    }

    pub async fn permissions_assigned_by_users_list(
        &self,
        params: &PermissionsAssignedByUsersListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("rbac/permissions/assigned_by_users/", params, paging).await
    }

    pub async fn permissions_assigned_by_users_assign<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .post(&format!("rbac/permissions/assigned_by_users/{}/assign/", id), request)
            .await
    }

    pub async fn permissions_assigned_by_users_unassign_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .patch(&format!("rbac/permissions/assigned_by_users/{}/unassign/", id), request)
            .await
    }

    pub async fn permissions_roles_list(
        &self,
        params: &PermissionsRolesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("rbac/permissions/roles/", params, paging).await
    }

    pub async fn permissions_roles_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("rbac/permissions/roles/{}/", id)).await
    }

    pub async fn permissions_roles_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("rbac/permissions/roles/{}/", id), request).await
    }

    pub async fn permissions_roles_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("rbac/permissions/roles/{}/", id), request).await
    }

    pub async fn permissions_roles_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("rbac/permissions/roles/{}/", id)).await
    }

    pub async fn permissions_users_list(
        &self,
        params: &PermissionsUsersListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("rbac/permissions/users/", params, paging).await
    }

    pub async fn permissions_users_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("rbac/permissions/users/{}/", id)).await
    }

    pub async fn permissions_users_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("rbac/permissions/users/{}/", id), request).await
    }

    pub async fn permissions_users_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("rbac/permissions/users/{}/", id), request).await
    }

    pub async fn permissions_users_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("rbac/permissions/users/{}/", id)).await
    }

    pub async fn roles_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("rbac/roles/", &(), paging).await
    }

    pub async fn roles_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("rbac/roles/", request).await
    }

    pub async fn roles_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("rbac/roles/{}/", uuid)).await
    }

    pub async fn roles_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("rbac/roles/{}/", uuid), request).await
    }

    pub async fn roles_partial_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("rbac/roles/{}/", uuid), request).await
    }

    pub async fn roles_destroy(&self, uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("rbac/roles/{}/", uuid)).await
    }

    pub async fn roles_used_by_list(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("rbac/roles/{}/used_by/", uuid)).await
    }
}
