use serde::Serialize;
use serde_json::Value;

use super::{
    PropertyMappingsApi,
    types::{
        ProviderGoogleWorkspaceListParams, ProviderMicrosoftEntraListParams, ProviderRacListParams,
        ProviderRadiusListParams, ProviderSamlListParams, ProviderScimListParams,
        ProviderScopeListParams,
    },
};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl PropertyMappingsApi {
    pub async fn provider_google_workspace_list(
        &self,
        params: &ProviderGoogleWorkspaceListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/provider/google_workspace/", params, paging).await
    }

    pub async fn provider_google_workspace_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/provider/google_workspace/", request).await
    }

    pub async fn provider_google_workspace_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/google_workspace/{}/", pm_uuid)).await
    }

    pub async fn provider_google_workspace_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .put(&format!("propertymappings/provider/google_workspace/{}/", pm_uuid), request)
            .await
    }

    pub async fn provider_google_workspace_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .patch(&format!("propertymappings/provider/google_workspace/{}/", pm_uuid), request)
            .await
    }

    pub async fn provider_google_workspace_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client
            .delete_status(&format!("propertymappings/provider/google_workspace/{}/", pm_uuid))
            .await
    }

    pub async fn provider_google_workspace_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client
            .get(&format!("propertymappings/provider/google_workspace/{}/used_by/", pm_uuid))
            .await
    }

    pub async fn provider_microsoft_entra_list(
        &self,
        params: &ProviderMicrosoftEntraListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/provider/microsoft_entra/", params, paging).await
    }

    pub async fn provider_microsoft_entra_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/provider/microsoft_entra/", request).await
    }

    pub async fn provider_microsoft_entra_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/microsoft_entra/{}/", pm_uuid)).await
    }

    pub async fn provider_microsoft_entra_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .put(&format!("propertymappings/provider/microsoft_entra/{}/", pm_uuid), request)
            .await
    }

    pub async fn provider_microsoft_entra_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .patch(&format!("propertymappings/provider/microsoft_entra/{}/", pm_uuid), request)
            .await
    }

    pub async fn provider_microsoft_entra_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client
            .delete_status(&format!("propertymappings/provider/microsoft_entra/{}/", pm_uuid))
            .await
    }

    pub async fn provider_microsoft_entra_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client
            .get(&format!("propertymappings/provider/microsoft_entra/{}/used_by/", pm_uuid))
            .await
    }

    pub async fn provider_rac_list(
        &self,
        params: &ProviderRacListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/provider/rac/", params, paging).await
    }

    pub async fn provider_rac_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/provider/rac/", request).await
    }

    pub async fn provider_rac_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/rac/{}/", pm_uuid)).await
    }

    pub async fn provider_rac_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/provider/rac/{}/", pm_uuid), request).await
    }

    pub async fn provider_rac_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/provider/rac/{}/", pm_uuid), request).await
    }

    pub async fn provider_rac_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/provider/rac/{}/", pm_uuid)).await
    }

    pub async fn provider_rac_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/rac/{}/used_by/", pm_uuid)).await
    }

    pub async fn provider_radius_list(
        &self,
        params: &ProviderRadiusListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/provider/radius/", params, paging).await
    }

    pub async fn provider_radius_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/provider/radius/", request).await
    }

    pub async fn provider_radius_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/radius/{}/", pm_uuid)).await
    }

    pub async fn provider_radius_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/provider/radius/{}/", pm_uuid), request).await
    }

    pub async fn provider_radius_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/provider/radius/{}/", pm_uuid), request).await
    }

    pub async fn provider_radius_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/provider/radius/{}/", pm_uuid)).await
    }

    pub async fn provider_radius_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/radius/{}/used_by/", pm_uuid)).await
    }

    pub async fn provider_saml_list(
        &self,
        params: &ProviderSamlListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/provider/saml/", params, paging).await
    }

    pub async fn provider_saml_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/provider/saml/", request).await
    }

    pub async fn provider_saml_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/saml/{}/", pm_uuid)).await
    }

    pub async fn provider_saml_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/provider/saml/{}/", pm_uuid), request).await
    }

    pub async fn provider_saml_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/provider/saml/{}/", pm_uuid), request).await
    }

    pub async fn provider_saml_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/provider/saml/{}/", pm_uuid)).await
    }

    pub async fn provider_saml_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/saml/{}/used_by/", pm_uuid)).await
    }

    pub async fn provider_scim_list(
        &self,
        params: &ProviderScimListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/provider/scim/", params, paging).await
    }

    pub async fn provider_scim_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/provider/scim/", request).await
    }

    pub async fn provider_scim_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/scim/{}/", pm_uuid)).await
    }

    pub async fn provider_scim_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/provider/scim/{}/", pm_uuid), request).await
    }

    pub async fn provider_scim_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/provider/scim/{}/", pm_uuid), request).await
    }

    pub async fn provider_scim_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/provider/scim/{}/", pm_uuid)).await
    }

    pub async fn provider_scim_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/scim/{}/used_by/", pm_uuid)).await
    }

    pub async fn provider_scope_list(
        &self,
        params: &ProviderScopeListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("propertymappings/provider/scope/", params, paging).await
    }

    pub async fn provider_scope_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("propertymappings/provider/scope/", request).await
    }

    pub async fn provider_scope_retrieve(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/scope/{}/", pm_uuid)).await
    }

    pub async fn provider_scope_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("propertymappings/provider/scope/{}/", pm_uuid), request).await
    }

    pub async fn provider_scope_partial_update<B: Serialize + ?Sized>(
        &self,
        pm_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("propertymappings/provider/scope/{}/", pm_uuid), request).await
    }

    pub async fn provider_scope_destroy(&self, pm_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("propertymappings/provider/scope/{}/", pm_uuid)).await
    }

    pub async fn provider_scope_used_by_list(&self, pm_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("propertymappings/provider/scope/{}/used_by/", pm_uuid)).await
    }
}
