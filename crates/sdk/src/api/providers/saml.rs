use serde::Serialize;
use serde_json::Value;

use super::{
    ProvidersApi,
    types::{SamlListParams, SamlMetadataRetrieveParams, SamlPreviewUserRetrieveParams},
};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl ProvidersApi {
    pub async fn saml_list(
        &self,
        params: &SamlListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("providers/saml/", params, paging).await
    }

    pub async fn saml_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("providers/saml/", request).await
    }

    pub async fn saml_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/saml/{}/", id)).await
    }

    pub async fn saml_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("providers/saml/{}/", id), request).await
    }

    pub async fn saml_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("providers/saml/{}/", id), request).await
    }

    pub async fn saml_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("providers/saml/{}/", id)).await
    }

    pub async fn saml_metadata_retrieve(
        &self,
        id: i32,
        params: &SamlMetadataRetrieveParams,
    ) -> ApiResult<Value> {
        self.client.get_with_query(&format!("providers/saml/{}/metadata/", id), params).await
    }

    pub async fn saml_preview_user_retrieve(
        &self,
        id: i32,
        params: &SamlPreviewUserRetrieveParams,
    ) -> ApiResult<Value> {
        self.client.get_with_query(&format!("providers/saml/{}/preview_user/", id), params).await
    }

    pub async fn saml_used_by_list(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("providers/saml/{}/used_by/", id)).await
    }

    pub async fn saml_import_metadata_create(&self) -> ApiResult<Value> {
        self.client.post_empty("providers/saml/import_metadata/").await
    }
}
