mod types;

pub use types::{
    CertificatekeypairsListParams, CertificatekeypairsViewCertificateRetrieveParams,
    CertificatekeypairsViewPrivateKeyRetrieveParams,
};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

/// Certificate-key pairs.
#[derive(Clone)]
pub struct CryptoApi {
    client: Arc<HttpClient>,
}

impl CryptoApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn certificatekeypairs_list(
        &self,
        params: &CertificatekeypairsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("crypto/certificatekeypairs/", params, paging).await
    }

    pub async fn certificatekeypairs_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("crypto/certificatekeypairs/", request).await
    }

    pub async fn certificatekeypairs_generate_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("crypto/certificatekeypairs/generate/", request).await
    }

    pub async fn certificatekeypairs_retrieve(&self, kp_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("crypto/certificatekeypairs/{}/", kp_uuid)).await
    }

    pub async fn certificatekeypairs_update<B: Serialize + ?Sized>(
        &self,
        kp_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("crypto/certificatekeypairs/{}/", kp_uuid), request).await
    }

    pub async fn certificatekeypairs_partial_update<B: Serialize + ?Sized>(
        &self,
        kp_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("crypto/certificatekeypairs/{}/", kp_uuid), request).await
    }

    pub async fn certificatekeypairs_destroy(&self, kp_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("crypto/certificatekeypairs/{}/", kp_uuid)).await
    }

    pub async fn certificatekeypairs_used_by_list(&self, kp_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("crypto/certificatekeypairs/{}/used_by/", kp_uuid)).await
    }

    pub async fn certificatekeypairs_view_certificate_retrieve(
        &self,
        kp_uuid: &str,
        params: &CertificatekeypairsViewCertificateRetrieveParams,
    ) -> ApiResult<Value> {
        self.client
            .get_with_query(
                &format!("crypto/certificatekeypairs/{}/view_certificate/", kp_uuid),
                params,
            )
            .await
    }

    pub async fn certificatekeypairs_view_private_key_retrieve(
        &self,
        kp_uuid: &str,
        params: &CertificatekeypairsViewPrivateKeyRetrieveParams,
    ) -> ApiResult<Value> {
        self.client
            .get_with_query(
                &format!("crypto/certificatekeypairs/{}/view_private_key/", kp_uuid),
                params,
            )
            .await
    }
}
