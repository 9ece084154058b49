use serde::Serialize;
use serde_json::Value;

use super::{SourcesApi, types::KerberosListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl SourcesApi {
    pub async fn kerberos_list(
        &self,
        params: &KerberosListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("sources/kerberos/", params, paging).await
    }

    pub async fn kerberos_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("sources/kerberos/", request).await
    }

    pub async fn kerberos_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/kerberos/{}/", slug)).await
    }

    pub async fn kerberos_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("sources/kerberos/{}/", slug), request).await
    }

    pub async fn kerberos_partial_update<B: Serialize + ?Sized>(
        &self,
        slug: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("sources/kerberos/{}/", slug), request).await
    }

    pub async fn kerberos_destroy(&self, slug: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("sources/kerberos/{}/", slug)).await
    }

    pub async fn kerberos_sync_status_retrieve(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/kerberos/{}/sync/status/", slug)).await
    }

    pub async fn kerberos_used_by_list(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("sources/kerberos/{}/used_by/", slug)).await
    }
}
