use serde::Serialize;
use serde_json::Value;

use super::{AuthenticatorsApi, types::AdminAllListParams};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl AuthenticatorsApi {
    pub async fn admin_all_list(
        &self,
        params: &AdminAllListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/admin/all/", params, paging).await
    }

    pub async fn admin_duo_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/admin/duo/", &(), paging).await
    }

    pub async fn admin_duo_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("authenticators/admin/duo/", request).await
    }

    pub async fn admin_duo_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/admin/duo/{}/", id)).await
    }

    pub async fn admin_duo_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/admin/duo/{}/", id), request).await
    }

    pub async fn admin_duo_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/admin/duo/{}/", id), request).await
    }

    pub async fn admin_duo_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/admin/duo/{}/", id)).await
    }

    pub async fn admin_email_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/admin/email/", &(), paging).await
    }

    pub async fn admin_email_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("authenticators/admin/email/", request).await
    }

    pub async fn admin_email_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/admin/email/{}/", id)).await
    }

    pub async fn admin_email_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/admin/email/{}/", id), request).await
    }

    pub async fn admin_email_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/admin/email/{}/", id), request).await
    }

    pub async fn admin_email_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/admin/email/{}/", id)).await
    }

    pub async fn admin_endpoint_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/admin/endpoint/", &(), paging).await
    }

    pub async fn admin_endpoint_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("authenticators/admin/endpoint/", request).await
    }

    pub async fn admin_endpoint_retrieve(&self, uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/admin/endpoint/{}/", uuid)).await
    }

    pub async fn admin_endpoint_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/admin/endpoint/{}/", uuid), request).await
    }

    pub async fn admin_endpoint_partial_update<B: Serialize + ?Sized>(
        &self,
        uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/admin/endpoint/{}/", uuid), request).await
    }

    pub async fn admin_endpoint_destroy(&self, uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/admin/endpoint/{}/", uuid)).await
    }

    pub async fn admin_sms_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/admin/sms/", &(), paging).await
    }

    pub async fn admin_sms_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("authenticators/admin/sms/", request).await
    }

    pub async fn admin_sms_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/admin/sms/{}/", id)).await
    }

    pub async fn admin_sms_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/admin/sms/{}/", id), request).await
    }

    pub async fn admin_sms_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/admin/sms/{}/", id), request).await
    }

    pub async fn admin_sms_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/admin/sms/{}/", id)).await
    }

    pub async fn admin_static_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/admin/static/", &(), paging).await
    }

    pub async fn admin_static_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("authenticators/admin/static/", request).await
    }

    pub async fn admin_static_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/admin/static/{}/", id)).await
    }

    pub async fn admin_static_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/admin/static/{}/", id), request).await
    }

    pub async fn admin_static_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/admin/static/{}/", id), request).await
    }

    pub async fn admin_static_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/admin/static/{}/", id)).await
    }

    pub async fn admin_totp_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/admin/totp/", &(), paging).await
    }

    pub async fn admin_totp_create<B: Serialize + ?Sized>(&self, request: &B) -> ApiResult<Value> {
        self.client.post("authenticators/admin/totp/", request).await
    }

    pub async fn admin_totp_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/admin/totp/{}/", id)).await
    }

    pub async fn admin_totp_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/admin/totp/{}/", id), request).await
    }

    pub async fn admin_totp_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/admin/totp/{}/", id), request).await
    }

    pub async fn admin_totp_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/admin/totp/{}/", id)).await
    }

    pub async fn admin_webauthn_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("authenticators/admin/webauthn/", &(), paging).await
    }

    pub async fn admin_webauthn_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("authenticators/admin/webauthn/", request).await
    }

    pub async fn admin_webauthn_retrieve(&self, id: i32) -> ApiResult<Value> {
        self.client.get(&format!("authenticators/admin/webauthn/{}/", id)).await
    }

    pub async fn admin_webauthn_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("authenticators/admin/webauthn/{}/", id), request).await
    }

    pub async fn admin_webauthn_partial_update<B: Serialize + ?Sized>(
        &self,
        id: i32,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("authenticators/admin/webauthn/{}/", id), request).await
    }

    pub async fn admin_webauthn_destroy(&self, id: i32) -> ApiResult<()> {
        self.client.delete_status(&format!("authenticators/admin/webauthn/{}/", id)).await
    }
}
