use serde::Serialize;
use serde_json::Value;

use super::{
    StagesApi,
    types::{
        AuthenticatorDuoListParams, AuthenticatorEmailListParams,
        AuthenticatorEndpointGdtcListParams, AuthenticatorSmsListParams,
        AuthenticatorStaticListParams, AuthenticatorTotpListParams, AuthenticatorValidateListParams,
        AuthenticatorWebauthnDeviceTypesListParams, AuthenticatorWebauthnListParams,
    },
};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn authenticator_duo_list(
        &self,
        params: &AuthenticatorDuoListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/authenticator/duo/", params, paging).await
    }

    pub async fn authenticator_duo_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/authenticator/duo/", request).await
    }

    pub async fn authenticator_duo_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/duo/{}/", stage_uuid)).await
    }

    pub async fn authenticator_duo_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/authenticator/duo/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_duo_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/authenticator/duo/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_duo_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/authenticator/duo/{}/", stage_uuid)).await
    }

    pub async fn authenticator_duo_enrollment_status_create(
        &self,
        stage_uuid: &str,
    ) -> ApiResult<Value> {
        self.client
            .post_empty(&format!("stages/authenticator/duo/{}/enrollment_status/", stage_uuid))
            .await
    }

    pub async fn authenticator_duo_import_device_manual_create<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .post(
                &format!("stages/authenticator/duo/{}/import_device_manual/", stage_uuid),
                request,
            )
            .await
    }

    pub async fn authenticator_duo_import_devices_automatic_create(
        &self,
        stage_uuid: &str,
    ) -> ApiResult<Value> {
        self.client
            .post_empty(
                &format!("stages/authenticator/duo/{}/import_devices_automatic/", stage_uuid),
            )
            .await
    }

    pub async fn authenticator_duo_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/duo/{}/used_by/", stage_uuid)).await
    }

    pub async fn authenticator_email_list(
        &self,
        params: &AuthenticatorEmailListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/authenticator/email/", params, paging).await
    }

    pub async fn authenticator_email_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/authenticator/email/", request).await
    }

    pub async fn authenticator_email_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/email/{}/", stage_uuid)).await
    }

    pub async fn authenticator_email_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/authenticator/email/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_email_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/authenticator/email/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_email_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/authenticator/email/{}/", stage_uuid)).await
    }

    pub async fn authenticator_email_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/email/{}/used_by/", stage_uuid)).await
    }

    pub async fn authenticator_endpoint_gdtc_list(
        &self,
        params: &AuthenticatorEndpointGdtcListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/authenticator/endpoint_gdtc/", params, paging).await
    }

    pub async fn authenticator_endpoint_gdtc_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/authenticator/endpoint_gdtc/", request).await
    }

    pub async fn authenticator_endpoint_gdtc_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/endpoint_gdtc/{}/", stage_uuid)).await
    }

    pub async fn authenticator_endpoint_gdtc_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .put(&format!("stages/authenticator/endpoint_gdtc/{}/", stage_uuid), request)
            .await
    }

    pub async fn authenticator_endpoint_gdtc_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client
            .patch(&format!("stages/authenticator/endpoint_gdtc/{}/", stage_uuid), request)
            .await
    }

    pub async fn authenticator_endpoint_gdtc_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client
            .delete_status(&format!("stages/authenticator/endpoint_gdtc/{}/", stage_uuid))
            .await
    }

    pub async fn authenticator_endpoint_gdtc_used_by_list(
        &self,
        stage_uuid: &str,
    ) -> ApiResult<Value> {
        self.client
            .get(&format!("stages/authenticator/endpoint_gdtc/{}/used_by/", stage_uuid))
            .await
    }

    pub async fn authenticator_sms_list(
        &self,
        params: &AuthenticatorSmsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/authenticator/sms/", params, paging).await
    }

    pub async fn authenticator_sms_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/authenticator/sms/", request).await
    }

    pub async fn authenticator_sms_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/sms/{}/", stage_uuid)).await
    }

    pub async fn authenticator_sms_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/authenticator/sms/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_sms_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/authenticator/sms/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_sms_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/authenticator/sms/{}/", stage_uuid)).await
    }

    pub async fn authenticator_sms_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/sms/{}/used_by/", stage_uuid)).await
    }

    pub async fn authenticator_static_list(
        &self,
        params: &AuthenticatorStaticListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/authenticator/static/", params, paging).await
    }

    pub async fn authenticator_static_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/authenticator/static/", request).await
    }

    pub async fn authenticator_static_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/static/{}/", stage_uuid)).await
    }

    pub async fn authenticator_static_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/authenticator/static/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_static_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/authenticator/static/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_static_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/authenticator/static/{}/", stage_uuid)).await
    }

    pub async fn authenticator_static_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/static/{}/used_by/", stage_uuid)).await
    }

    pub async fn authenticator_totp_list(
        &self,
        params: &AuthenticatorTotpListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/authenticator/totp/", params, paging).await
    }

    pub async fn authenticator_totp_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/authenticator/totp/", request).await
    }

    pub async fn authenticator_totp_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/totp/{}/", stage_uuid)).await
    }

    pub async fn authenticator_totp_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/authenticator/totp/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_totp_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/authenticator/totp/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_totp_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/authenticator/totp/{}/", stage_uuid)).await
    }

    pub async fn authenticator_totp_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/totp/{}/used_by/", stage_uuid)).await
    }

    pub async fn authenticator_validate_list(
        &self,
        params: &AuthenticatorValidateListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/authenticator/validate/", params, paging).await
    }

    pub async fn authenticator_validate_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/authenticator/validate/", request).await
    }

    pub async fn authenticator_validate_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/validate/{}/", stage_uuid)).await
    }

    pub async fn authenticator_validate_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/authenticator/validate/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_validate_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/authenticator/validate/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_validate_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/authenticator/validate/{}/", stage_uuid)).await
    }

    pub async fn authenticator_validate_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/validate/{}/used_by/", stage_uuid)).await
    }

    pub async fn authenticator_webauthn_list(
        &self,
        params: &AuthenticatorWebauthnListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/authenticator/webauthn/", params, paging).await
    }

    pub async fn authenticator_webauthn_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/authenticator/webauthn/", request).await
    }

    pub async fn authenticator_webauthn_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/webauthn/{}/", stage_uuid)).await
    }

    pub async fn authenticator_webauthn_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/authenticator/webauthn/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_webauthn_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/authenticator/webauthn/{}/", stage_uuid), request).await
    }

    pub async fn authenticator_webauthn_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/authenticator/webauthn/{}/", stage_uuid)).await
    }

    pub async fn authenticator_webauthn_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/webauthn/{}/used_by/", stage_uuid)).await
    }

    pub async fn authenticator_webauthn_device_types_list(
        &self,
        params: &AuthenticatorWebauthnDeviceTypesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/authenticator/webauthn_device_types/", params, paging).await
    }

    pub async fn authenticator_webauthn_device_types_retrieve(
        &self,
        aaguid: &str,
    ) -> ApiResult<Value> {
        self.client.get(&format!("stages/authenticator/webauthn_device_types/{}/", aaguid)).await
    }
}
