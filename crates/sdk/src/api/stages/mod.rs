mod authenticator;
mod captcha;
mod consent;
mod deny;
mod dummy;
mod email;
mod identification;
mod invitation;
mod mtls;
mod password;
mod prompt;
mod redirect;
mod source;
mod types;
mod user_delete;
mod user_login;
mod user_logout;
mod user_write;

pub use types::{
    AuthenticatorDuoListParams, AuthenticatorEmailListParams, AuthenticatorEndpointGdtcListParams,
    AuthenticatorSmsListParams, AuthenticatorStaticListParams, AuthenticatorTotpListParams,
    AuthenticatorValidateListParams, AuthenticatorWebauthnDeviceTypesListParams,
    AuthenticatorWebauthnListParams, CaptchaListParams, ConsentListParams, DenyListParams,
    DummyListParams, EmailListParams, IdentificationListParams, InvitationInvitationsListParams,
    InvitationStagesListParams, MtlsListParams, PasswordListParams, PromptPromptsListParams,
    PromptStagesListParams, SourceListParams, UserDeleteListParams, UserLoginListParams,
    UserLogoutListParams, UserWriteListParams,
};

use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::{ApiResult, PaginatedResult, PagingContext}};

#[derive(Clone)]
pub struct StagesApi {
    client: Arc<HttpClient>,
}

impl StagesApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn all_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/all/", &(), paging).await
    }

    pub async fn all_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/all/{}/", stage_uuid)).await
    }

    pub async fn all_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/all/{}/", stage_uuid)).await
    }

    pub async fn all_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/all/{}/used_by/", stage_uuid)).await
    }

    pub async fn all_types_list(&self, paging: &PagingContext) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/all/types/", &(), paging).await
    }

    pub async fn all_user_settings_list(
        &self,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/all/user_settings/", &(), paging).await
    }
}
