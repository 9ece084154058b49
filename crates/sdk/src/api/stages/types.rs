use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatorDuoListParams {
    pub api_hostname: Option<String>,
    pub client_id: Option<String>,
    pub configure_flow: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatorEmailListParams {
    pub configure_flow: Option<String>,
    pub friendly_name: Option<String>,
    pub from_address: Option<String>,
    pub host: Option<String>,
    pub password: Option<String>,
    pub port: Option<i32>,
    pub stage_uuid: Option<String>,
    pub subject: Option<String>,
    pub template: Option<String>,
    pub timeout: Option<i32>,
    pub token_expiry: Option<String>,
    pub use_global_settings: Option<bool>,
    pub use_ssl: Option<bool>,
    pub use_tls: Option<bool>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatorEndpointGdtcListParams {
    pub configure_flow: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatorSmsListParams {
    pub account_sid: Option<String>,
    pub auth: Option<String>,
    pub auth_password: Option<String>,
    pub auth_type: Option<String>,
    pub configure_flow: Option<String>,
    pub friendly_name: Option<String>,
    pub from_number: Option<String>,
    pub mapping: Option<String>,
    pub provider: Option<String>,
    pub stage_uuid: Option<String>,
    pub verify_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatorStaticListParams {
    pub configure_flow: Option<String>,
    pub friendly_name: Option<String>,
    pub stage_uuid: Option<String>,
    pub token_count: Option<i32>,
    pub token_length: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatorTotpListParams {
    pub configure_flow: Option<String>,
    pub digits: Option<String>,
    pub friendly_name: Option<String>,
    pub stage_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatorValidateListParams {
    pub configuration_stages: Option<String>,
    pub not_configured_action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatorWebauthnListParams {
    pub authenticator_attachment: Option<String>,
    pub configure_flow: Option<String>,
    pub device_type_restrictions: Option<String>,
    pub friendly_name: Option<String>,
    pub max_attempts: Option<i32>,
    pub resident_key_requirement: Option<String>,
    pub stage_uuid: Option<String>,
    pub user_verification: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatorWebauthnDeviceTypesListParams {
    pub aaguid: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CaptchaListParams {
    pub public_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsentListParams {
    pub consent_expire_in: Option<String>,
    pub mode: Option<String>,
    pub stage_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DenyListParams {
    pub deny_message: Option<String>,
    pub stage_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DummyListParams {
    pub stage_uuid: Option<String>,
    pub throw_error: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmailListParams {
    pub activate_user_on_success: Option<bool>,
    pub from_address: Option<String>,
    pub host: Option<String>,
    pub port: Option<i32>,
    pub subject: Option<String>,
    pub template: Option<String>,
    pub timeout: Option<i32>,
    pub token_expiry: Option<String>,
    pub use_global_settings: Option<bool>,
    pub use_ssl: Option<bool>,
    pub use_tls: Option<bool>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IdentificationListParams {
    pub captcha_stage: Option<String>,
    pub case_insensitive_matching: Option<bool>,
    pub enrollment_flow: Option<String>,
    pub password_stage: Option<String>,
    pub passwordless_flow: Option<String>,
    pub recovery_flow: Option<String>,
    pub show_matched_user: Option<bool>,
    pub show_source_labels: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvitationInvitationsListParams {
    #[serde(rename = "created_by__username")]
    pub created_by_username: Option<String>,
    pub expires: Option<String>,
    #[serde(rename = "flow__slug")]
    pub flow_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvitationStagesListParams {
    pub continue_flow_without_invitation: Option<bool>,
    pub no_flows: Option<bool>,
    pub stage_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MtlsListParams {
    pub cert_attribute: Option<String>,
    pub certificate_authorities: Option<String>,
    pub mode: Option<String>,
    pub stage_uuid: Option<String>,
    pub user_attribute: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PasswordListParams {
    pub allow_show_password: Option<bool>,
    pub configure_flow: Option<String>,
    pub failed_attempts_before_cancel: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PromptPromptsListParams {
    pub field_key: Option<String>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub r#type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PromptStagesListParams {
    pub fields: Option<String>,
    pub stage_uuid: Option<String>,
    pub validation_policies: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceListParams {
    pub resume_timeout: Option<String>,
    pub source: Option<String>,
    pub stage_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserDeleteListParams {
    pub stage_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserLoginListParams {
    pub geoip_binding: Option<String>,
    pub network_binding: Option<String>,
    pub remember_device: Option<String>,
    pub remember_me_offset: Option<String>,
    pub session_duration: Option<String>,
    pub stage_uuid: Option<String>,
    pub terminate_other_sessions: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserLogoutListParams {
    pub stage_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserWriteListParams {
    pub create_users_as_inactive: Option<bool>,
    pub create_users_group: Option<String>,
    pub stage_uuid: Option<String>,
    pub user_creation_mode: Option<String>,
    pub user_path_template: Option<String>,
    pub user_type: Option<String>,
}
