use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AllListParams {
    #[serde(rename = "application__isnull")]
    pub application_isnull: Option<bool>,
    pub backchannel: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleWorkspaceListParams {
    pub delegated_subject: Option<String>,
    pub exclude_users_service_account: Option<bool>,
    pub filter_group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleWorkspaceGroupsListParams {
    #[serde(rename = "group__group_uuid")]
    pub group_group_uuid: Option<String>,
    #[serde(rename = "group__name")]
    pub group_name: Option<String>,
    #[serde(rename = "provider__id")]
    pub provider_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleWorkspaceUsersListParams {
    #[serde(rename = "provider__id")]
    pub provider_id: Option<i32>,
    #[serde(rename = "user__id")]
    pub user_id: Option<i32>,
    #[serde(rename = "user__username")]
    pub user_username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LdapListParams {
    #[serde(rename = "application__isnull")]
    pub application_isnull: Option<bool>,
    #[serde(rename = "authorization_flow__slug__iexact")]
    pub authorization_flow_slug_iexact: Option<String>,
    #[serde(rename = "base_dn__iexact")]
    pub base_dn_iexact: Option<String>,
    #[serde(rename = "certificate__kp_uuid__iexact")]
    pub certificate_kp_uuid_iexact: Option<String>,
    #[serde(rename = "certificate__name__iexact")]
    pub certificate_name_iexact: Option<String>,
    #[serde(rename = "gid_start_number__iexact")]
    pub gid_start_number_iexact: Option<i32>,
    #[serde(rename = "name__iexact")]
    pub name_iexact: Option<String>,
    #[serde(rename = "tls_server_name__iexact")]
    pub tls_server_name_iexact: Option<String>,
    #[serde(rename = "uid_start_number__iexact")]
    pub uid_start_number_iexact: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MicrosoftEntraListParams {
    pub exclude_users_service_account: Option<bool>,
    pub filter_group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MicrosoftEntraGroupsListParams {
    #[serde(rename = "group__group_uuid")]
    pub group_group_uuid: Option<String>,
    #[serde(rename = "group__name")]
    pub group_name: Option<String>,
    #[serde(rename = "provider__id")]
    pub provider_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MicrosoftEntraUsersListParams {
    #[serde(rename = "provider__id")]
    pub provider_id: Option<i32>,
    #[serde(rename = "user__id")]
    pub user_id: Option<i32>,
    #[serde(rename = "user__username")]
    pub user_username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Oauth2ListParams {
    pub access_code_validity: Option<String>,
    pub access_token_validity: Option<String>,
    pub application: Option<String>,
    pub authorization_flow: Option<String>,
    pub client_id: Option<String>,
    pub client_type: Option<String>,
    pub include_claims_in_id_token: Option<bool>,
    pub issuer_mode: Option<String>,
    pub property_mappings: Option<String>,
    pub refresh_token_validity: Option<String>,
    pub signing_key: Option<String>,
    pub sub_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Oauth2PreviewUserRetrieveParams {
    pub for_user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProxyListParams {
    #[serde(rename = "application__isnull")]
    pub application_isnull: Option<bool>,
    #[serde(rename = "authorization_flow__slug__iexact")]
    pub authorization_flow_slug_iexact: Option<String>,
    #[serde(rename = "basic_auth_enabled__iexact")]
    pub basic_auth_enabled_iexact: Option<bool>,
    #[serde(rename = "basic_auth_password_attribute__iexact")]
    pub basic_auth_password_attribute_iexact: Option<String>,
    #[serde(rename = "basic_auth_user_attribute__iexact")]
    pub basic_auth_user_attribute_iexact: Option<String>,
    #[serde(rename = "certificate__kp_uuid__iexact")]
    pub certificate_kp_uuid_iexact: Option<String>,
    #[serde(rename = "certificate__name__iexact")]
    pub certificate_name_iexact: Option<String>,
    #[serde(rename = "cookie_domain__iexact")]
    pub cookie_domain_iexact: Option<String>,
    #[serde(rename = "external_host__iexact")]
    pub external_host_iexact: Option<String>,
    #[serde(rename = "internal_host__iexact")]
    pub internal_host_iexact: Option<String>,
    #[serde(rename = "internal_host_ssl_validation__iexact")]
    pub internal_host_ssl_validation_iexact: Option<bool>,
    #[serde(rename = "mode__iexact")]
    pub mode_iexact: Option<String>,
    #[serde(rename = "name__iexact")]
    pub name_iexact: Option<String>,
    #[serde(rename = "property_mappings__iexact")]
    pub property_mappings_iexact: Option<String>,
    #[serde(rename = "skip_path_regex__iexact")]
    pub skip_path_regex_iexact: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RacListParams {
    #[serde(rename = "application__isnull")]
    pub application_isnull: Option<bool>,
    #[serde(rename = "name__iexact")]
    pub name_iexact: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RadiusListParams {
    #[serde(rename = "application__isnull")]
    pub application_isnull: Option<bool>,
    #[serde(rename = "authorization_flow__slug__iexact")]
    pub authorization_flow_slug_iexact: Option<String>,
    #[serde(rename = "client_networks__iexact")]
    pub client_networks_iexact: Option<String>,
    #[serde(rename = "name__iexact")]
    pub name_iexact: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SamlListParams {
    pub acs_url: Option<String>,
    pub assertion_valid_not_before: Option<String>,
    pub assertion_valid_not_on_or_after: Option<String>,
    pub audience: Option<String>,
    pub authentication_flow: Option<String>,
    pub authn_context_class_ref_mapping: Option<String>,
    pub authorization_flow: Option<String>,
    pub backchannel_application: Option<String>,
    pub default_name_id_policy: Option<String>,
    pub default_relay_state: Option<String>,
    pub digest_algorithm: Option<String>,
    pub encryption_kp: Option<String>,
    pub invalidation_flow: Option<String>,
    pub is_backchannel: Option<bool>,
    pub issuer: Option<String>,
    pub logout_method: Option<String>,
    pub name_id_mapping: Option<String>,
    pub property_mappings: Option<String>,
    pub session_valid_not_on_or_after: Option<String>,
    pub sign_assertion: Option<bool>,
    pub sign_logout_request: Option<bool>,
    pub sign_response: Option<bool>,
    pub signature_algorithm: Option<String>,
    pub signing_kp: Option<String>,
    pub sls_binding: Option<String>,
    pub sls_url: Option<String>,
    pub sp_binding: Option<String>,
    pub verification_kp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SamlMetadataRetrieveParams {
    pub download: Option<bool>,
    pub force_binding: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SamlPreviewUserRetrieveParams {
    pub for_user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScimListParams {
    pub exclude_users_service_account: Option<bool>,
    pub filter_group: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScimGroupsListParams {
    #[serde(rename = "group__group_uuid")]
    pub group_group_uuid: Option<String>,
    #[serde(rename = "group__name")]
    pub group_name: Option<String>,
    #[serde(rename = "provider__id")]
    pub provider_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScimUsersListParams {
    #[serde(rename = "provider__id")]
    pub provider_id: Option<i32>,
    #[serde(rename = "user__id")]
    pub user_id: Option<i32>,
    #[serde(rename = "user__username")]
    pub user_username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SsfListParams {
    #[serde(rename = "application__isnull")]
    pub application_isnull: Option<bool>,
    #[serde(rename = "name__iexact")]
    pub name_iexact: Option<String>,
}
