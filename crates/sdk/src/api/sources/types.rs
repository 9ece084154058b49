use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AllListParams {
    pub managed: Option<String>,
    pub pbm_uuid: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupConnectionsAllListParams {
    pub group: Option<String>,
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupConnectionsKerberosListParams {
    pub group: Option<String>,
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupConnectionsLdapListParams {
    pub group: Option<String>,
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupConnectionsOauthListParams {
    pub group: Option<String>,
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupConnectionsPlexListParams {
    pub group: Option<String>,
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupConnectionsSamlListParams {
    pub group: Option<String>,
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupConnectionsTelegramListParams {
    pub group: Option<String>,
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct KerberosListParams {
    pub enabled: Option<bool>,
    pub kadmin_type: Option<String>,
    pub password_login_update_internal_password: Option<bool>,
    pub pbm_uuid: Option<String>,
    pub realm: Option<String>,
    pub slug: Option<String>,
    pub spnego_server_name: Option<String>,
    pub sync_principal: Option<String>,
    pub sync_users: Option<bool>,
    pub sync_users_password: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LdapListParams {
    pub additional_group_dn: Option<String>,
    pub additional_user_dn: Option<String>,
    pub base_dn: Option<String>,
    pub bind_cn: Option<String>,
    pub client_certificate: Option<String>,
    pub delete_not_found_objects: Option<bool>,
    pub enabled: Option<bool>,
    pub group_membership_field: Option<String>,
    pub group_object_filter: Option<String>,
    pub group_property_mappings: Option<String>,
    pub lookup_groups_from_user: Option<bool>,
    pub object_uniqueness_field: Option<String>,
    pub password_login_update_internal_password: Option<bool>,
    pub pbm_uuid: Option<String>,
    pub peer_certificate: Option<String>,
    pub server_uri: Option<String>,
    pub slug: Option<String>,
    pub sni: Option<bool>,
    pub start_tls: Option<bool>,
    pub sync_groups: Option<bool>,
    pub sync_parent_group: Option<String>,
    pub sync_users: Option<bool>,
    pub sync_users_password: Option<bool>,
    pub user_membership_attribute: Option<String>,
    pub user_object_filter: Option<String>,
    pub user_property_mappings: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OauthListParams {
    pub access_token_url: Option<String>,
    pub additional_scopes: Option<String>,
    pub authentication_flow: Option<String>,
    pub authorization_url: Option<String>,
    pub consumer_key: Option<String>,
    pub enabled: Option<bool>,
    pub enrollment_flow: Option<String>,
    pub group_matching_mode: Option<String>,
    pub has_jwks: Option<bool>,
    pub pbm_uuid: Option<String>,
    pub policy_engine_mode: Option<String>,
    pub profile_url: Option<String>,
    pub provider_type: Option<String>,
    pub request_token_url: Option<String>,
    pub slug: Option<String>,
    pub user_matching_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlexListParams {
    pub allow_friends: Option<bool>,
    pub authentication_flow: Option<String>,
    pub client_id: Option<String>,
    pub enabled: Option<bool>,
    pub enrollment_flow: Option<String>,
    pub group_matching_mode: Option<String>,
    pub pbm_uuid: Option<String>,
    pub policy_engine_mode: Option<String>,
    pub slug: Option<String>,
    pub user_matching_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlexRedeemTokenCreateParams {
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlexRedeemTokenAuthenticatedCreateParams {
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SamlListParams {
    pub allow_idp_initiated: Option<bool>,
    pub authentication_flow: Option<String>,
    pub binding_type: Option<String>,
    pub digest_algorithm: Option<String>,
    pub enabled: Option<bool>,
    pub enrollment_flow: Option<String>,
    pub issuer: Option<String>,
    pub managed: Option<String>,
    pub name_id_policy: Option<String>,
    pub pbm_uuid: Option<String>,
    pub policy_engine_mode: Option<String>,
    pub pre_authentication_flow: Option<String>,
    pub signature_algorithm: Option<String>,
    pub signed_assertion: Option<bool>,
    pub signed_response: Option<bool>,
    pub signing_kp: Option<String>,
    pub slo_url: Option<String>,
    pub slug: Option<String>,
    pub sso_url: Option<String>,
    pub temporary_user_delete_after: Option<String>,
    pub user_matching_mode: Option<String>,
    pub verification_kp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScimListParams {
    pub pbm_uuid: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScimGroupsListParams {
    #[serde(rename = "group__group_uuid")]
    pub group_group_uuid: Option<String>,
    #[serde(rename = "group__name")]
    pub group_name: Option<String>,
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScimUsersListParams {
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
    #[serde(rename = "user__id")]
    pub user_id: Option<i32>,
    #[serde(rename = "user__username")]
    pub user_username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TelegramListParams {
    pub authentication_flow: Option<String>,
    pub bot_username: Option<String>,
    pub enabled: Option<bool>,
    pub enrollment_flow: Option<String>,
    pub group_matching_mode: Option<String>,
    pub pbm_uuid: Option<String>,
    pub policy_engine_mode: Option<String>,
    pub request_message_access: Option<bool>,
    pub slug: Option<String>,
    pub user_matching_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserConnectionsAllListParams {
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserConnectionsKerberosListParams {
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserConnectionsLdapListParams {
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserConnectionsOauthListParams {
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserConnectionsPlexListParams {
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserConnectionsSamlListParams {
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserConnectionsTelegramListParams {
    #[serde(rename = "source__slug")]
    pub source_slug: Option<String>,
    pub user: Option<i32>,
}
