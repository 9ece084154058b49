use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationEntitlementsListParams {
    pub app: Option<String>,
    pub pbm_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationsListParams {
    pub for_user: Option<i32>,
    pub group: Option<String>,
    pub meta_description: Option<String>,
    pub meta_launch_url: Option<String>,
    pub meta_publisher: Option<String>,
    pub only_with_launch_url: Option<bool>,
    pub slug: Option<String>,
    pub superuser_full_list: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationsCheckAccessRetrieveParams {
    pub for_user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthenticatedSessionsListParams {
    #[serde(rename = "session__last_ip")]
    pub session_last_ip: Option<String>,
    #[serde(rename = "session__last_user_agent")]
    pub session_last_user_agent: Option<String>,
    #[serde(rename = "user__username")]
    pub user_username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BrandsListParams {
    pub brand_uuid: Option<String>,
    pub branding_default_flow_background: Option<String>,
    pub branding_favicon: Option<String>,
    pub branding_logo: Option<String>,
    pub branding_title: Option<String>,
    pub client_certificates: Option<String>,
    pub default: Option<bool>,
    pub domain: Option<String>,
    pub flow_authentication: Option<String>,
    pub flow_device_code: Option<String>,
    pub flow_invalidation: Option<String>,
    pub flow_recovery: Option<String>,
    pub flow_unenrollment: Option<String>,
    pub flow_user_settings: Option<String>,
    pub web_certificate: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupsListParams {
    pub attributes: Option<String>,
    pub include_children: Option<bool>,
    pub include_users: Option<bool>,
    pub is_superuser: Option<bool>,
    pub members_by_pk: Option<String>,
    pub members_by_username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupsRetrieveParams {
    pub include_children: Option<bool>,
    pub include_users: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TokensListParams {
    pub description: Option<String>,
    pub expires: Option<String>,
    pub expiring: Option<bool>,
    pub identifier: Option<String>,
    pub intent: Option<String>,
    pub managed: Option<String>,
    #[serde(rename = "user__username")]
    pub user_username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserConsentListParams {
    pub application: Option<String>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UsersListParams {
    pub attributes: Option<String>,
    pub date_joined: Option<String>,
    #[serde(rename = "date_joined__gt")]
    pub date_joined_gt: Option<String>,
    #[serde(rename = "date_joined__lt")]
    pub date_joined_lt: Option<String>,
    pub email: Option<String>,
    pub groups_by_name: Option<String>,
    pub groups_by_pk: Option<String>,
    pub include_groups: Option<bool>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
    pub last_updated: Option<String>,
    #[serde(rename = "last_updated__gt")]
    pub last_updated_gt: Option<String>,
    #[serde(rename = "last_updated__lt")]
    pub last_updated_lt: Option<String>,
    pub path: Option<String>,
    pub path_startswith: Option<String>,
    pub r#type: Option<String>,
    pub username: Option<String>,
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UsersRecoveryEmailCreateParams {
    pub email_stage: Option<String>,
}
