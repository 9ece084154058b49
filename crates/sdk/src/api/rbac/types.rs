use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PermissionsListParams {
    pub codename: Option<String>,
    #[serde(rename = "content_type__app_label")]
    pub content_type_app_label: Option<String>,
    #[serde(rename = "content_type__model")]
    pub content_type_model: Option<String>,
    pub role: Option<String>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PermissionsAssignedByRolesListParams {
    pub model: Option<String>,
    pub object_pk: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PermissionsAssignedByUsersListParams {
    pub model: Option<String>,
    pub object_pk: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PermissionsRolesListParams {
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PermissionsUsersListParams {
    pub user_id: Option<i32>,
}
