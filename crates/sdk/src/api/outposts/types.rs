use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct InstancesListParams {
    #[serde(rename = "managed__icontains")]
    pub managed_icontains: Option<String>,
    #[serde(rename = "managed__iexact")]
    pub managed_iexact: Option<String>,
    #[serde(rename = "name__icontains")]
    pub name_icontains: Option<String>,
    #[serde(rename = "name__iexact")]
    pub name_iexact: Option<String>,
    #[serde(rename = "providers__isnull")]
    pub providers_isnull: Option<bool>,
    pub providers_by_pk: Option<String>,
    #[serde(rename = "service_connection__name__icontains")]
    pub service_connection_name_icontains: Option<String>,
    #[serde(rename = "service_connection__name__iexact")]
    pub service_connection_name_iexact: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InstancesHealthListParams {
    #[serde(rename = "managed__icontains")]
    pub managed_icontains: Option<String>,
    #[serde(rename = "managed__iexact")]
    pub managed_iexact: Option<String>,
    #[serde(rename = "name__icontains")]
    pub name_icontains: Option<String>,
    #[serde(rename = "name__iexact")]
    pub name_iexact: Option<String>,
    #[serde(rename = "providers__isnull")]
    pub providers_isnull: Option<bool>,
    pub providers_by_pk: Option<String>,
    #[serde(rename = "service_connection__name__icontains")]
    pub service_connection_name_icontains: Option<String>,
    #[serde(rename = "service_connection__name__iexact")]
    pub service_connection_name_iexact: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LdapAccessCheckParams {
    pub app_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RadiusAccessCheckParams {
    pub app_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceConnectionsDockerListParams {
    pub local: Option<bool>,
    pub tls_authentication: Option<String>,
    pub tls_verification: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceConnectionsKubernetesListParams {
    pub local: Option<bool>,
}
