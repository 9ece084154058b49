use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AllListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AllTestCreateParams {
    pub format_result: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderGoogleWorkspaceListParams {
    pub expression: Option<String>,
    pub managed: Option<String>,
    pub pm_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderMicrosoftEntraListParams {
    pub expression: Option<String>,
    pub managed: Option<String>,
    pub pm_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderRacListParams {
    pub managed: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderRadiusListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderSamlListParams {
    pub friendly_name: Option<String>,
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
    pub saml_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderScimListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderScopeListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
    pub scope_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceKerberosListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceLdapListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceOauthListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SourcePlexListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceSamlListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceScimListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceTelegramListParams {
    pub managed: Option<String>,
    #[serde(rename = "managed__isnull")]
    pub managed_isnull: Option<bool>,
}
