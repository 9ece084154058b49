use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CertificatekeypairsListParams {
    pub has_key: Option<bool>,
    pub include_details: Option<bool>,
    pub key_type: Option<String>,
    pub managed: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CertificatekeypairsViewCertificateRetrieveParams {
    pub download: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CertificatekeypairsViewPrivateKeyRetrieveParams {
    pub download: Option<bool>,
}
