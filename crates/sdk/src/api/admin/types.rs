use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct VersionHistoryListParams {
    pub build: Option<String>,
    pub version: Option<String>,
}
