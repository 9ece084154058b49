use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectionTokensListParams {
    pub endpoint: Option<String>,
    pub provider: Option<i32>,
    #[serde(rename = "session__user")]
    pub session_user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EndpointsListParams {
    pub provider: Option<i32>,
    pub superuser_full_list: Option<bool>,
}
