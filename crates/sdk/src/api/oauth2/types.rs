use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccessTokensListParams {
    pub provider: Option<i32>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthorizationCodesListParams {
    pub provider: Option<i32>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RefreshTokensListParams {
    pub provider: Option<i32>,
    pub user: Option<i32>,
}
