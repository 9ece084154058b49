use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AllListParams {
    #[serde(rename = "bindings__isnull")]
    pub bindings_isnull: Option<bool>,
    #[serde(rename = "promptstage__isnull")]
    pub promptstage_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BindingsListParams {
    pub enabled: Option<bool>,
    pub order: Option<i32>,
    pub policy: Option<String>,
    #[serde(rename = "policy__isnull")]
    pub policy_isnull: Option<bool>,
    pub target: Option<String>,
    pub target_in: Option<String>,
    pub timeout: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DummyListParams {
    pub created: Option<String>,
    pub execution_logging: Option<bool>,
    pub last_updated: Option<String>,
    pub policy_uuid: Option<String>,
    pub result: Option<bool>,
    pub wait_max: Option<i32>,
    pub wait_min: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventMatcherListParams {
    pub action: Option<String>,
    pub app: Option<String>,
    pub client_ip: Option<String>,
    pub created: Option<String>,
    pub execution_logging: Option<bool>,
    pub last_updated: Option<String>,
    pub model: Option<String>,
    pub policy_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpressionListParams {
    pub created: Option<String>,
    pub execution_logging: Option<bool>,
    pub expression: Option<String>,
    pub last_updated: Option<String>,
    pub policy_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PasswordListParams {
    pub amount_digits: Option<i32>,
    pub amount_lowercase: Option<i32>,
    pub amount_symbols: Option<i32>,
    pub amount_uppercase: Option<i32>,
    pub check_have_i_been_pwned: Option<bool>,
    pub check_static_rules: Option<bool>,
    pub check_zxcvbn: Option<bool>,
    pub created: Option<String>,
    pub error_message: Option<String>,
    pub execution_logging: Option<bool>,
    pub hibp_allowed_count: Option<i32>,
    pub last_updated: Option<String>,
    pub length_min: Option<i32>,
    pub password_field: Option<String>,
    pub policy_uuid: Option<String>,
    pub symbol_charset: Option<String>,
    pub zxcvbn_score_threshold: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PasswordExpiryListParams {
    pub created: Option<String>,
    pub days: Option<i32>,
    pub deny_only: Option<bool>,
    pub execution_logging: Option<bool>,
    pub last_updated: Option<String>,
    pub policy_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReputationListParams {
    pub check_ip: Option<bool>,
    pub check_username: Option<bool>,
    pub created: Option<String>,
    pub execution_logging: Option<bool>,
    pub last_updated: Option<String>,
    pub policy_uuid: Option<String>,
    pub threshold: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReputationScoresListParams {
    pub identifier: Option<String>,
    pub identifier_in: Option<String>,
    pub ip: Option<String>,
    pub score: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UniquePasswordListParams {
    pub created: Option<String>,
    pub execution_logging: Option<bool>,
    pub last_updated: Option<String>,
    pub num_historical_passwords: Option<i32>,
    pub password_field: Option<String>,
    pub policy_uuid: Option<String>,
}
