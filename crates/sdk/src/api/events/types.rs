use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventsListParams {
    pub action: Option<String>,
    pub actions: Option<String>,
    pub brand_name: Option<String>,
    pub client_ip: Option<String>,
    pub context_authorized_app: Option<String>,
    pub context_model_app: Option<String>,
    pub context_model_name: Option<String>,
    pub context_model_pk: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventsTopPerUserListParams {
    pub action: Option<String>,
    pub top_n: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventsVolumeListParams {
    pub action: Option<String>,
    pub actions: Option<String>,
    pub brand_name: Option<String>,
    pub client_ip: Option<String>,
    pub context_authorized_app: Option<String>,
    pub context_model_app: Option<String>,
    pub context_model_name: Option<String>,
    pub context_model_pk: Option<String>,
    pub history_days: Option<f64>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationsListParams {
    pub body: Option<String>,
    pub created: Option<String>,
    pub event: Option<String>,
    pub seen: Option<bool>,
    pub severity: Option<String>,
    pub user: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RulesListParams {
    #[serde(rename = "destination_group__name")]
    pub destination_group_name: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransportsListParams {
    pub mode: Option<String>,
    pub send_once: Option<bool>,
    pub webhook_url: Option<String>,
}
