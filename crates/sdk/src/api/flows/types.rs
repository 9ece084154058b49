use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct BindingsListParams {
    pub evaluate_on_plan: Option<bool>,
    pub fsb_uuid: Option<String>,
    pub invalid_response_action: Option<String>,
    pub order: Option<i32>,
    pub pbm_uuid: Option<String>,
    pub policies: Option<String>,
    pub policy_engine_mode: Option<String>,
    pub re_evaluate_policies: Option<bool>,
    pub stage: Option<String>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutorGetParams {
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutorSolveParams {
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InstancesListParams {
    pub denied_action: Option<String>,
    pub designation: Option<String>,
    pub flow_uuid: Option<String>,
    pub slug: Option<String>,
}
