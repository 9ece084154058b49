use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SchedulesListParams {
    pub actor_name: Option<String>,
    pub paused: Option<bool>,
    #[serde(rename = "rel_obj_content_type__app_label")]
    pub rel_obj_content_type_app_label: Option<String>,
    #[serde(rename = "rel_obj_content_type__model")]
    pub rel_obj_content_type_model: Option<String>,
    pub rel_obj_id: Option<String>,
    #[serde(rename = "rel_obj_id__isnull")]
    pub rel_obj_id_isnull: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TasksListParams {
    pub actor_name: Option<String>,
    pub aggregated_status: Option<String>,
    pub queue_name: Option<String>,
    #[serde(rename = "rel_obj_content_type__app_label")]
    pub rel_obj_content_type_app_label: Option<String>,
    #[serde(rename = "rel_obj_content_type__model")]
    pub rel_obj_content_type_model: Option<String>,
    pub rel_obj_id: Option<String>,
    #[serde(rename = "rel_obj_id__isnull")]
    pub rel_obj_id_isnull: Option<bool>,
    pub state: Option<String>,
}
