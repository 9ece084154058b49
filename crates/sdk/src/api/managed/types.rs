use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct BlueprintsListParams {
    pub name: Option<String>,
    pub path: Option<String>,
}
