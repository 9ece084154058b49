use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminAllListParams {
    pub user: Option<i32>,
}
