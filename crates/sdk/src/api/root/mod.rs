use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Clone)]
pub struct RootApi {
    client: Arc<HttpClient>,
}

impl RootApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn config_retrieve(&self) -> ApiResult<Value> {
        self.client.get("root/config/").await
    }
}
