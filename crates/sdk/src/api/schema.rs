use serde::Serialize;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaFormat {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaRetrieveParams {
    pub format: Option<SchemaFormat>,
    pub lang: Option<String>,
}

/// OpenAPI schema of the Authentik instance.
#[derive(Clone)]
pub struct SchemaApi {
    client: Arc<HttpClient>,
}

impl SchemaApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Returned verbatim since the server answers YAML unless asked for JSON.
    pub async fn retrieve(&self, params: &SchemaRetrieveParams) -> ApiResult<String> {
        self.client.get_text_with_query("schema/", params).await
    }
}
