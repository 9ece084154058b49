use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiSdkError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation failed: {message}")]
    Validation { message: String, errors: Value },

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimited { retry_after: Option<Duration> },

    #[error("Authentik server error ({status}): {message}")]
    Server { status: StatusCode, message: String },

    #[error("Unexpected response ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Circuit breaker is open, request was not sent")]
    CircuitOpen,
}

impl ApiSdkError {
    /// HTTP status the error was raised for, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiSdkError::HttpError(e) => e.status(),
            ApiSdkError::Validation { .. } => Some(StatusCode::BAD_REQUEST),
            ApiSdkError::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            ApiSdkError::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            ApiSdkError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            ApiSdkError::RateLimited { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            ApiSdkError::Server { status, .. } | ApiSdkError::Api { status, .. } => Some(*status),
            ApiSdkError::ConfigError(_)
            | ApiSdkError::SerializationError(_)
            | ApiSdkError::CircuitOpen => None,
        }
    }

    /// Whether retrying the same request later could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiSdkError::HttpError(e) => e.is_connect() || e.is_timeout(),
            ApiSdkError::RateLimited { .. } => true,
            ApiSdkError::Server { status, .. } => matches!(
                *status,
                StatusCode::INTERNAL_SERVER_ERROR
                    | StatusCode::BAD_GATEWAY
                    | StatusCode::SERVICE_UNAVAILABLE
                    | StatusCode::GATEWAY_TIMEOUT
            ),
            ApiSdkError::Api { status, .. } => *status == StatusCode::REQUEST_TIMEOUT,
            _ => false,
        }
    }

    pub(crate) fn from_status(
        status: StatusCode,
        body: &str,
        retry_after: Option<Duration>,
    ) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| v.get("detail"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| truncate(body, 200));

        match status {
            StatusCode::BAD_REQUEST => {
                ApiSdkError::Validation { message, errors: parsed.unwrap_or(Value::Null) }
            }
            StatusCode::UNAUTHORIZED => ApiSdkError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiSdkError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiSdkError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ApiSdkError::RateLimited { retry_after },
            s if s.is_server_error() => ApiSdkError::Server { status, message },
            _ => ApiSdkError::Api { status, message },
        }
    }
}

pub(crate) fn truncate(body: &str, max: usize) -> String {
    let cleaned: String =
        body.chars().filter(|c| c.is_ascii_graphic() || *c == ' ').take(max).collect();
    if body.chars().count() > max { format!("{}...", cleaned) } else { cleaned }
}

pub type ApiResult<T> = Result<T, ApiSdkError>;

/// Paging, ordering and free-text search accepted by every list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagingContext {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub ordering: Option<String>,
    pub search: Option<String>,
}

impl PagingContext {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page: Some(page), page_size: Some(page_size), ..Default::default() }
    }

    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The same query moved to `page`.
    pub fn at_page(&self, page: u32) -> Self {
        Self { page: Some(page), ..self.clone() }
    }
}

/// Paging metadata as returned by Authentik. `next` and `previous` are page
/// numbers, 0 when there is no such page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub next: u64,
    pub previous: u64,
    pub count: u64,
    pub current: u64,
    pub total_pages: u64,
    pub start_index: u64,
    pub end_index: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResult<T = Value> {
    #[serde(default, alias = "Pagination", deserialize_with = "null_as_default")]
    pub pagination: Pagination,
    #[serde(default = "Vec::new", alias = "Results", deserialize_with = "null_as_default")]
    pub results: Vec<T>,
}

fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    Option::<V>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl<T> Default for PaginatedResult<T> {
    fn default() -> Self {
        Self { pagination: Pagination::default(), results: Vec::new() }
    }
}

impl<T> PaginatedResult<T> {
    pub fn has_next_page(&self) -> bool {
        self.pagination.next > 0
    }

    pub fn next_page(&self) -> Option<u32> {
        u32::try_from(self.pagination.next).ok().filter(|next| *next > 0)
    }

    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl PaginatedResult<Value> {
    /// Converts the untyped page into caller-defined item types.
    pub fn deserialize_results<T: DeserializeOwned>(self) -> ApiResult<PaginatedResult<T>> {
        let results = self
            .results
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| ApiSdkError::SerializationError(e.to_string()))?;

        Ok(PaginatedResult { pagination: self.pagination, results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginated_result_missing_results_defaults_to_empty() {
        let page: PaginatedResult = serde_json::from_value(json!({})).unwrap();

        assert!(page.results.is_empty());
        assert_eq!(page.pagination, Pagination::default());
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_paginated_result_null_fields_default() {
        let page: PaginatedResult =
            serde_json::from_value(json!({ "pagination": { "count": 0 }, "results": null }))
                .unwrap();
        assert!(page.results.is_empty());

        let page: PaginatedResult =
            serde_json::from_value(json!({ "pagination": null, "results": [{ "pk": 1 }] }))
                .unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.pagination, Pagination::default());
    }

    #[test]
    fn test_next_page_out_of_range_is_none() {
        let mut page = PaginatedResult::<Value>::default();
        page.pagination.next = u64::from(u32::MAX) + 1;

        assert!(page.has_next_page());
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn test_paginated_result_accepts_capitalized_fields() {
        let page: PaginatedResult = serde_json::from_value(json!({
            "Pagination": { "next": 2, "count": 30, "current": 1, "total_pages": 2 },
            "Results": [{ "pk": 1 }]
        }))
        .unwrap();

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.next_page(), Some(2));
        assert_eq!(page.pagination.count, 30);
    }

    #[test]
    fn test_deserialize_results_into_typed_items() {
        #[derive(Deserialize)]
        struct User {
            pk: i32,
            username: String,
        }

        let page: PaginatedResult = serde_json::from_value(json!({
            "pagination": { "count": 1 },
            "results": [{ "pk": 7, "username": "akadmin", "is_active": true }]
        }))
        .unwrap();

        let typed = page.deserialize_results::<User>().unwrap();
        assert_eq!(typed.results[0].pk, 7);
        assert_eq!(typed.results[0].username, "akadmin");
        assert_eq!(typed.pagination.count, 1);
    }

    #[test]
    fn test_from_status_uses_detail_field() {
        let err = ApiSdkError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"detail": "No User matches the given query."}"#,
            None,
        );

        assert!(
            matches!(&err, ApiSdkError::NotFound(m) if m == "No User matches the given query.")
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_status_keeps_field_errors_for_validation() {
        let err = ApiSdkError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"username": ["This field is required."]}"#,
            None,
        );

        match err {
            ApiSdkError::Validation { errors, .. } => {
                assert_eq!(errors["username"][0], "This field is required.");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_from_status_server_errors_are_retryable() {
        let err =
            ApiSdkError::from_status(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>", None);

        assert!(
            matches!(err, ApiSdkError::Server { status, .. } if status == StatusCode::BAD_GATEWAY)
        );
        assert!(err.is_retryable());

        let err = ApiSdkError::from_status(StatusCode::NOT_IMPLEMENTED, "", None);
        assert!(matches!(err, ApiSdkError::Server { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_truncate_marks_long_bodies() {
        let body = "x".repeat(300);
        let out = truncate(&body, 200);

        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));
        assert_eq!(truncate("short", 200), "short");
    }
}
