use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use reqwest::{
    Client, Method, StatusCode, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    api::{
        circuit_breaker::CircuitBreaker,
        query::to_query_pairs,
        types::{ApiResult, ApiSdkError, PaginatedResult, Pagination, PagingContext, truncate},
    },
    cache::{AuthentikCache, InMemoryCache},
    config::AuthentikConfig,
};

const MAX_LOG_BODY_LENGTH: usize = 200;

/// Shared request pipeline behind every resource group.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    api_root: String,
    headers: HeaderMap,
    config: AuthentikConfig,
    breaker: Option<Arc<CircuitBreaker>>,
    cache: Option<Arc<dyn AuthentikCache>>,
    // bumped by every write so GETs already in flight do not repopulate the cache
    cache_epoch: Arc<AtomicU64>,
}

impl HttpClient {
    pub fn new(config: AuthentikConfig) -> ApiResult<Self> {
        Self::build(config, None)
    }

    pub fn with_cache(config: AuthentikConfig, cache: Arc<dyn AuthentikCache>) -> ApiResult<Self> {
        Self::build(config, Some(cache))
    }

    fn build(config: AuthentikConfig, cache: Option<Arc<dyn AuthentikCache>>) -> ApiResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        let breaker = config.circuit_breaker.enabled.then(|| {
            Arc::new(CircuitBreaker::new(
                config.circuit_breaker.failure_threshold,
                Duration::from_secs(config.circuit_breaker.open_duration_seconds),
            ))
        });

        let cache = config.cache.enabled.then(|| {
            cache.unwrap_or_else(|| Arc::new(InMemoryCache::new()) as Arc<dyn AuthentikCache>)
        });

        Ok(Self {
            client,
            api_root: config.api_root(),
            headers: Self::build_headers(&config)?,
            config,
            breaker,
            cache,
            cache_epoch: Arc::new(AtomicU64::new(0)),
        })
    }

    fn build_headers(config: &AuthentikConfig) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token.trim()))
            .map_err(|_| {
                ApiSdkError::ConfigError("api_token contains invalid header characters".into())
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }

    pub fn config(&self) -> &AuthentikConfig {
        &self.config
    }

    pub fn circuit_breaker(&self) -> Option<&CircuitBreaker> {
        self.breaker.as_deref()
    }

    fn build_url(&self, endpoint: &str, query: &[(String, String)]) -> ApiResult<Url> {
        let raw = format!("{}{}", self.api_root, endpoint.trim_start_matches('/'));
        let url = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        };

        url.map_err(|e| ApiSdkError::ConfigError(format!("Invalid request url '{}': {}", raw, e)))
    }

    /// Cache scope of an endpoint: `<api_root><group>/<sub_resource>/`.
    fn resource_prefix(&self, endpoint: &str) -> String {
        let segments: Vec<&str> =
            endpoint.trim_matches('/').split('/').filter(|s| !s.is_empty()).take(2).collect();
        format!("{}{}/", self.api_root, segments.join("/"))
    }

    pub async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(Method::GET, endpoint, Vec::new(), None).await?;
        parse_json(&body)
    }

    pub async fn get_with_query<T, Q>(&self, endpoint: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let body = self.execute(Method::GET, endpoint, to_query_pairs(query)?, None).await?;
        parse_json(&body)
    }

    /// GET returning the raw body, for endpoints that may answer in YAML.
    pub async fn get_text_with_query<Q>(&self, endpoint: &str, query: &Q) -> ApiResult<String>
    where
        Q: Serialize + ?Sized,
    {
        self.execute(Method::GET, endpoint, to_query_pairs(query)?, None).await
    }

    /// GET on a list endpoint. An absent or `null` body yields an empty page.
    pub async fn get_page<Q>(
        &self,
        endpoint: &str,
        query: &Q,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult>
    where
        Q: Serialize + ?Sized,
    {
        let mut pairs = to_query_pairs(query)?;
        pairs.extend(to_query_pairs(paging)?);

        let body = self.execute(Method::GET, endpoint, pairs, None).await?;
        parse_page(&body)
    }

    pub async fn post<B>(&self, endpoint: &str, body: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = self.execute(Method::POST, endpoint, Vec::new(), Some(to_body(body)?)).await?;
        parse_json(&body)
    }

    pub async fn post_with_query<B, Q>(
        &self,
        endpoint: &str,
        body: &B,
        query: &Q,
    ) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let body = self
            .execute(Method::POST, endpoint, to_query_pairs(query)?, Some(to_body(body)?))
            .await?;
        parse_json(&body)
    }

    /// POST without a request body, used by action endpoints.
    pub async fn post_empty(&self, endpoint: &str) -> ApiResult<Value> {
        let body = self.execute(Method::POST, endpoint, Vec::new(), None).await?;
        parse_json(&body)
    }

    pub async fn post_empty_with_query<Q>(&self, endpoint: &str, query: &Q) -> ApiResult<Value>
    where
        Q: Serialize + ?Sized,
    {
        let body = self.execute(Method::POST, endpoint, to_query_pairs(query)?, None).await?;
        parse_json(&body)
    }

    pub async fn put<B>(&self, endpoint: &str, body: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = self.execute(Method::PUT, endpoint, Vec::new(), Some(to_body(body)?)).await?;
        parse_json(&body)
    }

    pub async fn patch<B>(&self, endpoint: &str, body: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = self.execute(Method::PATCH, endpoint, Vec::new(), Some(to_body(body)?)).await?;
        parse_json(&body)
    }

    pub async fn delete_status(&self, endpoint: &str) -> ApiResult<()> {
        self.execute(Method::DELETE, endpoint, Vec::new(), None).await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> ApiResult<String> {
        let url = self.build_url(endpoint, &query)?;

        let cache_key = match (&self.cache, method == Method::GET) {
            (Some(_), true) => Some(url.to_string()),
            _ => None,
        };
        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(hit) = cache.get(key).await {
                debug!("Cache hit for GET {}", url);
                return Ok(hit);
            }
        }
        let cache_epoch = self.cache_epoch.load(Ordering::Acquire);

        if let Some(breaker) = &self.breaker {
            if !breaker.allow_request() {
                warn!("Circuit breaker open, rejecting {} {}", method, url);
                return Err(ApiSdkError::CircuitOpen);
            }
        }

        let mut attempt: u32 = 0;
        loop {
            match self.send_once(&method, &url, body.as_ref(), attempt).await {
                Ok(text) => {
                    if let Some(breaker) = &self.breaker {
                        breaker.record_success();
                    }
                    self.update_cache(&method, endpoint, cache_key, cache_epoch, &text).await;
                    return Ok(text);
                }
                Err(err) => {
                    if attempt < self.config.retry.max_retries && should_retry(&method, &err) {
                        let delay = self.retry_delay(attempt, &err);
                        warn!(
                            "{} {} failed: {}. Retrying in {}ms (attempt {} of {})",
                            method,
                            url,
                            err,
                            delay.as_millis(),
                            attempt + 1,
                            self.config.retry.max_retries
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    if let Some(breaker) = &self.breaker {
                        if counts_as_failure(&err) {
                            breaker.record_failure();
                        } else {
                            breaker.record_success();
                        }
                    }
                    return Err(err);
                }
            }
        }
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &Url,
        body: Option<&Value>,
        attempt: u32,
    ) -> ApiResult<String> {
        debug!("{} {} (attempt {})", method, url, attempt + 1);
        if let (true, Some(body)) = (self.config.log_request_bodies, body) {
            debug!("Request body: {}", body);
        }

        let started = Instant::now();
        let mut request =
            self.client.request(method.clone(), url.clone()).headers(self.headers.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.inspect_err(|e| {
            error!("{} {} failed to send: {}", method, url, e);
        })?;

        let status = response.status();
        let retry_after = parse_retry_after(response.headers());
        let text = response.text().await?;

        debug!("{} {} -> {} in {}ms", method, url, status, started.elapsed().as_millis());

        if !status.is_success() {
            let excerpt = truncate(&text, MAX_LOG_BODY_LENGTH);
            if status.is_server_error() {
                error!("Authentik API error: {} - {}", status, excerpt);
            } else {
                warn!("Authentik API error: {} - {}", status, excerpt);
            }
            return Err(ApiSdkError::from_status(status, &text, retry_after));
        }

        if self.config.log_request_bodies && !text.is_empty() {
            debug!("Response body: {}", truncate(&text, MAX_LOG_BODY_LENGTH));
        }

        Ok(text)
    }

    async fn update_cache(
        &self,
        method: &Method,
        endpoint: &str,
        cache_key: Option<String>,
        epoch_at_send: u64,
        text: &str,
    ) {
        let Some(cache) = &self.cache else {
            return;
        };

        match cache_key {
            Some(key) => {
                if self.cache_epoch.load(Ordering::Acquire) != epoch_at_send {
                    debug!("Skipping cache store for {}, a write completed meanwhile", key);
                    return;
                }

                let ttl = Duration::from_secs(self.config.cache.ttl_seconds);
                cache.set(key.clone(), text.to_string(), ttl).await;

                // a write may have landed between the check and the store
                if self.cache_epoch.load(Ordering::Acquire) != epoch_at_send {
                    cache.remove(&key).await;
                }
            }
            None if *method != Method::GET => {
                self.cache_epoch.fetch_add(1, Ordering::AcqRel);
                cache.remove_prefix(&self.resource_prefix(endpoint)).await
            }
            None => {}
        }
    }

    fn retry_delay(&self, attempt: u32, err: &ApiSdkError) -> Duration {
        let max = Duration::from_millis(self.config.retry.max_retry_delay_ms);
        match err {
            ApiSdkError::RateLimited { retry_after: Some(after) } => (*after).min(max),
            _ => self.config.retry.delay_for_attempt(attempt),
        }
    }
}

fn to_body<B>(body: &B) -> ApiResult<Value>
where
    B: Serialize + ?Sized,
{
    serde_json::to_value(body).map_err(|e| ApiSdkError::SerializationError(e.to_string()))
}

fn parse_json<T>(text: &str) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    let parsed = if text.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(text)
    };

    parsed.map_err(|e| ApiSdkError::SerializationError(e.to_string()))
}

/// Some list operations answer with a bare array instead of the paging
/// envelope; those become a single page holding every item.
fn parse_page(text: &str) -> ApiResult<PaginatedResult> {
    match parse_json::<Value>(text)? {
        Value::Null => Ok(PaginatedResult::default()),
        Value::Array(results) => {
            let count = results.len() as u64;
            Ok(PaginatedResult {
                pagination: Pagination {
                    count,
                    current: 1,
                    total_pages: 1,
                    start_index: if count > 0 { 1 } else { 0 },
                    end_index: count,
                    ..Default::default()
                },
                results,
            })
        }
        value => serde_json::from_value(value)
            .map_err(|e| ApiSdkError::SerializationError(e.to_string())),
    }
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn is_idempotent(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::PUT | Method::DELETE)
}

/// Connect errors never reached the server, so any verb may be resent.
/// Everything else is only retried for idempotent verbs.
fn should_retry(method: &Method, err: &ApiSdkError) -> bool {
    match err {
        ApiSdkError::HttpError(e) if e.is_connect() => true,
        _ => err.is_retryable() && is_idempotent(method),
    }
}

fn counts_as_failure(err: &ApiSdkError) -> bool {
    matches!(err, ApiSdkError::HttpError(_) | ApiSdkError::Server { .. })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClient {
        HttpClient::new(AuthentikConfig::new("https://auth.example.com/", "token")).unwrap()
    }

    #[test]
    fn test_build_url_joins_api_root() {
        let url = client().build_url("core/users/", &[]).unwrap();
        assert_eq!(url.as_str(), "https://auth.example.com/api/v3/core/users/");

        let url = client().build_url("/core/users/5/", &[]).unwrap();
        assert_eq!(url.as_str(), "https://auth.example.com/api/v3/core/users/5/");
    }

    #[test]
    fn test_build_url_encodes_query() {
        let query = vec![("email".to_string(), "user+test@example.com".to_string())];
        let url = client().build_url("core/users/", &query).unwrap();

        assert_eq!(url.query(), Some("email=user%2Btest%40example.com"));
    }

    #[test]
    fn test_resource_prefix_uses_group_and_sub_resource() {
        let client = client();

        assert_eq!(
            client.resource_prefix("core/users/5/set_password/"),
            "https://auth.example.com/api/v3/core/users/"
        );
        assert_eq!(
            client.resource_prefix("root/config/"),
            "https://auth.example.com/api/v3/root/config/"
        );
    }

    #[test]
    fn test_parse_json_handles_empty_body() {
        let value: Value = parse_json("").unwrap();
        assert_eq!(value, Value::Null);

        let page: Option<PaginatedResult> = parse_json("null").unwrap();
        assert!(page.is_none());

        assert!(matches!(parse_json::<Value>("{oops"), Err(ApiSdkError::SerializationError(_))));
    }

    #[test]
    fn test_parse_page_variants() {
        assert!(parse_page("").unwrap().results.is_empty());
        assert!(parse_page("null").unwrap().results.is_empty());

        let page = parse_page(r#"[{"action": "login", "count": 3}]"#).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.pagination.count, 1);
        assert!(!page.has_next_page());

        let page =
            parse_page(r#"{"pagination": {"next": 3, "count": 90}, "results": []}"#).unwrap();
        assert_eq!(page.next_page(), Some(3));
    }

    #[test]
    fn test_should_retry_respects_idempotency() {
        let server = ApiSdkError::Server {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: String::new(),
        };

        assert!(should_retry(&Method::GET, &server));
        assert!(should_retry(&Method::DELETE, &server));
        assert!(!should_retry(&Method::POST, &server));
        assert!(!should_retry(&Method::PATCH, &server));

        let not_implemented =
            ApiSdkError::Server { status: StatusCode::NOT_IMPLEMENTED, message: String::new() };
        assert!(!should_retry(&Method::GET, &not_implemented));

        assert!(!should_retry(&Method::GET, &ApiSdkError::NotFound(String::new())));

        let request_timeout =
            ApiSdkError::Api { status: StatusCode::REQUEST_TIMEOUT, message: String::new() };
        assert!(should_retry(&Method::PUT, &request_timeout));
        assert!(!should_retry(&Method::POST, &request_timeout));

        let rate_limited = ApiSdkError::RateLimited { retry_after: None };
        assert!(should_retry(&Method::GET, &rate_limited));
        assert!(!should_retry(&Method::PATCH, &rate_limited));
    }

    #[test]
    fn test_retry_after_caps_at_max_delay() {
        let client = client();
        let err = ApiSdkError::RateLimited { retry_after: Some(Duration::from_secs(3600)) };

        assert_eq!(client.retry_delay(0, &err), Duration::from_millis(10_000));
        assert_eq!(
            client.retry_delay(1, &ApiSdkError::RateLimited { retry_after: None }),
            Duration::from_millis(1_000)
        );
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(7)));

        headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let result =
            HttpClient::new(AuthentikConfig::new("https://auth.example.com", "bad\ntoken"));
        assert!(matches!(result, Err(ApiSdkError::ConfigError(_))));
    }
}
