//! Integration tests for the shared request pipeline using wiremock
//!
//! These tests drive real requests through `AuthentikClient` against mocked
//! endpoints: authentication headers, status mapping, retries, the circuit
//! breaker and response caching.

use authentik_client::{
    ApiSdkError, AuthentikClient, AuthentikConfig, CircuitState, PagingContext,
    core::UsersListParams,
};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn config(server: &MockServer) -> AuthentikConfig {
    let mut config = AuthentikConfig::new(server.uri(), TOKEN);
    config.retry.initial_retry_delay_ms = 1;
    config.retry.max_retry_delay_ms = 5;
    config
}

fn client(server: &MockServer) -> AuthentikClient {
    AuthentikClient::new(config(server)).expect("client should build")
}

mod request_tests {
    use super::*;

    /// Every call carries the bearer token and asks for JSON
    #[tokio::test]
    async fn test_requests_are_authenticated() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/admin/version/"))
            .and(bearer_token(TOKEN))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"version_current": "2024.12.1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let version = client(&server).admin.version_retrieve().await.unwrap();

        assert_eq!(version["version_current"], "2024.12.1");
    }

    /// Trailing slashes on the base url do not double up in the path
    #[tokio::test]
    async fn test_base_url_trailing_slash_is_normalized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/root/config/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"capabilities": []})))
            .expect(1)
            .mount(&server)
            .await;

        let config = AuthentikConfig::new(format!("{}//", server.uri()), TOKEN);
        let client = AuthentikClient::new(config).unwrap();

        let root = client.root.config_retrieve().await.unwrap();
        assert!(root["capabilities"].is_array());
    }

    /// Filters and paging are sent as query parameters, blank ones are not
    #[tokio::test]
    async fn test_list_sends_filters_and_paging() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/"))
            .and(query_param("email", "user+test@example.com"))
            .and(query_param("is_active", "true"))
            .and(query_param("page", "2"))
            .and(query_param("page_size", "50"))
            .and(query_param("ordering", "-date_joined"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "pagination": {
                    "next": 3, "previous": 1, "count": 120, "current": 2,
                    "total_pages": 3, "start_index": 51, "end_index": 100
                },
                "results": [{"pk": 51, "username": "jdoe"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = UsersListParams {
            email: Some("user+test@example.com".into()),
            is_active: Some(true),
            username: Some("   ".into()),
            path: Some(String::new()),
            ..Default::default()
        };
        let paging = PagingContext::new(2, 50).with_ordering("-date_joined");

        let page = client(&server).core.users_list(&params, &paging).await.unwrap();

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0]["username"], "jdoe");
        assert_eq!(page.next_page(), Some(3));

        let requests = server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap_or_default().to_string();
        assert!(!query.contains("username"), "blank filter leaked into {query}");
        assert!(!query.contains("path"), "empty filter leaked into {query}");
    }

    /// An empty or null body on a list endpoint is an empty page
    #[tokio::test]
    async fn test_list_without_body_yields_empty_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/groups/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/core/tokens/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let client = client(&server);
        let paging = PagingContext::default();

        let groups = client.core.groups_list(&Default::default(), &paging).await.unwrap();
        let tokens = client.core.tokens_list(&Default::default(), &paging).await.unwrap();

        assert!(groups.results.is_empty());
        assert!(tokens.results.is_empty());
        assert!(!tokens.has_next_page());
    }

    /// A bare array is returned as a single page
    #[tokio::test]
    async fn test_list_accepts_array_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/crypto/certificatekeypairs/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"pk": "a"}, {"pk": "b"}])),
            )
            .mount(&server)
            .await;

        let page = client(&server)
            .crypto
            .certificatekeypairs_list(&Default::default(), &PagingContext::default())
            .await
            .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.pagination.count, 2);
        assert!(!page.has_next_page());
    }

    /// Write methods send the body as JSON with the right verb
    #[tokio::test]
    async fn test_write_verbs_send_json_bodies() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v3/core/users/7/set_password/"))
            .and(body_json(json!({"password": "hunter22"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/v3/core/users/7/"))
            .and(body_json(json!({"is_active": false})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"pk": 7, "is_active": false})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);

        let result =
            client.core.users_set_password_create(7, &json!({"password": "hunter22"})).await;
        assert!(result.unwrap().is_null());

        let user = client.core.users_partial_update(7, &json!({"is_active": false})).await.unwrap();
        assert_eq!(user["is_active"], false);
    }

    /// DELETE succeeds on 204 without a body
    #[tokio::test]
    async fn test_delete_returns_unit_on_no_content() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v3/core/groups/5d1e7c3a-0000-4000-8000-000000000001/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .core
            .groups_destroy("5d1e7c3a-0000-4000-8000-000000000001")
            .await
            .unwrap();
    }

    /// Action endpoints with query parameters and no body
    #[tokio::test]
    async fn test_action_with_query_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v3/core/users/3/recovery_email/"))
            .and(query_param("email_stage", "recovery-email"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let params = authentik_client::core::UsersRecoveryEmailCreateParams {
            email_stage: Some("recovery-email".into()),
        };
        client(&server).core.users_recovery_email_create(3, &params).await.unwrap();
    }
}

mod error_tests {
    use super::*;

    fn no_retry_client(server: &MockServer) -> AuthentikClient {
        let mut config = config(server);
        config.retry.max_retries = 0;
        config.circuit_breaker.enabled = false;
        AuthentikClient::new(config).unwrap()
    }

    /// 400 keeps the field errors returned by the server
    #[tokio::test]
    async fn test_400_returns_validation_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v3/core/users/"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"username": ["This field is required."]})),
            )
            .mount(&server)
            .await;

        let err = no_retry_client(&server).core.users_create(&json!({})).await.unwrap_err();

        match err {
            ApiSdkError::Validation { errors, .. } => {
                assert_eq!(errors["username"][0], "This field is required.");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    /// 401 and 403 carry the server's detail message
    #[tokio::test]
    async fn test_401_and_403_map_to_auth_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/me/"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Token invalid."})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/admin/system/"))
            .respond_with(ResponseTemplate::new(403).set_body_json(
                json!({"detail": "You do not have permission to perform this action."}),
            ))
            .mount(&server)
            .await;

        let client = no_retry_client(&server);

        let err = client.core.users_me_retrieve().await.unwrap_err();
        assert!(matches!(&err, ApiSdkError::Unauthorized(m) if m == "Token invalid."));

        let err = client.admin.system_retrieve().await.unwrap_err();
        assert!(matches!(err, ApiSdkError::Forbidden(_)));
    }

    /// 404 for non-existent resources
    #[tokio::test]
    async fn test_404_returns_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/flows/instances/missing/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&server)
            .await;

        let err = no_retry_client(&server).flows.instances_retrieve("missing").await.unwrap_err();

        assert!(matches!(err, ApiSdkError::NotFound(_)));
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }

    /// 429 exposes Retry-After
    #[tokio::test]
    async fn test_429_returns_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/events/events/"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
            .mount(&server)
            .await;

        let err = no_retry_client(&server)
            .events
            .events_list(&Default::default(), &PagingContext::default())
            .await
            .unwrap_err();

        match err {
            ApiSdkError::RateLimited { retry_after } => {
                assert_eq!(retry_after, Some(Duration::from_secs(7)));
            }
            other => panic!("expected rate limit error, got {other:?}"),
        }
    }

    /// Non-JSON server errors are truncated into the message
    #[tokio::test]
    async fn test_5xx_returns_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/admin/version/"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = no_retry_client(&server).admin.version_retrieve().await.unwrap_err();

        match err {
            ApiSdkError::Server { status, message } => {
                assert_eq!(status, reqwest::StatusCode::BAD_GATEWAY);
                assert!(message.contains("Bad Gateway"));
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    /// A success body that is not JSON is a serialization error
    #[tokio::test]
    async fn test_malformed_json_returns_serialization_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/admin/version/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let err = no_retry_client(&server).admin.version_retrieve().await.unwrap_err();

        assert!(matches!(err, ApiSdkError::SerializationError(_)));
    }
}

mod resilience_tests {
    use super::*;

    /// Idempotent requests are retried on 503 until they succeed
    #[tokio::test]
    async fn test_get_is_retried_on_service_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/admin/version/"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/admin/version/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version_current": "x"})))
            .expect(1)
            .mount(&server)
            .await;

        let version = client(&server).admin.version_retrieve().await.unwrap();

        assert_eq!(version["version_current"], "x");
    }

    /// Retries stop after max_retries
    #[tokio::test]
    async fn test_retries_are_bounded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/admin/version/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let mut config = config(&server);
        config.retry.max_retries = 2;
        let client = AuthentikClient::new(config).unwrap();

        let err = client.admin.version_retrieve().await.unwrap_err();
        assert!(matches!(err, ApiSdkError::Server { .. }));
    }

    /// POST is not resent after the server answered
    #[tokio::test]
    async fn test_post_is_not_retried_on_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v3/core/users/"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server).core.users_create(&json!({"username": "a"})).await.unwrap_err();

        assert!(matches!(err, ApiSdkError::Server { .. }));
    }

    /// A 429 with Retry-After is honoured on GET
    #[tokio::test]
    async fn test_rate_limited_get_is_retried() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/me/"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/me/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"pk": 1}})))
            .mount(&server)
            .await;

        let me = client(&server).core.users_me_retrieve().await.unwrap();

        assert_eq!(me["user"]["pk"], 1);
    }

    /// Consecutive server errors open the breaker and later calls fail fast
    #[tokio::test]
    async fn test_circuit_breaker_opens_after_failures() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/admin/system/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let mut config = config(&server);
        config.retry.max_retries = 0;
        config.circuit_breaker.failure_threshold = 2;
        let client = AuthentikClient::new(config).unwrap();

        assert!(client.admin.system_retrieve().await.is_err());
        assert!(client.admin.system_retrieve().await.is_err());

        let breaker = client.http().circuit_breaker().expect("breaker is enabled by default");
        assert_eq!(breaker.state(), CircuitState::Open);

        let err = client.admin.version_retrieve().await.unwrap_err();
        assert!(matches!(err, ApiSdkError::CircuitOpen));
    }

    /// Client errors do not count towards opening the breaker
    #[tokio::test]
    async fn test_client_errors_keep_breaker_closed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/flows/instances/nope/"))
            .respond_with(ResponseTemplate::new(404))
            .expect(3)
            .mount(&server)
            .await;

        let mut config = config(&server);
        config.circuit_breaker.failure_threshold = 1;
        let client = AuthentikClient::new(config).unwrap();

        for _ in 0..3 {
            let err = client.flows.instances_retrieve("nope").await.unwrap_err();
            assert!(matches!(err, ApiSdkError::NotFound(_)));
        }

        assert_eq!(client.http().circuit_breaker().unwrap().state(), CircuitState::Closed);
    }

    /// A 408 on GET is retried
    #[tokio::test]
    async fn test_request_timeout_status_is_retried_for_get() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/admin/version/"))
            .respond_with(ResponseTemplate::new(408))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/admin/version/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version_current": "x"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v3/admin/system/"))
            .respond_with(ResponseTemplate::new(408))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);

        let version = client.admin.version_retrieve().await.unwrap();
        assert_eq!(version["version_current"], "x");

        let err = client.admin.system_create().await.unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::REQUEST_TIMEOUT));
    }

    /// A GET that runs into the client timeout is sent again
    #[tokio::test]
    async fn test_timed_out_get_is_retried() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/me/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"user": {"pk": 0}}))
                    .set_delay(Duration::from_millis(1_500)),
            )
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/me/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"pk": 1}})))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config(&server);
        config.timeout_seconds = 1;
        let client = AuthentikClient::new(config).unwrap();

        let me = client.core.users_me_retrieve().await.unwrap();

        assert_eq!(me["user"]["pk"], 1);
    }

    /// Writes are resent when the connection could not be established
    #[tokio::test]
    async fn test_connect_errors_are_retried_for_writes() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let mut config = AuthentikConfig::new(format!("http://127.0.0.1:{port}"), TOKEN);
        config.retry.max_retries = 1;
        config.retry.initial_retry_delay_ms = 200;
        config.circuit_breaker.enabled = false;
        let client = AuthentikClient::new(config).unwrap();

        let started = Instant::now();
        let err = client.core.users_create(&json!({"username": "a"})).await.unwrap_err();
        assert!(matches!(&err, ApiSdkError::HttpError(e) if e.is_connect()));
        assert!(started.elapsed() >= Duration::from_millis(200));

        let started = Instant::now();
        let err = client.core.users_partial_update(1, &json!({"name": "b"})).await.unwrap_err();
        assert!(matches!(&err, ApiSdkError::HttpError(e) if e.is_connect()));
        assert!(started.elapsed() >= Duration::from_millis(200));
    }
}

mod cache_tests {
    use super::*;
    use authentik_client::InMemoryCache;
    use std::sync::Arc;

    fn cached_config(server: &MockServer) -> AuthentikConfig {
        let mut config = config(server);
        config.cache.enabled = true;
        config.cache.ttl_seconds = 60;
        config
    }

    /// Repeated GETs are served from the cache
    #[tokio::test]
    async fn test_get_is_cached() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/me/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"pk": 1}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = AuthentikClient::new(cached_config(&server)).unwrap();

        let first = client.core.users_me_retrieve().await.unwrap();
        let second = client.core.users_me_retrieve().await.unwrap();

        assert_eq!(first, second);
    }

    /// Writes under a resource drop its cached reads
    #[tokio::test]
    async fn test_write_invalidates_resource() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/core/groups/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v3/core/users/"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"pk": 2})))
            .expect(1)
            .mount(&server)
            .await;

        let cache = Arc::new(InMemoryCache::new());
        let client = AuthentikClient::with_cache(cached_config(&server), cache.clone()).unwrap();
        let paging = PagingContext::default();

        client.core.users_list(&Default::default(), &paging).await.unwrap();
        client.core.groups_list(&Default::default(), &paging).await.unwrap();
        client.core.users_list(&Default::default(), &paging).await.unwrap();
        assert_eq!(cache.len().await, 2);

        client.core.users_create(&json!({"username": "new"})).await.unwrap();
        assert_eq!(cache.len().await, 1);

        client.core.users_list(&Default::default(), &paging).await.unwrap();
        client.core.groups_list(&Default::default(), &paging).await.unwrap();
    }

    /// Caching stays off unless enabled in config
    #[tokio::test]
    async fn test_cache_disabled_by_default() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/admin/version/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(2)
            .mount(&server)
            .await;

        let cache = Arc::new(InMemoryCache::new());
        let client = AuthentikClient::with_cache(config(&server), cache.clone()).unwrap();

        client.admin.version_retrieve().await.unwrap();
        client.admin.version_retrieve().await.unwrap();

        assert!(cache.is_empty().await);
    }

    /// A read still in flight when a write completes does not repopulate the cache
    #[tokio::test]
    async fn test_in_flight_get_does_not_outlive_write() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/7/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"pk": 7, "is_active": true}))
                    .set_delay(Duration::from_millis(300)),
            )
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/7/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"pk": 7, "is_active": false})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/v3/core/users/7/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"pk": 7, "is_active": false})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = AuthentikClient::new(cached_config(&server)).unwrap();

        let (before, patched) = tokio::join!(client.core.users_retrieve(7), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            client.core.users_partial_update(7, &json!({"is_active": false})).await
        });
        assert_eq!(before.unwrap()["is_active"], true);
        assert_eq!(patched.unwrap()["is_active"], false);

        let after = client.core.users_retrieve(7).await.unwrap();
        assert_eq!(after["is_active"], false);
    }
}
