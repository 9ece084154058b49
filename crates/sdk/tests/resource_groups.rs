//! Path and verb mapping of the resource group services, checked against a
//! mocked Authentik instance.

use authentik_client::{
    ApiSdkError, AuthentikClient, AuthentikConfig, PagingContext,
    events::EventsVolumeListParams,
    policies::BindingsListParams,
    providers::Oauth2ListParams,
    schema::{SchemaFormat, SchemaRetrieveParams},
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> AuthentikClient {
    let mut config = AuthentikConfig::new(server.uri(), "test-token");
    config.retry.max_retries = 0;
    AuthentikClient::new(config).expect("client should build")
}

fn page(results: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "pagination": { "count": results.as_array().map(Vec::len).unwrap_or(0) },
        "results": results,
    }))
}

mod core_tests {
    use super::*;

    /// Numeric ids go to the typed retrieve endpoint
    #[tokio::test]
    async fn test_get_user_by_numeric_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/42/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"pk": 42, "username": "ak"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let user = client(&server).core.get_user(" 42 ").await.unwrap();

        assert_eq!(user["pk"], 42);
    }

    /// Anything else is used as the raw path segment
    #[tokio::test]
    async fn test_get_user_by_non_numeric_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/me/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"pk": 1}})))
            .expect(1)
            .mount(&server)
            .await;

        let me = client(&server).core.get_user("me").await.unwrap();

        assert_eq!(me["user"]["pk"], 1);
    }

    /// Blank ids are rejected before any request is made
    #[tokio::test]
    async fn test_get_user_rejects_blank_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client(&server);

        for id in ["", "   "] {
            let err = client.core.get_user(id).await.unwrap_err();
            assert!(matches!(err, ApiSdkError::ConfigError(_)));
        }
    }

    /// Ids that would change the request path are rejected before any request is made
    #[tokio::test]
    async fn test_get_user_rejects_path_characters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pk": 1})))
            .expect(0)
            .mount(&server)
            .await;

        let client = client(&server);

        for id in ["5#x", "../groups", "a?b"] {
            let err = client.core.get_user(id).await.unwrap_err();
            assert!(matches!(err, ApiSdkError::ConfigError(_)), "{id} should be rejected");
        }
    }

    /// list_users only sends paging
    #[tokio::test]
    async fn test_list_users_sends_only_paging() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/users/"))
            .and(query_param("page", "3"))
            .and(query_param_is_missing("page_size"))
            .and(query_param_is_missing("ordering"))
            .respond_with(page(json!([{"pk": 1}, {"pk": 2}])))
            .expect(1)
            .mount(&server)
            .await;

        let users = client(&server).core.list_users(Some(3), None).await.unwrap();

        assert_eq!(users.results.len(), 2);
        assert_eq!(users.pagination.count, 2);
    }

    /// Slug-addressed actions with a query filter
    #[tokio::test]
    async fn test_application_check_access() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/core/applications/grafana/check_access/"))
            .and(query_param("for_user", "12"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"passing": true, "messages": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let params = authentik_client::core::ApplicationsCheckAccessRetrieveParams {
            for_user: Some(12),
        };
        let access = client(&server)
            .core
            .applications_check_access_retrieve("grafana", &params)
            .await
            .unwrap();

        assert_eq!(access["passing"], true);
    }
}

mod group_tests {
    use super::*;

    /// Double-underscore filters keep their upstream names
    #[tokio::test]
    async fn test_policy_binding_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/policies/bindings/"))
            .and(query_param("policy__isnull", "false"))
            .and(query_param("enabled", "true"))
            .respond_with(page(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let params = BindingsListParams {
            policy_isnull: Some(false),
            enabled: Some(true),
            ..Default::default()
        };
        let bindings = client(&server)
            .policies
            .bindings_list(&params, &PagingContext::default())
            .await
            .unwrap();

        assert!(bindings.results.is_empty());
    }

    /// Search is forwarded on provider lists
    #[tokio::test]
    async fn test_provider_list_with_search() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/providers/oauth2/"))
            .and(query_param("client_type", "confidential"))
            .and(query_param("search", "grafana"))
            .respond_with(page(json!([{"pk": 4, "name": "Grafana"}])))
            .expect(1)
            .mount(&server)
            .await;

        let params =
            Oauth2ListParams { client_type: Some("confidential".into()), ..Default::default() };
        let paging = PagingContext::default().with_search("grafana");
        let providers = client(&server).providers.oauth2_list(&params, &paging).await.unwrap();

        assert_eq!(providers.results[0]["name"], "Grafana");
    }

    /// Numeric ids are formatted into the path
    #[tokio::test]
    async fn test_provider_setup_urls() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/providers/oauth2/4/setup_urls/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"issuer": "https://auth.example.com/application/o/g/"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let urls = client(&server).providers.oauth2_setup_urls_retrieve(4).await.unwrap();

        assert!(urls["issuer"].as_str().unwrap().ends_with("/o/g/"));
    }

    /// Float filters and array bodies on analytics endpoints
    #[tokio::test]
    async fn test_event_volume() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/events/events/volume/"))
            .and(query_param("history_days", "7.5"))
            .and(query_param("action", "login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"action": "login", "time": "2024-01-01T00:00:00Z", "count": 3}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let params = EventsVolumeListParams {
            history_days: Some(7.5),
            action: Some("login".into()),
            ..Default::default()
        };
        let volume = client(&server)
            .events
            .events_volume_list(&params, &PagingContext::default())
            .await
            .unwrap();

        assert_eq!(volume.results[0]["count"], 3);
    }

    /// Bodyless POST actions
    #[tokio::test]
    async fn test_post_actions_without_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v3/managed/blueprints/b1/apply/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "successful"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v3/tasks/schedules/s1/send/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);

        let applied = client.managed.blueprints_apply_create("b1").await.unwrap();
        assert_eq!(applied["status"], "successful");

        let sent = client.tasks.schedules_send_create("s1").await.unwrap();
        assert!(sent.is_null());
    }

    /// PUT and DELETE across groups
    #[tokio::test]
    async fn test_update_and_destroy() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v3/stages/password/0c3c2a16-0000-4000-8000-000000000000/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "pw"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v3/sources/oauth/github/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v3/authenticators/static/9/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);

        let stage = client
            .stages
            .password_update("0c3c2a16-0000-4000-8000-000000000000", &json!({"name": "pw"}))
            .await
            .unwrap();
        assert_eq!(stage["name"], "pw");

        client.sources.oauth_destroy("github").await.unwrap();
        client.authenticators.static_destroy(9).await.unwrap();
    }

    /// The schema endpoint answers raw text
    #[tokio::test]
    async fn test_schema_is_returned_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/schema/"))
            .and(query_param("format", "yaml"))
            .and(query_param("lang", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_string("openapi: 3.0.3\n"))
            .expect(1)
            .mount(&server)
            .await;

        let params =
            SchemaRetrieveParams { format: Some(SchemaFormat::Yaml), lang: Some("en".into()) };
        let schema = client(&server).schema.retrieve(&params).await.unwrap();

        assert_eq!(schema, "openapi: 3.0.3\n");
    }
}
