mod api;
pub mod cache;
pub mod config;

pub use api::{
    AdminApi, ApiResult, ApiSdkError, AuthenticatorsApi, CircuitBreaker, CircuitState, CoreApi,
    CryptoApi, EventsApi, FlowsApi, HttpClient, ManagedApi, OAuth2Api, OutpostsApi,
    PaginatedResult, Pagination, PagingContext, PoliciesApi, PropertyMappingsApi, ProvidersApi,
    RacApi, RbacApi, RootApi, SchemaApi, SourcesApi, StagesApi, TasksApi, admin, authenticators,
    core, crypto, events, flows, managed, oauth2, outposts, policies, property_mappings,
    providers, rac, rbac, root, schema, sources, stages, tasks,
};
pub use cache::{AuthentikCache, InMemoryCache};
pub use config::AuthentikConfig;
use std::sync::Arc;

/// Client for the Authentik REST API with one service per resource group.
///
/// All services share a single connection pool, circuit breaker and cache.
pub struct AuthentikClient {
    pub admin: AdminApi,
    pub authenticators: AuthenticatorsApi,
    pub core: CoreApi,
    pub crypto: CryptoApi,
    pub events: EventsApi,
    pub flows: FlowsApi,
    pub managed: ManagedApi,
    pub oauth2: OAuth2Api,
    pub outposts: OutpostsApi,
    pub policies: PoliciesApi,
    pub property_mappings: PropertyMappingsApi,
    pub providers: ProvidersApi,
    pub rac: RacApi,
    pub rbac: RbacApi,
    pub root: RootApi,
    pub schema: SchemaApi,
    pub sources: SourcesApi,
    pub stages: StagesApi,
    pub tasks: TasksApi,
    http: Arc<HttpClient>,
}

impl AuthentikClient {
    pub fn new(config: AuthentikConfig) -> ApiResult<Self> {
        Ok(Self::from_http(Arc::new(HttpClient::new(config)?)))
    }

    /// Uses `cache` for GET responses when caching is enabled in `config`.
    pub fn with_cache(config: AuthentikConfig, cache: Arc<dyn AuthentikCache>) -> ApiResult<Self> {
        Ok(Self::from_http(Arc::new(HttpClient::with_cache(config, cache)?)))
    }

    /// Builds a client from `AUTHENTIK_*` environment variables (and `.env`).
    pub fn from_env() -> ApiResult<Self> {
        Self::new(AuthentikConfig::from_env()?)
    }

    fn from_http(client: Arc<HttpClient>) -> Self {
        Self {
            admin: AdminApi::new(Arc::clone(&client)),
            authenticators: AuthenticatorsApi::new(Arc::clone(&client)),
            core: CoreApi::new(Arc::clone(&client)),
            crypto: CryptoApi::new(Arc::clone(&client)),
            events: EventsApi::new(Arc::clone(&client)),
            flows: FlowsApi::new(Arc::clone(&client)),
            managed: ManagedApi::new(Arc::clone(&client)),
            oauth2: OAuth2Api::new(Arc::clone(&client)),
            outposts: OutpostsApi::new(Arc::clone(&client)),
            policies: PoliciesApi::new(Arc::clone(&client)),
            property_mappings: PropertyMappingsApi::new(Arc::clone(&client)),
            providers: ProvidersApi::new(Arc::clone(&client)),
            rac: RacApi::new(Arc::clone(&client)),
            rbac: RbacApi::new(Arc::clone(&client)),
            root: RootApi::new(Arc::clone(&client)),
            schema: SchemaApi::new(Arc::clone(&client)),
            sources: SourcesApi::new(Arc::clone(&client)),
            stages: StagesApi::new(Arc::clone(&client)),
            tasks: TasksApi::new(Arc::clone(&client)),
            http: client,
        }
    }

    /// The shared request pipeline, for endpoints without a dedicated method.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
